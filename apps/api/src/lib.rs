//! # Todos API ライブラリ
//!
//! Todos API のルーター構築・設定・ハンドラ・ユースケースを公開する。
//! バイナリ（`main.rs`）と統合テストの双方から利用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
