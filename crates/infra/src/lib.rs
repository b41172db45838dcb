//! # Todos インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: [`repository::TaskRepository`] の PostgreSQL 実装
//! - **エラー定義**: データベース操作で発生するエラーのラップ
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装

pub mod db;
pub mod error;
pub mod repository;

// テスト用モックリポジトリ（test-utils feature で他クレートからも利用可能）
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
