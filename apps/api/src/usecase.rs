//! # ユースケース層
//!
//! ハンドラから呼び出されるビジネスロジックを実装する。
//! リポジトリトレイトにのみ依存し、永続化の詳細には関与しない。

pub mod task;

pub use task::TaskUseCaseImpl;
