//! # リポジトリ実装
//!
//! タスクの永続化を抽象化するリポジトリトレイトと、その具体実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod task_repository;

pub use task_repository::{PostgresTaskRepository, TaskRepository};
