//! # Todos ドメイン層
//!
//! タスク管理のビジネスルールを表現するドメインモデル。
//!
//! ## 設計方針
//!
//! このクレートはエンティティと値オブジェクト、およびドメインエラーのみを
//! 提供する。永続化や HTTP の詳細には依存しない（依存性逆転の原則）。
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//!    ↘
//!      shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`task`] - タスクエンティティと値オブジェクト
//! - [`error`] - ドメイン層エラー定義

pub mod error;
pub mod task;

pub use error::DomainError;
