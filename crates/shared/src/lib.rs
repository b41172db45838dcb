//! # Todos 共通型
//!
//! API 層で使用する共通レスポンス型を提供する。
//!
//! ## 設計方針
//!
//! - 純粋なデータ構造のみ（`Serialize` / `Deserialize`）
//! - axum の `IntoResponse` 変換は API 側の責務（shared に axum 依存を入れない）

pub mod error_response;
pub mod health;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
