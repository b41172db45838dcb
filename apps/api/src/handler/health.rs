//! # ヘルスチェックハンドラ
//!
//! API の稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {"status":"ok"}
//! ```

use axum::Json;
use todos_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// サーバーが正常に稼働していることを確認するためのエンドポイント。
/// ストアには依存せず、常に成功する。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::ok())
}
