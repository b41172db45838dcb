//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントが返すレスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// `GET /health` は常に `{"status":"ok"}` を返す。
/// ストアへの依存を持たない静的な死活確認のため、フィールドは `status` のみ。
///
/// ## 使用例
///
/// ```
/// use todos_shared::HealthResponse;
///
/// let response = HealthResponse::ok();
/// assert_eq!(response.status, "ok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（常に `"ok"`）
    pub status: String,
}

impl HealthResponse {
    /// 稼働中を示すレスポンスを作成する
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
