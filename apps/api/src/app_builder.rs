//! # アプリケーション構築
//!
//! ルーターと CORS レイヤーの組み立てを行う。
//! `main.rs` と統合テストの双方から同じ構成でアプリを構築できるよう、
//! エントリーポイントから分離している。

use std::sync::Arc;

use axum::{
   Router,
   http::{HeaderValue, Method, header},
   routing::{get, patch},
};
use tower_http::{
   cors::{AllowOrigin, CorsLayer},
   trace::TraceLayer,
};

use crate::handler::{TaskState, create_task, delete_task, health_check, list_tasks, update_task};
use todos_infra::repository::TaskRepository;

/// ルーターを構築する
///
/// リポジトリ実装はジェネリクスで注入する（本番は PostgreSQL、テストはモック）。
pub fn build_app<R>(state: Arc<TaskState<R>>, cors: CorsLayer) -> Router
where
   R: TaskRepository + 'static,
{
   Router::new()
      .route("/health", get(health_check))
      .route("/tasks", get(list_tasks::<R>).post(create_task::<R>))
      .route("/tasks/{id}", patch(update_task::<R>).delete(delete_task::<R>))
      .with_state(state)
      .layer(cors)
      .layer(TraceLayer::new_for_http())
}

/// CORS レイヤーを構築する
///
/// 許可オリジンは設定から受け取った一覧に限定する。
/// クレデンシャル付きリクエストを許可するため、ワイルドカードは使用しない。
pub fn build_cors_layer(allow_origins: &[String]) -> anyhow::Result<CorsLayer> {
   let origins = allow_origins
      .iter()
      .map(|origin| {
         origin
            .parse::<HeaderValue>()
            .map_err(|e| anyhow::anyhow!("ALLOW_ORIGINS のオリジンが不正です: {origin} ({e})"))
      })
      .collect::<anyhow::Result<Vec<_>>>()?;

   Ok(CorsLayer::new()
      .allow_origin(AllowOrigin::list(origins))
      .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
      .allow_headers([header::CONTENT_TYPE])
      .allow_credentials(true))
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_build_cors_layerが有効なオリジンを受け入れる() {
      let result = build_cors_layer(&[
         "http://localhost:5173".to_string(),
         "http://127.0.0.1:5173".to_string(),
      ]);
      assert!(result.is_ok());
   }

   #[test]
   fn test_build_cors_layerが不正なオリジンを拒否する() {
      let result = build_cors_layer(&["改行を含む\nオリジン".to_string()]);
      assert!(result.is_err());
   }

   #[test]
   fn test_build_cors_layerが空リストを受け入れる() {
      // オリジンなし = すべてのクロスオリジンを拒否
      assert!(build_cors_layer(&[]).is_ok());
   }
}
