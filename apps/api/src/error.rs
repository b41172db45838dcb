//! # Todos API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | ログ |
//! |-----------|----------------|------|
//! | `Validation` | 422 Unprocessable Entity | なし（サーバー障害ではない） |
//! | `NotFound` | 404 Not Found | なし（サーバー障害ではない） |
//! | `Database` | 500 Internal Server Error | `tracing::error!` |
//!
//! レスポンスボディは RFC 9457 Problem Details（[`ErrorResponse`]）。
//! 500 系の detail は固定値とし、内部情報を漏らさない。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todos_domain::DomainError;
use todos_infra::InfraError;
use todos_shared::ErrorResponse;

/// Todos API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// バリデーションエラー
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => ApiError::Validation(msg),
         DomainError::NotFound { entity_type, id } => {
            ApiError::NotFound(format!("{entity_type} が見つかりません: {id}"))
         }
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match &self {
         ApiError::Validation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorResponse::validation_error(msg.clone()),
         ),
         ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg.clone())),
         ApiError::Database(e) => {
            tracing::error!("データベースエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
