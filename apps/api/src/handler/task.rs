//! # タスク API ハンドラ
//!
//! タスクの CRUD エンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! - `GET /tasks` - タスク一覧（作成日時の新しい順）
//! - `POST /tasks` - タスク作成
//! - `PATCH /tasks/{id}` - タスク更新（部分更新）
//! - `DELETE /tasks/{id}` - タスク削除（冪等）

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todos_domain::task::{Task, TaskId};
use todos_infra::repository::TaskRepository;

use crate::{
   error::ApiError,
   usecase::task::{CreateTaskInput, TaskUseCaseImpl, UpdateTaskInput},
};

/// タスク API の共有状態
pub struct TaskState<R> {
   pub usecase: TaskUseCaseImpl<R>,
}

// --- リクエスト/レスポンス型 ---

/// タスク DTO
///
/// `created_at` は一覧の並び順にのみ使用するため、レスポンスには含めない。
#[derive(Debug, Serialize)]
pub struct TaskDto {
   pub id:        i64,
   pub title:     String,
   pub completed: bool,
}

impl TaskDto {
   fn from_task(task: &Task) -> Self {
      Self {
         id:        task.id().as_i64(),
         title:     task.title().to_string(),
         completed: task.completed(),
      }
   }
}

/// タスク作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
   pub title: String,
}

/// タスク更新リクエスト（部分更新）
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
   pub title:     Option<String>,
   pub completed: Option<bool>,
}

// --- ハンドラ ---

/// GET /tasks
///
/// 全タスクを作成日時の新しい順（同時刻は ID の大きい順）で取得する。
pub async fn list_tasks<R>(
   State(state): State<Arc<TaskState<R>>>,
) -> Result<impl IntoResponse, ApiError>
where
   R: TaskRepository,
{
   let tasks = state.usecase.list_tasks().await?;

   let items: Vec<TaskDto> = tasks.iter().map(TaskDto::from_task).collect();
   Ok((StatusCode::OK, Json(items)))
}

/// POST /tasks
///
/// タスクを作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたタスク（採番済み ID を含む）
/// - `422 Unprocessable Entity`: タイトルがトリム後に空、または 255 文字超
pub async fn create_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   Json(req): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, ApiError>
where
   R: TaskRepository,
{
   let task = state
      .usecase
      .create_task(CreateTaskInput { title: req.title })
      .await?;

   Ok((StatusCode::CREATED, Json(TaskDto::from_task(&task))))
}

/// PATCH /tasks/{id}
///
/// タスクを部分更新する。指定されたフィールドのみ上書きする。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のタスク
/// - `404 Not Found`: 指定 ID のタスクが存在しない
/// - `422 Unprocessable Entity`: 両フィールド未指定、またはタイトル不正
pub async fn update_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   Path(id): Path<i64>,
   Json(req): Json<UpdateTaskRequest>,
) -> Result<impl IntoResponse, ApiError>
where
   R: TaskRepository,
{
   let task = state
      .usecase
      .update_task(
         TaskId::new(id),
         UpdateTaskInput {
            title:     req.title,
            completed: req.completed,
         },
      )
      .await?;

   Ok((StatusCode::OK, Json(TaskDto::from_task(&task))))
}

/// DELETE /tasks/{id}
///
/// タスクを削除する。対象が存在しない場合も `204` を返す（冪等）。
pub async fn delete_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError>
where
   R: TaskRepository,
{
   state.usecase.delete_task(TaskId::new(id)).await?;

   Ok(StatusCode::NO_CONTENT)
}
