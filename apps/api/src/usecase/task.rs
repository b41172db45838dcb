//! # タスクユースケース
//!
//! タスクの作成・一覧・更新・削除に関するビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **検証は永続化の前**: 入力検証がすべて通ってから DB に触れる。
//!   不正な入力から部分的な書き込みは発生しない
//! - **タイトル検証は一箇所**: 作成・更新とも [`TaskTitle::new`] を通る
//! - **削除は冪等**: 存在確認をせず、対象がなくても成功とする

use todos_domain::task::{Task, TaskId, TaskTitle};
use todos_infra::repository::TaskRepository;

use crate::error::ApiError;

/// タスク作成の入力
#[derive(Debug)]
pub struct CreateTaskInput {
   pub title: String,
}

/// タスク更新の入力（部分更新）
#[derive(Debug)]
pub struct UpdateTaskInput {
   pub title:     Option<String>,
   pub completed: Option<bool>,
}

/// タスクユースケース実装
///
/// R: TaskRepository
pub struct TaskUseCaseImpl<R> {
   task_repo: R,
}

impl<R> TaskUseCaseImpl<R>
where
   R: TaskRepository,
{
   pub fn new(task_repo: R) -> Self {
      Self { task_repo }
   }

   /// 全タスクを作成日時の新しい順で取得する
   pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
      Ok(self.task_repo.find_all().await?)
   }

   /// タスクを作成する
   ///
   /// タイトルはトリム後 1〜255 文字。`completed` は `false`、
   /// `created_at` は DB 側で設定される。
   pub async fn create_task(&self, input: CreateTaskInput) -> Result<Task, ApiError> {
      let title = TaskTitle::new(input.title)?;

      Ok(self.task_repo.insert(&title).await?)
   }

   /// タスクを部分更新する
   ///
   /// - `title`・`completed` の両方が未指定ならバリデーションエラー
   /// - 指定されたフィールドのみ上書きし、未指定のフィールドは維持する
   /// - 対象タスクが存在しなければ NotFound
   pub async fn update_task(&self, id: TaskId, input: UpdateTaskInput) -> Result<Task, ApiError> {
      if input.title.is_none() && input.completed.is_none() {
         return Err(ApiError::Validation(
            "title か completed のいずれかを指定してください".to_string(),
         ));
      }

      // 永続化の前にタイトル検証を終える
      let new_title = input.title.map(TaskTitle::new).transpose()?;

      let mut task = self
         .task_repo
         .find_by_id(id)
         .await?
         .ok_or_else(|| ApiError::NotFound("タスクが見つかりません".to_string()))?;

      if let Some(title) = new_title {
         task.rename(title);
      }
      if let Some(completed) = input.completed {
         task.set_completed(completed);
      }

      self.task_repo.update(&task).await?;

      Ok(task)
   }

   /// タスクを削除する
   ///
   /// 対象が存在しない場合も成功を返す（冪等）。
   pub async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
      Ok(self.task_repo.delete(id).await?)
   }
}
