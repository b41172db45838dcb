//! # TaskRepository
//!
//! タスクの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID は DB 採番**: `insert` は `RETURNING` で採番済みの行を受け取り、
//!   永続化されたエンティティをそのまま返す
//! - **冪等な削除**: `delete` は対象行が存在しなくても成功する
//! - **1 操作 1 ステートメント**: 各メソッドは単一の SQL で完結し、
//!   行単位の原子性は DB に委譲する

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use todos_domain::task::{Task, TaskId, TaskTitle};

use crate::error::InfraError;

/// タスクリポジトリトレイト
///
/// タスクの CRUD 操作を定義する。
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 全タスクを作成日時の新しい順（同時刻は ID の大きい順）で取得する
    async fn find_all(&self) -> Result<Vec<Task>, InfraError>;

    /// ID でタスクを検索する
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError>;

    /// タスクを挿入し、採番された ID を含む永続化済みエンティティを返す
    ///
    /// `completed` は `false`、`created_at` は DB の `now()` で初期化される。
    async fn insert(&self, title: &TaskTitle) -> Result<Task, InfraError>;

    /// タスクを更新する（タイトル・完了フラグの変更後の状態を反映）
    async fn update(&self, task: &Task) -> Result<(), InfraError>;

    /// タスクを削除する
    ///
    /// 対象行が存在しない場合も成功を返す（冪等）。
    async fn delete(&self, id: TaskId) -> Result<(), InfraError>;
}

/// tasks テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id:         i64,
    title:      String,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Task {
        // DB の NOT NULL 制約と CHECK 制約により title は常に有効
        let title = TaskTitle::new(self.title).expect("DB に格納されたタイトルは常に有効");
        Task::from_db(TaskId::new(self.id), title, self.completed, self.created_at)
    }
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, completed, created_at
            FROM tasks
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, completed, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskRow::into_task))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, title: &TaskTitle) -> Result<Task, InfraError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (title)
            VALUES ($1)
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(title.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_task())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %task.id()))]
    async fn update(&self, task: &Task) -> Result<(), InfraError> {
        // 楽観的ロックは採用しない。直前に削除された行への UPDATE は
        // 0 行更新となるが、エラーにはしない
        sqlx::query(
            r#"
            UPDATE tasks
            SET title = $2, completed = $3
            WHERE id = $1
            "#,
        )
        .bind(task.id().as_i64())
        .bind(task.title().as_str())
        .bind(task.completed())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TaskId) -> Result<(), InfraError> {
        // 冪等: 対象行が存在しなくても成功（rows_affected は見ない）
        sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
