//! # テスト用モックリポジトリ
//!
//! ユースケーステストや API テストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todos-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use todos_domain::task::{Task, TaskId, TaskTitle};

use crate::{error::InfraError, repository::TaskRepository};

/// インメモリ実装の TaskRepository
///
/// ID の採番と `created_at` の設定を PostgreSQL 実装と同じ契約で模倣する。
/// `find_all` も同じ並び順（created_at DESC, id DESC）を返す。
#[derive(Clone, Default)]
pub struct MockTaskRepository {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    tasks:   Vec<Task>,
    next_id: i64,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在格納されているタスク数を返す（検証用）
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().tasks.len()
    }

    /// タスクが 1 件もないかを返す（検証用）
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
        let state = self.state.lock().unwrap();
        let mut tasks = state.tasks.clone();
        // PostgreSQL 実装と同じ並び順: created_at DESC, id DESC
        tasks.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then(b.id().cmp(&a.id()))
        });
        Ok(tasks)
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, InfraError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .tasks
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn insert(&self, title: &TaskTitle) -> Result<Task, InfraError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let task = Task::from_db(TaskId::new(state.next_id), title.clone(), false, Utc::now());
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> Result<(), InfraError> {
        let mut state = self.state.lock().unwrap();
        if let Some(stored) = state.tasks.iter_mut().find(|t| t.id() == task.id()) {
            *stored = task.clone();
        }
        // 対象行が存在しない場合は 0 行更新と同じ扱い（エラーにしない）
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<(), InfraError> {
        let mut state = self.state.lock().unwrap();
        state.tasks.retain(|t| t.id() != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn title(s: &str) -> TaskTitle {
        TaskTitle::new(s).unwrap()
    }

    #[tokio::test]
    async fn test_insertが連番のidを採番する() {
        let repo = MockTaskRepository::new();

        let a = repo.insert(&title("A")).await.unwrap();
        let b = repo.insert(&title("B")).await.unwrap();

        assert_eq!(a.id(), TaskId::new(1));
        assert_eq!(b.id(), TaskId::new(2));
        assert!(!a.completed());
    }

    #[tokio::test]
    async fn test_find_allが新しい順で返す() {
        let repo = MockTaskRepository::new();
        repo.insert(&title("A")).await.unwrap();
        repo.insert(&title("B")).await.unwrap();
        repo.insert(&title("C")).await.unwrap();

        let tasks = repo.find_all().await.unwrap();

        let titles: Vec<&str> = tasks.iter().map(|t| t.title().as_str()).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn test_updateが格納済みタスクを置き換える() {
        let repo = MockTaskRepository::new();
        let mut task = repo.insert(&title("A")).await.unwrap();

        task.set_completed(true);
        repo.update(&task).await.unwrap();

        let stored = repo.find_by_id(task.id()).await.unwrap().unwrap();
        assert!(stored.completed());
    }

    #[tokio::test]
    async fn test_deleteが冪等である() {
        let repo = MockTaskRepository::new();
        let task = repo.insert(&title("A")).await.unwrap();

        repo.delete(task.id()).await.unwrap();
        // 2 回目も成功する
        repo.delete(task.id()).await.unwrap();

        assert!(repo.is_empty());
    }
}
