//! # タスク
//!
//! タスク（todo 項目）を表現するドメインモデル。
//!
//! ## 不変条件
//!
//! - `title` はトリム後 1〜255 文字（[`TaskTitle`] が保証する）
//! - `id` は DB 採番で、作成後は変更されない
//! - `completed` は作成時 `false`
//! - `created_at` は作成時に一度だけ設定され、一覧の並び順にのみ使用する
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todos_domain::task::{Task, TaskId, TaskTitle};
//!
//! let title = TaskTitle::new("  牛乳を買う  ")?;
//! assert_eq!(title.as_str(), "牛乳を買う");
//!
//! let mut task = Task::from_db(TaskId::new(1), title, false, chrono::Utc::now());
//! task.set_completed(true);
//! assert!(task.completed());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;

// =========================================================================
// TaskId（タスク識別子）
// =========================================================================

/// タスクの一意識別子
///
/// DB の `BIGSERIAL` で採番される整数 ID。再利用・変更されない。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub struct TaskId(i64);

impl TaskId {
    /// 採番済みの値から TaskId を作成する
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// 内部値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// TaskTitle（タスクタイトル）
// =========================================================================

/// タスクタイトルの最大文字数（DB: `VARCHAR(255)`）
const MAX_TITLE_LENGTH: usize = 255;

/// タスクタイトル（値オブジェクト）
///
/// 前後の空白をトリムしたうえで 1〜255 文字。
/// 作成時・更新時のタイトル検証はすべてこのコンストラクタを通る。
///
/// # 不変条件
///
/// - トリム済みである
/// - 空文字列ではない
/// - 最大 255 文字
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTitle(String);

impl TaskTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "タイトルを入力してください".to_string(),
            ));
        }

        if value.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::Validation(
                "タイトルは 255 文字以内で入力してください".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// Task（タスクエンティティ）
// =========================================================================

/// タスクエンティティ
///
/// ID・タイトル・完了フラグ・作成日時を持つ単一テーブルのモデル。
/// 他エンティティとの関連は持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id:         TaskId,
    title:      TaskTitle,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// DB から取得した値でエンティティを復元する
    ///
    /// 検証は行わない。DB の NOT NULL / CHECK 制約により
    /// 格納済みの値は常に不変条件を満たす前提。
    pub fn from_db(
        id: TaskId,
        title: TaskTitle,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            completed,
            created_at,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &TaskTitle {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// タイトルを変更する
    ///
    /// 検証済みの [`TaskTitle`] のみ受け取るため、ここでの失敗はない。
    pub fn rename(&mut self, title: TaskTitle) {
        self.title = title;
    }

    /// 完了フラグを変更する
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
