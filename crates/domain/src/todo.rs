use crate::errors::TodoValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// TodoID
///
/// 採番は永続化層が行うため、作成前は空文字列のままです。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 未採番（空文字列）かどうか
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Todo エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub due_date: DateTime<Utc>,
}

impl Todo {
    /// 未採番・未完了の Todo を組み立てます。検証は行いません。
    pub fn new(title: impl Into<String>, due_date: DateTime<Utc>) -> Self {
        Self {
            id: TodoId::default(),
            title: title.into(),
            completed: false,
            due_date,
        }
    }

    /// 現在時刻を基準に検証します。
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        self.validate_at(Utc::now())
    }

    /// `now` を基準に検証します。
    /// タイトルの検査が期日の検査より優先されます。
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<(), TodoValidationError> {
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }

        // 期日は now より厳密に後でなければならない
        if self.due_date <= now {
            return Err(TodoValidationError::InvalidDueDate);
        }

        Ok(())
    }
}
