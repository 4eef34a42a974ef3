//! Todo 作成ユースケース
//!
//! 入力から Todo を組み立てて検証し、注入された保存処理に渡します。

use chrono::{DateTime, Utc};
use domain::{Todo, TodoValidationError};
use std::future::Future;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// 保存処理（永続化層から注入）
pub trait SaveTodo: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn save(&self, todo: &Todo) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl<F, Fut, E> SaveTodo for F
where
    F: Fn(Todo) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), E>> + Send,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn save(&self, todo: &Todo) -> impl Future<Output = Result<(), E>> + Send {
        self(todo.clone())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreateError<E> {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("due date must be in the future")]
    InvalidDueDate,

    /// 保存処理のエラー（そのまま返す）
    #[error(transparent)]
    Store(E),
}

impl<E> From<TodoValidationError> for CreateError<E> {
    fn from(e: TodoValidationError) -> Self {
        match e {
            TodoValidationError::EmptyTitle => CreateError::EmptyTitle,
            TodoValidationError::InvalidDueDate => CreateError::InvalidDueDate,
        }
    }
}

pub struct CreateTodoUseCase<S> {
    save_todo: S,
}

impl<S: SaveTodo> CreateTodoUseCase<S> {
    pub fn new(save_todo: S) -> Self {
        Self { save_todo }
    }

    /// Todo を作成します。
    /// 検証に失敗した場合、保存処理は呼び出されません。
    #[instrument(skip(self), fields(usecase = "create"))]
    pub async fn execute(
        &self,
        title: &str,
        due_date: DateTime<Utc>,
    ) -> Result<Todo, CreateError<S::Error>> {
        let todo = Todo::new(title, due_date);

        if let Err(e) = todo.validate_at(Utc::now()) {
            warn!(error = %e, "Rejected todo");
            return Err(e.into());
        }

        if let Err(e) = self.save_todo.save(&todo).await {
            error!(error = %e, "Failed to save todo");
            return Err(CreateError::Store(e));
        }

        info!("Todo created");
        Ok(todo)
    }
}
