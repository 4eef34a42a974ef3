use domain::TodoId;
use std::future::Future;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// 完了状態の反転処理（永続化層から注入）
pub trait ToggleTodo: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn toggle(&self, id: TodoId) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl<F, Fut, E> ToggleTodo for F
where
    F: Fn(TodoId) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), E>> + Send,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn toggle(&self, id: TodoId) -> impl Future<Output = Result<(), E>> + Send {
        self(id)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToggleError<E> {
    #[error("todo ID cannot be empty")]
    NoId,

    #[error(transparent)]
    Store(E),
}

pub struct ToggleTodoUseCase<T> {
    toggle_todo: T,
}

impl<T: ToggleTodo> ToggleTodoUseCase<T> {
    pub fn new(toggle_todo: T) -> Self {
        Self { toggle_todo }
    }

    #[instrument(skip(self), fields(usecase = "toggle"))]
    pub async fn execute(&self, id: &str) -> Result<(), ToggleError<T::Error>> {
        if id.is_empty() {
            warn!("Rejected empty todo id");
            return Err(ToggleError::NoId);
        }

        match self.toggle_todo.toggle(TodoId::from(id)).await {
            Ok(()) => {
                info!("Todo toggled");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to toggle todo");
                Err(ToggleError::Store(e))
            }
        }
    }
}
