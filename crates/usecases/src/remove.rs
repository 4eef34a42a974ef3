use domain::TodoId;
use std::future::Future;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// 削除処理（永続化層から注入）
pub trait DeleteTodo: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn delete(&self, id: TodoId) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl<F, Fut, E> DeleteTodo for F
where
    F: Fn(TodoId) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), E>> + Send,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn delete(&self, id: TodoId) -> impl Future<Output = Result<(), E>> + Send {
        self(id)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoveError<E> {
    #[error("todo ID cannot be empty")]
    NoId,

    #[error(transparent)]
    Store(E),
}

pub struct RemoveTodoUseCase<D> {
    delete_todo: D,
}

impl<D: DeleteTodo> RemoveTodoUseCase<D> {
    pub fn new(delete_todo: D) -> Self {
        Self { delete_todo }
    }

    #[instrument(skip(self), fields(usecase = "remove"))]
    pub async fn execute(&self, id: &str) -> Result<(), RemoveError<D::Error>> {
        if id.is_empty() {
            warn!("Rejected empty todo id");
            return Err(RemoveError::NoId);
        }

        self.delete_todo.delete(TodoId::from(id)).await.map_err(|e| {
            error!(error = %e, "Failed to delete todo");
            RemoveError::Store(e)
        })?;

        info!("Todo removed");
        Ok(())
    }
}
