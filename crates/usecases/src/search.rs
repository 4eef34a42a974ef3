use domain::Todo;
use std::future::Future;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

/// 検索処理（永続化層から注入）
pub trait SearchTodos: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn search(&self, query: String) -> impl Future<Output = Result<Vec<Todo>, Self::Error>> + Send;
}

impl<F, Fut, E> SearchTodos for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<Todo>, E>> + Send,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn search(&self, query: String) -> impl Future<Output = Result<Vec<Todo>, E>> + Send {
        self(query)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError<E> {
    #[error("search query cannot be empty")]
    NoSearchQuery,

    #[error(transparent)]
    Store(E),
}

pub struct SearchTodosUseCase<S> {
    search_todos: S,
}

impl<S: SearchTodos> SearchTodosUseCase<S> {
    pub fn new(search_todos: S) -> Self {
        Self { search_todos }
    }

    /// 前後の空白を除いたクエリで検索します。
    #[instrument(skip(self), fields(usecase = "search"))]
    pub async fn execute(&self, query: &str) -> Result<Vec<Todo>, SearchError<S::Error>> {
        let query = query.trim();
        if query.is_empty() {
            warn!("Rejected empty search query");
            return Err(SearchError::NoSearchQuery);
        }

        let todos = self
            .search_todos
            .search(query.to_string())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to search todos");
                SearchError::Store(e)
            })?;

        debug!(count = todos.len(), "Search completed");
        Ok(todos)
    }
}
