//! Todo 一覧ユースケース（ページング付き）

use domain::{PageOptions, PageOptionsError, Pages, Todo};
use std::future::Future;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

/// ページ単位の取得処理（永続化層から注入）
pub trait FetchTodos: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch(
        &self,
        filter_completed: bool,
        opts: PageOptions,
    ) -> impl Future<Output = Result<Vec<Todo>, Self::Error>> + Send;
}

impl<F, Fut, E> FetchTodos for F
where
    F: Fn(bool, PageOptions) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<Todo>, E>> + Send,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn fetch(
        &self,
        filter_completed: bool,
        opts: PageOptions,
    ) -> impl Future<Output = Result<Vec<Todo>, E>> + Send {
        self(filter_completed, opts)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError<E> {
    #[error("page number must be greater than 0")]
    PageNumberInvalid,

    #[error("page size must be greater than 0")]
    PageSizeInvalid,

    #[error(transparent)]
    Store(E),
}

impl<E> From<PageOptionsError> for ListError<E> {
    fn from(e: PageOptionsError) -> Self {
        match e {
            PageOptionsError::PageNumberInvalid => ListError::PageNumberInvalid,
            PageOptionsError::PageSizeInvalid => ListError::PageSizeInvalid,
        }
    }
}

pub struct ListTodosUseCase<F> {
    fetch_todos: F,
    default_page: PageOptions,
}

impl<F: FetchTodos> ListTodosUseCase<F> {
    /// 省略時のページ指定は 1 ページ目・10 件です。
    pub fn new(fetch_todos: F) -> Self {
        Self {
            fetch_todos,
            default_page: PageOptions::default(),
        }
    }

    /// 省略時のページ指定を差し替えます（設定値から渡す想定）。
    pub fn with_default_page(
        fetch_todos: F,
        default_page: PageOptions,
    ) -> Result<Self, PageOptionsError> {
        default_page.validate()?;
        Ok(Self {
            fetch_todos,
            default_page,
        })
    }

    pub fn default_page(&self) -> PageOptions {
        self.default_page
    }

    /// `total` は取得件数です。件数クエリは発行しません。
    #[instrument(skip(self), fields(usecase = "list"))]
    pub async fn execute(
        &self,
        filter_completed: bool,
        opts: Option<PageOptions>,
    ) -> Result<Pages, ListError<F::Error>> {
        let opts = match opts {
            Some(opts) => {
                if let Err(e) = opts.validate() {
                    warn!(error = %e, "Rejected page options");
                    return Err(e.into());
                }
                opts
            }
            None => self.default_page,
        };

        let todos = match self.fetch_todos.fetch(filter_completed, opts).await {
            Ok(todos) => todos,
            Err(e) => {
                error!(error = %e, "Failed to fetch todos");
                return Err(ListError::Store(e));
            }
        };

        debug!(count = todos.len(), page = opts.number, size = opts.size, "Todos fetched");
        Ok(Pages::new(todos, opts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::future::{ready, Ready};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[error("database error")]
    struct DbError;

    type Calls = Arc<Mutex<Vec<(bool, PageOptions)>>>;

    /// 要求されたページサイズ分の Todo を返すスタブ
    fn sized_fetch(
        calls: Calls,
    ) -> impl Fn(bool, PageOptions) -> Ready<Result<Vec<Todo>, DbError>> + Send + Sync {
        move |filter, opts| {
            calls.lock().unwrap().push((filter, opts));
            let due = Utc::now() + Duration::hours(24);
            let todos = (0..opts.size)
                .map(|i| Todo::new(format!("todo {i}"), due))
                .collect();
            ready(Ok(todos))
        }
    }

    #[tokio::test]
    async fn test_list_with_valid_options() {
        // Arrange
        let calls = Calls::default();
        let usecase = ListTodosUseCase::new(sized_fetch(calls.clone()));

        // Act
        let pages = usecase
            .execute(true, Some(PageOptions::new(2, 5)))
            .await
            .unwrap();

        // Assert
        assert_eq!(pages.todos.len(), 5);
        assert_eq!(pages.page, 2);
        assert_eq!(pages.size, 5);
        assert_eq!(pages.total, 5);
        assert_eq!(calls.lock().unwrap().as_slice(), &[(true, PageOptions::new(2, 5))]);
    }

    #[tokio::test]
    async fn test_list_without_options_uses_first_page_of_ten() {
        let calls = Calls::default();
        let usecase = ListTodosUseCase::new(sized_fetch(calls.clone()));

        let pages = usecase.execute(false, None).await.unwrap();

        assert_eq!(pages.page, 1);
        assert_eq!(pages.size, 10);
        assert_eq!(pages.todos.len(), 10);
        assert_eq!(calls.lock().unwrap().as_slice(), &[(false, PageOptions::new(1, 10))]);
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_options_without_fetching() {
        let cases = [
            ("invalid page number", PageOptions::new(0, 10), ListError::PageNumberInvalid),
            ("invalid page size", PageOptions::new(1, 0), ListError::PageSizeInvalid),
            ("invalid both", PageOptions::new(0, 0), ListError::PageNumberInvalid),
        ];

        for (name, opts, expected) in cases {
            let calls = Calls::default();
            let usecase = ListTodosUseCase::new(sized_fetch(calls.clone()));

            let err = usecase.execute(false, Some(opts)).await.unwrap_err();

            assert_eq!(err, expected, "case: {name}");
            assert!(calls.lock().unwrap().is_empty(), "case: {name}");
        }
    }

    #[tokio::test]
    async fn test_list_propagates_fetch_error() {
        let usecase = ListTodosUseCase::new(|_filter: bool, _opts: PageOptions| {
            ready(Err::<Vec<Todo>, _>(DbError))
        });

        let err = usecase
            .execute(false, Some(PageOptions::new(1, 10)))
            .await
            .unwrap_err();

        assert_eq!(err, ListError::Store(DbError));
    }

    #[tokio::test]
    async fn test_total_counts_returned_items_only() {
        // ストアがページサイズより少なく返しても total は返却件数
        let usecase = ListTodosUseCase::new(|_filter: bool, _opts: PageOptions| {
            let due = Utc::now() + Duration::hours(1);
            ready(Ok::<_, DbError>(vec![Todo::new("only one", due)]))
        });

        let pages = usecase.execute(false, None).await.unwrap();

        assert_eq!(pages.size, 10);
        assert_eq!(pages.total, 1);
    }

    #[tokio::test]
    async fn test_with_default_page_overrides_default() {
        let calls = Calls::default();
        let usecase =
            ListTodosUseCase::with_default_page(sized_fetch(calls.clone()), PageOptions::new(1, 25))
                .unwrap();

        let pages = usecase.execute(false, None).await.unwrap();

        assert_eq!(usecase.default_page(), PageOptions::new(1, 25));
        assert_eq!(pages.size, 25);
        assert_eq!(pages.todos.len(), 25);
    }

    #[test]
    fn test_with_default_page_rejects_invalid_default() {
        let result = ListTodosUseCase::with_default_page(
            sized_fetch(Calls::default()),
            PageOptions::new(1, 0),
        );

        assert!(matches!(result, Err(PageOptionsError::PageSizeInvalid)));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // ページ番号 0 はサイズに関わらず PageNumberInvalid
            #[test]
            fn zero_page_number_wins(size in 0u32..1_000) {
                let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
                let usecase = ListTodosUseCase::new(sized_fetch(Calls::default()));

                let err = rt
                    .block_on(usecase.execute(false, Some(PageOptions::new(0, size))))
                    .unwrap_err();

                prop_assert_eq!(err, ListError::PageNumberInvalid);
            }
        }
    }
}
