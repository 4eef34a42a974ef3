//! Todo アプリのユースケース層
//!
//! 各ユースケースは入力を検証し、注入された永続化処理を 1 回だけ呼び出します。
//! 永続化処理のエラーは `Store` バリアントとしてそのまま返します。

pub mod create;
pub mod list;
pub mod remove;
pub mod search;
pub mod toggle;

pub use create::{CreateError, CreateTodoUseCase, SaveTodo};
pub use list::{FetchTodos, ListError, ListTodosUseCase};
pub use remove::{DeleteTodo, RemoveError, RemoveTodoUseCase};
pub use search::{SearchError, SearchTodos, SearchTodosUseCase};
pub use toggle::{ToggleError, ToggleTodo, ToggleTodoUseCase};

pub use domain::{PageOptions, PageOptionsError, Pages, Todo, TodoId, TodoValidationError};
