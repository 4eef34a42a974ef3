use thiserror::Error;

/// Todo の不変条件違反
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("due date must be in the future")]
    InvalidDueDate,
}

/// ページ指定の不正
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageOptionsError {
    #[error("page number must be greater than 0")]
    PageNumberInvalid,

    #[error("page size must be greater than 0")]
    PageSizeInvalid,
}
