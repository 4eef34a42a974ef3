use crate::errors::PageOptionsError;
use crate::todo::Todo;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// ページング指定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    pub number: u32,
    pub size: u32,
}

impl PageOptions {
    pub fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// 両方不正な場合はページ番号のエラーを返します。
    pub fn validate(&self) -> Result<(), PageOptionsError> {
        if self.number < 1 {
            return Err(PageOptionsError::PageNumberInvalid);
        }

        if self.size < 1 {
            return Err(PageOptionsError::PageSizeInvalid);
        }

        Ok(())
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            number: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// 一覧取得の結果
///
/// `total` は取得できた件数であり、全体件数ではありません。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    pub todos: Vec<Todo>,
    pub page: u32,
    pub size: u32,
    pub total: usize,
}

impl Pages {
    pub fn new(todos: Vec<Todo>, opts: PageOptions) -> Self {
        let total = todos.len();
        Self {
            todos,
            page: opts.number,
            size: opts.size,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_default_is_first_page_of_ten() {
        let opts = PageOptions::default();
        assert_eq!(opts, PageOptions::new(1, 10));
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_validate_priority() {
        let cases = [
            ("valid options", PageOptions::new(1, 10), Ok(())),
            ("invalid page number", PageOptions::new(0, 10), Err(PageOptionsError::PageNumberInvalid)),
            ("invalid page size", PageOptions::new(1, 0), Err(PageOptionsError::PageSizeInvalid)),
            // 両方不正でもページ番号のエラーのみ
            ("invalid both", PageOptions::new(0, 0), Err(PageOptionsError::PageNumberInvalid)),
        ];

        for (name, opts, expected) in cases {
            assert_eq!(opts.validate(), expected, "case: {name}");
        }
    }

    #[test]
    fn test_pages_records_request_and_count() {
        // Arrange
        let todos = vec![Todo::new("Test Todo", Utc::now())];

        // Act
        let pages = Pages::new(todos, PageOptions::new(3, 10));

        // Assert
        assert_eq!(pages.page, 3);
        assert_eq!(pages.size, 10);
        assert_eq!(pages.total, 1);
        assert_eq!(pages.todos.len(), 1);
    }
}
