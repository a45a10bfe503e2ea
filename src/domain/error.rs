use std::path::PathBuf;

use super::model::book::Book;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{field} must not be blank")]
    InvalidField { field: &'static str },

    #[error("duplicate book: {0}")]
    DuplicateBook(Book),

    #[error("book not found: {0}")]
    BookNotFound(Book),
}

/// 永続化層の失敗。ファイル内容の形式不正とI/Oエラーを区別する。
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("data conversion failed for {}: {source}", .path.display())]
    DataConversion {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
