use crate::domain::error::{DomainError, StorageError};

/// コマンド実行時の失敗。メッセージはそのまま利用者に返す。
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("The book index provided is invalid")]
    InvalidBookIndex,

    #[error("This book already exists.")]
    DuplicateBook,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("could not save data to file: {0}")]
    Save(#[source] StorageError),
}
