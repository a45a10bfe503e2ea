use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::error::StorageError;
use crate::domain::model::book_face::BookFace;
use crate::domain::model::user_prefs::UserPrefs;
use crate::domain::repository::{BookFaceStorage, UserPrefsStorage};

/// JSONファイルによるカタログ保存。既定パス以外への読み書きも受け付ける。
pub struct JsonBookFaceStorage {
    path: PathBuf,
}

impl JsonBookFaceStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BookFaceStorage for JsonBookFaceStorage {
    fn book_face_file_path(&self) -> &Path {
        &self.path
    }

    fn read_book_face_from(&self, path: &Path) -> Result<Option<BookFace>, StorageError> {
        read_json_file(path)
    }

    fn save_book_face_to(&self, book_face: &BookFace, path: &Path) -> Result<(), StorageError> {
        save_json_file(book_face, path)
    }
}

/// JSONファイルによるユーザー設定保存。
pub struct JsonUserPrefsStorage {
    path: PathBuf,
}

impl JsonUserPrefsStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserPrefsStorage for JsonUserPrefsStorage {
    fn user_prefs_file_path(&self) -> &Path {
        &self.path
    }

    fn read_user_prefs(&self) -> Result<Option<UserPrefs>, StorageError> {
        read_json_file(&self.path)
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> Result<(), StorageError> {
        save_json_file(user_prefs, &self.path)
    }
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let value = serde_json::from_str(&content).map_err(|source| StorageError::DataConversion {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(value))
}

/// 一時ファイルに書いてから rename する。
fn save_json_file<T: Serialize>(value: &T, path: &Path) -> Result<(), StorageError> {
    let io_err = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let content =
        serde_json::to_string_pretty(value).map_err(|source| StorageError::DataConversion {
            path: path.to_path_buf(),
            source,
        })?;
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, &content).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}
