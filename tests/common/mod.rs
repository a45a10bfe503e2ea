//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bookface::application::logic::LogicManager;
use bookface::domain::error::StorageError;
use bookface::domain::model::book::{Author, Book, Title};
use bookface::domain::model::book_face::BookFace;
use bookface::domain::model::manager::ModelManager;
use bookface::domain::model::user_prefs::UserPrefs;
use bookface::domain::repository::{BookFaceStorage, UserPrefsStorage};

// =============================================================================
// InMemoryStorage: テスト用ストレージ
// =============================================================================

/// ファイルI/O不要のインメモリストレージ。パスごとにJSON文字列を保持する。
pub struct InMemoryStorage {
    book_face_path: PathBuf,
    user_prefs_path: PathBuf,
    files: RefCell<HashMap<PathBuf, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            book_face_path: PathBuf::from("mem/bookface.json"),
            user_prefs_path: PathBuf::from("mem/preferences.json"),
            files: RefCell::new(HashMap::new()),
        }
    }

    /// 生のファイル内容を直接置く。壊れたデータの再現用。
    pub fn put_raw(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .borrow_mut()
            .insert(path.into(), content.to_string());
    }

    pub fn raw(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    fn read<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, StorageError> {
        match self.files.borrow().get(path) {
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|source| StorageError::DataConversion {
                    path: path.to_path_buf(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn write<T: serde::Serialize>(&self, value: &T, path: &Path) {
        let json = serde_json::to_string(value).unwrap();
        self.files.borrow_mut().insert(path.to_path_buf(), json);
    }
}

impl BookFaceStorage for InMemoryStorage {
    fn book_face_file_path(&self) -> &Path {
        &self.book_face_path
    }

    fn read_book_face_from(&self, path: &Path) -> Result<Option<BookFace>, StorageError> {
        self.read(path)
    }

    fn save_book_face_to(&self, book_face: &BookFace, path: &Path) -> Result<(), StorageError> {
        self.write(book_face, path);
        Ok(())
    }
}

impl UserPrefsStorage for InMemoryStorage {
    fn user_prefs_file_path(&self) -> &Path {
        &self.user_prefs_path
    }

    fn read_user_prefs(&self) -> Result<Option<UserPrefs>, StorageError> {
        self.read(&self.user_prefs_path)
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> Result<(), StorageError> {
        self.write(user_prefs, &self.user_prefs_path);
        Ok(())
    }
}

// =============================================================================
// TestCatalog: テスト用カタログ作成ヘルパー
// =============================================================================

pub fn book(title: &str, author: &str) -> Book {
    Book::new(Title::new(title).unwrap(), Author::new(author).unwrap())
}

pub struct TestCatalog;

impl TestCatalog {
    /// 標準的なテスト用カタログ:
    /// ```text
    /// 1. Dune; Author: Herbert
    /// 2. Foundation; Author: Asimov
    /// ```
    pub fn standard() -> BookFace {
        BookFace::with_books([book("Dune", "Herbert"), book("Foundation", "Asimov")]).unwrap()
    }

    /// 少し大きめのカタログ。検索の絞り込み用。
    pub fn shelf() -> BookFace {
        BookFace::with_books([
            book("Dune", "Herbert"),
            book("Foundation", "Asimov"),
            book("Dune Messiah", "Herbert"),
            book("Foundation and Empire", "Asimov"),
            book("Emma", "Austen"),
        ])
        .unwrap()
    }

    pub fn model(book_face: BookFace) -> ModelManager {
        ModelManager::new(book_face, UserPrefs::default())
    }

    /// InMemoryStorageにカタログを保存してLogicManagerを開く。
    pub fn logic_with(book_face: &BookFace) -> LogicManager<InMemoryStorage> {
        let storage = InMemoryStorage::new();
        storage.save_book_face(book_face).unwrap();
        LogicManager::open(storage, UserPrefs::default())
    }
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
