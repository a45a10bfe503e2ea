use std::path::Path;

use super::error::StorageError;
use super::model::book_face::BookFace;
use super::model::user_prefs::UserPrefs;

/// カタログ永続化の抽象。Infra層が実装する。
/// 読み込みはファイルが無ければ `Ok(None)`。
pub trait BookFaceStorage {
    fn book_face_file_path(&self) -> &Path;

    fn read_book_face_from(&self, path: &Path) -> Result<Option<BookFace>, StorageError>;
    fn save_book_face_to(&self, book_face: &BookFace, path: &Path) -> Result<(), StorageError>;

    fn read_book_face(&self) -> Result<Option<BookFace>, StorageError> {
        self.read_book_face_from(self.book_face_file_path())
    }

    fn save_book_face(&self, book_face: &BookFace) -> Result<(), StorageError> {
        self.save_book_face_to(book_face, self.book_face_file_path())
    }
}

/// ユーザー設定永続化の抽象。
pub trait UserPrefsStorage {
    fn user_prefs_file_path(&self) -> &Path;

    fn read_user_prefs(&self) -> Result<Option<UserPrefs>, StorageError>;
    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> Result<(), StorageError>;
}

/// カタログと設定の両方を扱えるストレージ。
pub trait Storage: BookFaceStorage + UserPrefsStorage {}

impl<T: BookFaceStorage + UserPrefsStorage> Storage for T {}
