use std::path::Path;

use tracing::debug;

use crate::domain::error::StorageError;
use crate::domain::model::book_face::BookFace;
use crate::domain::model::user_prefs::UserPrefs;
use crate::domain::repository::{BookFaceStorage, UserPrefsStorage};

/// カタログ用と設定用、2つのストレージをまとめるファサード。
/// 各操作を担当のバックエンドへ委譲するだけで、2ファイル間の整合は保証しない。
pub struct StorageManager<B: BookFaceStorage, P: UserPrefsStorage> {
    book_face_storage: B,
    user_prefs_storage: P,
}

impl<B: BookFaceStorage, P: UserPrefsStorage> StorageManager<B, P> {
    pub fn new(book_face_storage: B, user_prefs_storage: P) -> Self {
        Self {
            book_face_storage,
            user_prefs_storage,
        }
    }
}

impl<B: BookFaceStorage, P: UserPrefsStorage> UserPrefsStorage for StorageManager<B, P> {
    fn user_prefs_file_path(&self) -> &Path {
        self.user_prefs_storage.user_prefs_file_path()
    }

    fn read_user_prefs(&self) -> Result<Option<UserPrefs>, StorageError> {
        debug!(path = %self.user_prefs_file_path().display(), "reading user prefs");
        self.user_prefs_storage.read_user_prefs()
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> Result<(), StorageError> {
        debug!(path = %self.user_prefs_file_path().display(), "writing user prefs");
        self.user_prefs_storage.save_user_prefs(user_prefs)
    }
}

impl<B: BookFaceStorage, P: UserPrefsStorage> BookFaceStorage for StorageManager<B, P> {
    fn book_face_file_path(&self) -> &Path {
        self.book_face_storage.book_face_file_path()
    }

    fn read_book_face_from(&self, path: &Path) -> Result<Option<BookFace>, StorageError> {
        debug!(path = %path.display(), "attempting to read data from file");
        self.book_face_storage.read_book_face_from(path)
    }

    fn save_book_face_to(&self, book_face: &BookFace, path: &Path) -> Result<(), StorageError> {
        debug!(path = %path.display(), books = book_face.len(), "attempting to write to data file");
        self.book_face_storage.save_book_face_to(book_face, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::book::{Author, Book, Title};
    use crate::infra::json_store::{JsonBookFaceStorage, JsonUserPrefsStorage};

    fn make_manager(
        dir: &Path,
    ) -> StorageManager<JsonBookFaceStorage, JsonUserPrefsStorage> {
        StorageManager::new(
            JsonBookFaceStorage::new(dir.join("bookface.json")),
            JsonUserPrefsStorage::new(dir.join("prefs.json")),
        )
    }

    #[test]
    fn paths_come_from_backends() {
        let dir = tempfile::tempdir().unwrap();
        let manager = make_manager(dir.path());
        assert_eq!(manager.book_face_file_path(), dir.path().join("bookface.json"));
        assert_eq!(manager.user_prefs_file_path(), dir.path().join("prefs.json"));
    }

    #[test]
    fn prefs_read_save() {
        let dir = tempfile::tempdir().unwrap();
        let manager = make_manager(dir.path());

        assert!(manager.read_user_prefs().unwrap().is_none());

        let mut prefs = UserPrefs::default();
        prefs.set_book_face_file_path("custom.json");
        manager.save_user_prefs(&prefs).unwrap();
        assert_eq!(manager.read_user_prefs().unwrap(), Some(prefs));
    }

    #[test]
    fn book_face_read_save() {
        let dir = tempfile::tempdir().unwrap();
        let manager = make_manager(dir.path());

        let bf = BookFace::with_books([Book::new(
            Title::new("Dune").unwrap(),
            Author::new("Herbert").unwrap(),
        )])
        .unwrap();
        manager.save_book_face(&bf).unwrap();

        assert_eq!(manager.read_book_face().unwrap(), Some(bf));
        // 設定ファイルには触れない
        assert!(!dir.path().join("prefs.json").exists());
    }
}
