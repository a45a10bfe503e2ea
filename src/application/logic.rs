use tracing::{info, warn};

use super::command::{Command, CommandResult};
use super::error::AppError;
use crate::domain::model::book::Book;
use crate::domain::model::book_face::BookFace;
use crate::domain::model::manager::{Model, ModelManager};
use crate::domain::model::user_prefs::UserPrefs;
use crate::domain::repository::{Storage, UserPrefsStorage};

/// 設定を読み込む。無い・読めない場合は既定値。
pub fn load_user_prefs<P: UserPrefsStorage>(storage: &P) -> UserPrefs {
    match storage.read_user_prefs() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            info!(
                path = %storage.user_prefs_file_path().display(),
                "user prefs file not found, using defaults"
            );
            UserPrefs::default()
        }
        Err(e) => {
            warn!(error = %e, "user prefs unreadable, using defaults");
            UserPrefs::default()
        }
    }
}

/// コマンドを実行し、その都度カタログを保存する。
/// execute → save のパターンで操作する。
pub struct LogicManager<S: Storage, M: Model = ModelManager> {
    model: M,
    storage: S,
}

impl<S: Storage> LogicManager<S, ModelManager> {
    /// 起動時ロード。カタログが無ければ空、壊れていれば空で始める。
    pub fn open(storage: S, user_prefs: UserPrefs) -> Self {
        let book_face = match storage.read_book_face() {
            Ok(Some(book_face)) => book_face,
            Ok(None) => {
                info!(
                    path = %storage.book_face_file_path().display(),
                    "data file not found, starting with an empty catalog"
                );
                BookFace::new()
            }
            Err(e) => {
                warn!(error = %e, "data file unreadable, starting with an empty catalog");
                BookFace::new()
            }
        };
        Self::new(ModelManager::new(book_face, user_prefs), storage)
    }
}

impl<S: Storage, M: Model> LogicManager<S, M> {
    pub fn new(model: M, storage: S) -> Self {
        Self { model, storage }
    }

    /// カタログが変化した場合のみ保存する。
    /// 一覧・検索だけでは、読み込みに失敗した元ファイルを上書きしない。
    pub fn execute(&mut self, command: &dyn Command) -> Result<CommandResult, AppError> {
        let before = self.model.book_face().clone();
        let result = command.execute(&mut self.model)?;
        info!(?command, feedback = %result, "command executed");

        if *self.model.book_face() != before {
            self.storage
                .save_book_face(self.model.book_face())
                .map_err(AppError::Save)?;
        }
        Ok(result)
    }

    pub fn filtered_book_list(&self) -> Vec<Book> {
        self.model.filtered_book_list()
    }

    /// 終了時の設定保存。
    pub fn save_user_prefs(&self) -> Result<(), AppError> {
        self.storage
            .save_user_prefs(self.model.user_prefs())
            .map_err(AppError::Save)
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
