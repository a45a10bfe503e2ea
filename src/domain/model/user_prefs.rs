use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_WIDTH: u32 = 740;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_BOOK_FACE_FILE: &str = "data/bookface.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

/// ウィンドウ寸法と位置。位置が None なら表示側に任せる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiSettings {
    pub window_width: u32,
    pub window_height: u32,
    pub window_position: Option<WindowPosition>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_position: None,
        }
    }
}

/// ユーザー設定。欠けたフィールドは既定値で補う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    gui_settings: GuiSettings,
    book_face_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            book_face_file_path: PathBuf::from(DEFAULT_BOOK_FACE_FILE),
        }
    }
}

impl UserPrefs {
    pub fn gui_settings(&self) -> &GuiSettings {
        &self.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }

    pub fn book_face_file_path(&self) -> &Path {
        &self.book_face_file_path
    }

    pub fn set_book_face_file_path(&mut self, path: impl Into<PathBuf>) {
        self.book_face_file_path = path.into();
    }
}
