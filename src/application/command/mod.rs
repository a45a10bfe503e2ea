//! Commands executed against the in-memory model.
//!
//! A command is built from already-validated, typed inputs and run exactly once
//! through [`Command::execute`]. Persistence happens outside, in `LogicManager`.

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;

use std::fmt;

use crate::domain::model::manager::Model;

use super::error::CommandError;

pub use add::AddBookCommand;
pub use delete::DeleteBookCommand;
pub use edit::{EditBookCommand, EditBookDescriptor};
pub use find::FindBookCommand;
pub use list::ListBookCommand;

/// 表示リスト上の位置。内部は0始まりで持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    /// 1始まりの番号から作る。0はNone。
    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Self)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

/// コマンド実行結果。利用者向けのフィードバック文を持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback)
    }
}

pub trait Command: fmt::Debug {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}
