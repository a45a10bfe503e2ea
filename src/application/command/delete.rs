use super::{Command, CommandResult, Index};
use crate::application::error::CommandError;
use crate::domain::model::manager::Model;

/// 表示リスト上の番号で指定した書籍を削除する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteBookCommand {
    index: Index,
}

impl DeleteBookCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteBookCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let last_shown = model.filtered_book_list();
        let target = last_shown
            .get(self.index.zero_based())
            .ok_or(CommandError::InvalidBookIndex)?;

        model.delete_book(target)?;
        Ok(CommandResult::new(format!("Deleted Book: {target}")))
    }
}
