use super::{Command, CommandResult};
use crate::application::error::CommandError;
use crate::domain::model::manager::Model;
use crate::domain::model::predicate::BookPredicate;

/// 絞り込みを解除して全件を表示する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListBookCommand;

impl Command for ListBookCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_book_list(BookPredicate::ShowAll);
        Ok(CommandResult::new("Listed all books"))
    }
}
