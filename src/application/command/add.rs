use super::{Command, CommandResult};
use crate::application::error::CommandError;
use crate::domain::model::book::Book;
use crate::domain::model::manager::Model;

/// 書籍をカタログに追加する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBookCommand {
    book: Book,
}

impl AddBookCommand {
    pub fn new(book: Book) -> Self {
        Self { book }
    }
}

impl Command for AddBookCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_book(&self.book) {
            return Err(CommandError::DuplicateBook);
        }
        model.add_book(self.book.clone())?;
        Ok(CommandResult::new(format!("New book added: {}", self.book)))
    }
}
