use tracing::debug;

use super::{Command, CommandResult, Index};
use crate::application::error::CommandError;
use crate::domain::model::book::{Author, Book, Title};
use crate::domain::model::manager::Model;
use crate::domain::model::predicate::BookPredicate;

/// 編集内容（Noneのフィールドは変更しない）。
/// コマンドには値として渡るので、呼び出し側の後続の変更は影響しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBookDescriptor {
    title: Option<Title>,
    author: Option<Author>,
}

impl EditBookDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// 少なくとも1フィールドが指定されているか。
    pub fn is_any_field_edited(&self) -> bool {
        self.title.is_some() || self.author.is_some()
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn set_title(&mut self, title: Title) {
        self.title = Some(title);
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    pub fn set_author(&mut self, author: Author) {
        self.author = Some(author);
    }
}

/// 表示リスト上の番号で指定した書籍を編集する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBookCommand {
    index: Index,
    descriptor: EditBookDescriptor,
}

impl EditBookCommand {
    pub fn new(index: Index, descriptor: EditBookDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditBookDescriptor {
        &self.descriptor
    }

    fn create_edited_book(book_to_edit: &Book, descriptor: &EditBookDescriptor) -> Book {
        let title = descriptor
            .title()
            .cloned()
            .unwrap_or_else(|| book_to_edit.title().clone());
        let author = descriptor
            .author()
            .cloned()
            .unwrap_or_else(|| book_to_edit.author().clone());
        Book::new(title, author)
    }
}

impl Command for EditBookCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let last_shown = model.filtered_book_list();
        let book_to_edit = last_shown
            .get(self.index.zero_based())
            .ok_or(CommandError::InvalidBookIndex)?;

        let edited = Self::create_edited_book(book_to_edit, &self.descriptor);

        // 重複判定は絞り込み前の全件が対象
        if *book_to_edit != edited && model.has_book(&edited) {
            return Err(CommandError::DuplicateBook);
        }

        debug!(from = %book_to_edit, to = %edited, "editing book");
        model.set_book(book_to_edit, edited.clone())?;
        model.update_filtered_book_list(BookPredicate::ShowAll);

        Ok(CommandResult::new(format!("Edited Book: {edited}")))
    }
}
