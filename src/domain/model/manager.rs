use super::book::Book;
use super::book_face::BookFace;
use super::predicate::BookPredicate;
use super::user_prefs::UserPrefs;
use crate::domain::error::DomainError;

/// コマンドが操作するインメモリのモデル。唯一の真実の源。
/// 表示リストは現在の絞り込み条件を適用した結果。
pub trait Model {
    fn user_prefs(&self) -> &UserPrefs;

    fn book_face(&self) -> &BookFace;

    fn has_book(&self, book: &Book) -> bool;
    fn add_book(&mut self, book: Book) -> Result<(), DomainError>;
    fn delete_book(&mut self, target: &Book) -> Result<(), DomainError>;
    fn set_book(&mut self, target: &Book, edited: Book) -> Result<(), DomainError>;

    /// 絞り込み済みリストのスナップショット
    fn filtered_book_list(&self) -> Vec<Book>;
    fn update_filtered_book_list(&mut self, predicate: BookPredicate);
}

#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    book_face: BookFace,
    user_prefs: UserPrefs,
    predicate: BookPredicate,
}

impl ModelManager {
    pub fn new(book_face: BookFace, user_prefs: UserPrefs) -> Self {
        Self {
            book_face,
            user_prefs,
            predicate: BookPredicate::ShowAll,
        }
    }
}

impl Model for ModelManager {
    fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    fn book_face(&self) -> &BookFace {
        &self.book_face
    }

    fn has_book(&self, book: &Book) -> bool {
        self.book_face.contains(book)
    }

    fn add_book(&mut self, book: Book) -> Result<(), DomainError> {
        self.book_face.add_book(book)?;
        self.update_filtered_book_list(BookPredicate::ShowAll);
        Ok(())
    }

    fn delete_book(&mut self, target: &Book) -> Result<(), DomainError> {
        self.book_face.remove_book(target)
    }

    fn set_book(&mut self, target: &Book, edited: Book) -> Result<(), DomainError> {
        self.book_face.set_book(target, edited)
    }

    fn filtered_book_list(&self) -> Vec<Book> {
        self.book_face
            .books()
            .iter()
            .filter(|b| self.predicate.test(b))
            .cloned()
            .collect()
    }

    fn update_filtered_book_list(&mut self, predicate: BookPredicate) {
        self.predicate = predicate;
    }
}
