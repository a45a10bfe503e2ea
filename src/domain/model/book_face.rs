use serde::{Deserialize, Serialize};

use super::book::Book;
use crate::domain::error::DomainError;

/// 蔵書カタログ（集約ルート）。書籍は値として一意で、登録順を保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SerializedBookFace")]
pub struct BookFace {
    books: Vec<Book>,
}

/// 読み込み時の中間表現。重複検証を通してから BookFace になる。
#[derive(Deserialize)]
struct SerializedBookFace {
    #[serde(default)]
    books: Vec<Book>,
}

impl TryFrom<SerializedBookFace> for BookFace {
    type Error = DomainError;

    fn try_from(raw: SerializedBookFace) -> Result<Self, Self::Error> {
        Self::with_books(raw.books)
    }
}

impl BookFace {
    pub fn new() -> Self {
        Self::default()
    }

    /// 複数の書籍からカタログを組み立てる。重複があればエラー。
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Result<Self, DomainError> {
        let mut book_face = Self::new();
        for book in books {
            book_face.add_book(book)?;
        }
        Ok(book_face)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    pub fn add_book(&mut self, book: Book) -> Result<(), DomainError> {
        if self.contains(&book) {
            return Err(DomainError::DuplicateBook(book));
        }
        self.books.push(book);
        Ok(())
    }

    /// target を edited で置き換える。位置は変わらない。
    pub fn set_book(&mut self, target: &Book, edited: Book) -> Result<(), DomainError> {
        let pos = self
            .position_of(target)
            .ok_or_else(|| DomainError::BookNotFound(target.clone()))?;

        if *target != edited && self.contains(&edited) {
            return Err(DomainError::DuplicateBook(edited));
        }

        self.books[pos] = edited;
        Ok(())
    }

    pub fn remove_book(&mut self, target: &Book) -> Result<(), DomainError> {
        let pos = self
            .position_of(target)
            .ok_or_else(|| DomainError::BookNotFound(target.clone()))?;
        self.books.remove(pos);
        Ok(())
    }

    fn position_of(&self, book: &Book) -> Option<usize> {
        self.books.iter().position(|b| b == book)
    }
}
