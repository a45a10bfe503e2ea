use super::{Command, CommandResult};
use crate::application::error::CommandError;
use crate::domain::model::manager::Model;
use crate::domain::model::predicate::BookPredicate;

/// 書名のキーワードで表示リストを絞り込む。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindBookCommand {
    predicate: BookPredicate,
}

impl FindBookCommand {
    /// 空白を含むキーワードは単語ごとに分けて扱う。
    pub fn new(keywords: Vec<String>) -> Self {
        let words = keywords
            .iter()
            .flat_map(|kw| kw.split_whitespace())
            .map(str::to_string)
            .collect();
        Self {
            predicate: BookPredicate::TitleContainsKeywords(words),
        }
    }
}

impl Command for FindBookCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_book_list(self.predicate.clone());
        let count = model.filtered_book_list().len();
        Ok(CommandResult::new(format!("{count} books listed!")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::book::{Author, Book, Title};
    use crate::domain::model::book_face::BookFace;
    use crate::domain::model::manager::ModelManager;
    use crate::domain::model::user_prefs::UserPrefs;

    fn book(title: &str, author: &str) -> Book {
        Book::new(Title::new(title).unwrap(), Author::new(author).unwrap())
    }

    #[test]
    fn find_narrows_list() {
        let bf = BookFace::with_books([
            book("Dune", "Herbert"),
            book("Foundation", "Asimov"),
            book("Dune Messiah", "Herbert"),
        ])
        .unwrap();
        let mut model = ModelManager::new(bf, UserPrefs::default());

        let result = FindBookCommand::new(vec!["dune".into()])
            .execute(&mut model)
            .unwrap();

        assert_eq!(result.feedback(), "2 books listed!");
        assert_eq!(model.filtered_book_list().len(), 2);
        assert_eq!(model.book_face().len(), 3);
    }

    #[test]
    fn multi_word_keyword_is_split() {
        let bf = BookFace::with_books([
            book("Dune", "Herbert"),
            book("Foundation", "Asimov"),
            book("Dune Messiah", "Herbert"),
            book("Emma", "Austen"),
        ])
        .unwrap();
        let mut model = ModelManager::new(bf, UserPrefs::default());

        let result = FindBookCommand::new(vec!["Dune Messiah".into()])
            .execute(&mut model)
            .unwrap();

        assert_eq!(result.feedback(), "2 books listed!");
        assert_eq!(
            model.filtered_book_list(),
            vec![book("Dune", "Herbert"), book("Dune Messiah", "Herbert")]
        );
    }
}
