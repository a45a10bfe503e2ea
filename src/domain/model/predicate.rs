use super::book::Book;

/// 表示リストの絞り込み条件。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookPredicate {
    /// 全件表示
    #[default]
    ShowAll,
    /// 書名がいずれかのキーワードを単語として含む（大文字小文字は区別しない）
    TitleContainsKeywords(Vec<String>),
}

impl BookPredicate {
    pub fn test(&self, book: &Book) -> bool {
        match self {
            Self::ShowAll => true,
            Self::TitleContainsKeywords(keywords) => keywords
                .iter()
                .any(|kw| contains_word_ignore_case(book.title().as_str(), kw)),
        }
    }
}

fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return false;
    }
    sentence
        .split_whitespace()
        .any(|w| w.to_lowercase() == word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::book::{Author, Title};

    fn book(title: &str) -> Book {
        Book::new(Title::new(title).unwrap(), Author::new("Anyone").unwrap())
    }

    #[test]
    fn show_all_matches_everything() {
        assert!(BookPredicate::ShowAll.test(&book("Dune")));
    }

    #[test]
    fn keyword_matches_whole_word_ignoring_case() {
        let p = BookPredicate::TitleContainsKeywords(vec!["dune".into()]);
        assert!(p.test(&book("Children of Dune")));
        assert!(!p.test(&book("Dunes and Deserts")));
    }

    #[test]
    fn any_keyword_is_enough() {
        let p = BookPredicate::TitleContainsKeywords(vec!["Robot".into(), "Foundation".into()]);
        assert!(p.test(&book("Foundation")));
        assert!(p.test(&book("The Robot Novels")));
        assert!(!p.test(&book("Dune")));
    }

    #[test]
    fn blank_keyword_matches_nothing() {
        let p = BookPredicate::TitleContainsKeywords(vec!["  ".into()]);
        assert!(!p.test(&book("Dune")));
    }
}
