pub mod book;
pub mod book_face;
pub mod manager;
pub mod predicate;
pub mod user_prefs;
