pub mod command;
pub mod error;
pub mod logic;
pub mod storage;
