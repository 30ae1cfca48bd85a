//! Signscape Common Library
//!
//! ビューアとタスクボードで共有される型とロジック

pub mod board;
pub mod error;
pub mod filter;
pub mod lang;
pub mod types;

pub use board::{BoardEvent, BoardStore, Feedback, Mutation, Task, TaskStatus};
pub use error::{Error, Result};
pub use filter::{preview_text, FilterOptions, FilterState};
pub use lang::language_name;
pub use types::{CorpusRecord, LocationInfo, Sign};
