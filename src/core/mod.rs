pub mod collision;
pub mod content;
pub mod processor;
pub mod seeder;

pub use crate::domain::model::{FileContent, Record, RecordSet};
pub use crate::domain::ports::{SeedConfigProvider, Storage, ValueSource};
pub use crate::utils::error::Result;
