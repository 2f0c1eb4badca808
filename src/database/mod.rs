pub mod file;
pub mod store;

pub use store::VocabularyStore;
