// Mock tutorial corpus: title catalog, prose templates and the builder

pub mod builder;
pub mod catalog;
pub mod featured;
pub mod templates;

pub use builder::{CorpusBuilder, build_corpus, build_library};
pub use featured::featured_articles;
