pub mod catalog;
pub mod coverage;
pub mod suggest;

pub use catalog::TagCatalog;
pub use coverage::CoverageReporter;
pub use suggest::TagSuggester;
