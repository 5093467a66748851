pub mod deck;
pub mod report;

pub use deck::*;
pub use report::*;
