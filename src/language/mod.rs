// Types representing Roman numerals and their interpretation

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
