//! Formatting interpreted numerals for display

pub mod formatter;
mod renderer;
mod syntax;

// Re-export all public symbols
pub use renderer::*;
pub use syntax::*;
