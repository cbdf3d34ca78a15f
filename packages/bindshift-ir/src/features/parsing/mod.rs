//! Parsing Feature
//!
//! Turns source text into the narrow syntax model the rewrite works on.
//!
//! ## Structure
//! - `domain/` - ParsedModule and the closed set of syntax variants
//! - `ports/` - Parser trait
//! - `infrastructure/` - TreeSitterParser and lowering

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::ParsedModule;
pub use infrastructure::TreeSitterParser;
pub use ports::Parser;
