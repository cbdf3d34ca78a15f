//! Feature modules
//!
//! Vertical slices: parsing → decorator_rewrite

pub mod decorator_rewrite;
pub mod parsing;
