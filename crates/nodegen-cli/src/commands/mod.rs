//! Command handlers. Each turns parsed arguments into calls on the core.

pub mod completions;
pub mod generate;
