//! Infrastructure adapters for nodegen.
//!
//! This crate implements the ports defined in `nodegen_core::application::ports`.
//! It contains all I/O: file access, the `git` lookup, built-in templates and
//! the sub-generators that carry out emitted intents.

pub mod applier;
pub mod filesystem;
pub mod json_extend;
pub mod origin;
pub mod state_reader;
pub mod subgenerators;
pub mod templates;

// Re-export commonly used adapters
pub use applier::IntentApplier;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use origin::{GitOriginResolver, StaticOriginResolver};
pub use state_reader::FsStateReader;
