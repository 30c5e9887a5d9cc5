//! Application ports (traits) for external dependencies.
//!
//! Adapters in `nodegen-adapters` implement these.
//!
//! - `Filesystem`: file operations used by state readers and appliers
//! - `ExistingStateReader`: what the target already holds
//! - `OriginResolver`: async repository URL lookup
//! - `IntentSink`: receives every emitted intent, in order

pub mod output;

pub use output::{ExistingStateReader, Filesystem, IntentSink, OriginResolver};

#[cfg(test)]
pub use output::{MockExistingStateReader, MockIntentSink, MockOriginResolver};
