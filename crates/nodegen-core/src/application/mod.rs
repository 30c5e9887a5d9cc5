//! Application layer for nodegen.
//!
//! This layer contains:
//! - **Services**: the [`ScaffoldService`] run orchestrator
//! - **Ports**: traits for state reading, origin lookup, intent sinks and files
//! - **Intents**: the write/invoke requests a run emits
//! - **Errors**: application-specific error types
//!
//! Business rules live in `crate::domain`; this layer sequences them.

pub mod error;
pub mod intent;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, OriginUnavailable};
pub use intent::{Intent, ReadmeIntent};
pub use ports::{ExistingStateReader, Filesystem, IntentSink, OriginResolver};
pub use services::{COVERALLS_VAR, Diagnostic, RunPhase, RunReport, ScaffoldService};
