//! Nodegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the nodegen
//! project scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           nodegen-cli (CLI)             │
//! │     (Collects answers and options)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         ScaffoldService                 │
//! │  read state → resolve origin → merge    │
//! │  manifest → select plan → emit intents  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (StateReader, OriginResolver, Sink, Fs) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     nodegen-adapters (Infrastructure)   │
//! │ (FsStateReader, GitOriginResolver, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (FieldMerger, FeatureSelector, README) │
//! │            No I/O, no async             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nodegen_core::prelude::*;
//!
//! let service = ScaffoldService::new("./my-lib", state_reader, origin, sink);
//! let report = service.run(answers, options).await?;
//! for warning in &report.diagnostics {
//!     eprintln!("warning: {warning}");
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Diagnostic, Intent, ReadmeIntent, RunReport, ScaffoldService,
        ports::{ExistingStateReader, Filesystem, IntentSink, OriginResolver},
    };
    pub use crate::domain::{
        Answers, ExistingManifest, ExistingState, Feature, FeatureFlags, FeatureSelector,
        MergeWarning, Options, ResolvedManifest, ResolvedOptions, SubGenerator,
        SubGeneratorRequest, WritePlan,
    };
    pub use crate::error::{NodegenError, NodegenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
