// ============================================================================
//  DOMAIN LAYER
// ============================================================================

//! Pure decision logic: no I/O, no async.
//!
//! - [`answers`]: answers, options and the single defaulting pass
//! - [`manifest`]: existing and resolved manifest models
//! - [`merge`]: per-field merge policies
//! - [`plan`]: feature selection and sub-generator requests
//! - [`readme`], [`render`]: content for new files

pub mod answers;
pub mod error;
pub mod manifest;
pub mod merge;
pub mod origin;
pub mod plan;
pub mod readme;
pub mod render;
pub mod state;

mod validation;

pub use answers::{
    Answers, DEFAULT_LICENSE, Feature, FeatureFlags, NO_LICENSE, Options, ResolvedOptions,
};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{
    AuthorField, ExistingManifest, INITIAL_VERSION, MANIFEST_FILE, Person, Repository,
    RepositoryField, ResolvedManifest, Slot,
};
pub use merge::{FieldMerger, MergeOutcome, MergeWarning, merge_manifest};
pub use origin::repository_slug;
pub use plan::{FeatureSelector, GroupAction, SubGenerator, SubGeneratorRequest, WritePlan};
pub use readme::{README_FILE, render_readme};
pub use render::RenderContext;
pub use state::ExistingState;
pub use validation::DomainValidator;
