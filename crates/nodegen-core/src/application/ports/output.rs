//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use async_trait::async_trait;

use crate::application::{Intent, OriginUnavailable};
use crate::domain::ExistingState;
use crate::error::NodegenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `nodegen_adapters::filesystem::LocalFilesystem` (production)
/// - `nodegen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a UTF-8 file; `Ok(None)` when it does not exist.
    fn read_to_string(&self, path: &Path) -> NodegenResult<Option<String>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NodegenResult<()>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> NodegenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Inspects the target for a manifest and README.
///
/// Missing files are a normal result. Only a file that exists but cannot be
/// read or parsed is an error.
#[cfg_attr(test, mockall::automock)]
pub trait ExistingStateReader: Send + Sync {
    fn read_state(&self, target: &Path) -> NodegenResult<ExistingState>;
}

/// Supplies the repository URL for the target, or says why it cannot.
///
/// A single attempt; callers treat failure as "no origin".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OriginResolver: Send + Sync {
    async fn resolve_origin(&self, target: &Path) -> Result<String, OriginUnavailable>;
}

/// Consumes emitted intents.
#[cfg_attr(test, mockall::automock)]
pub trait IntentSink: Send + Sync {
    fn apply(&self, intent: &Intent) -> NodegenResult<()>;
}
