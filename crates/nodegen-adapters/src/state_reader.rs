//! Reads `package.json` and `README.md` from the target directory.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use nodegen_core::{
    application::{ApplicationError, ports::{ExistingStateReader, Filesystem}},
    domain::{ExistingManifest, ExistingState, MANIFEST_FILE, README_FILE},
    error::NodegenResult,
};

/// [`ExistingStateReader`] over any [`Filesystem`].
pub struct FsStateReader {
    fs: Arc<dyn Filesystem>,
}

impl FsStateReader {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }

    fn read(&self, path: &Path) -> NodegenResult<Option<String>> {
        self.fs.read_to_string(path).map_err(|e| {
            ApplicationError::MalformedState {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl ExistingStateReader for FsStateReader {
    #[instrument(skip(self), fields(target = %target.display()))]
    fn read_state(&self, target: &Path) -> NodegenResult<ExistingState> {
        let manifest_path = target.join(MANIFEST_FILE);
        let manifest = match self.read(&manifest_path)? {
            Some(text) => Some(ExistingManifest::from_json(&text).map_err(|e| {
                ApplicationError::MalformedState {
                    path: manifest_path.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let readme = self.read(&target.join(README_FILE))?;

        debug!(
            manifest = manifest.is_some(),
            readme = readme.is_some(),
            "Existing state read"
        );
        Ok(ExistingState { manifest, readme })
    }
}
