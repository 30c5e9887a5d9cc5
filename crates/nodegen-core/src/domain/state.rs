use crate::domain::manifest::ExistingManifest;

/// What the target directory already held before the run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExistingState {
    pub manifest: Option<ExistingManifest>,
    /// Kept verbatim; never rewritten.
    pub readme: Option<String>,
}

impl ExistingState {
    pub fn is_new_project(&self) -> bool {
        self.manifest.is_none()
    }
}
