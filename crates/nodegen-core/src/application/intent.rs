use std::fmt;
use std::path::PathBuf;

use crate::domain::{Feature, RenderContext, ResolvedManifest, SubGeneratorRequest};

/// A decision emitted by a run, carried out by an [`super::IntentSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    WriteManifest {
        path: PathBuf,
        manifest: ResolvedManifest,
    },
    Readme(ReadmeIntent),
    /// Copy the built-in templates of one group into `target`.
    CopyGroup {
        group: Feature,
        target: PathBuf,
        context: RenderContext,
    },
    InvokeSubGenerator {
        target: PathBuf,
        request: SubGeneratorRequest,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeIntent {
    Create { path: PathBuf, content: String },
    /// An existing README is left exactly as found.
    Keep { path: PathBuf },
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteManifest { path, .. } => write!(f, "write manifest {}", path.display()),
            Self::Readme(ReadmeIntent::Create { path, .. }) => {
                write!(f, "create {}", path.display())
            }
            Self::Readme(ReadmeIntent::Keep { path }) => write!(f, "keep {}", path.display()),
            Self::CopyGroup { group, target, .. } => {
                write!(f, "copy {group} templates into {}", target.display())
            }
            Self::InvokeSubGenerator { request, .. } => {
                write!(f, "invoke {} sub-generator", request.generator)
            }
        }
    }
}
