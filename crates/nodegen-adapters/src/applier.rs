//! Carries out emitted intents against a [`Filesystem`].

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use nodegen_core::{
    application::{
        ApplicationError, Intent, ReadmeIntent,
        ports::{Filesystem, IntentSink},
    },
    domain::{Feature, RenderContext, SubGeneratorRequest},
    error::NodegenResult,
};

use crate::{
    subgenerators::{self, GeneratorContext, to_pretty_json},
    templates,
};

/// [`IntentSink`] that writes files and runs sub-generators.
pub struct IntentApplier {
    fs: Arc<dyn Filesystem>,
}

impl IntentApplier {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }

    fn write(&self, path: &Path, content: &str) -> NodegenResult<()> {
        if let Some(parent) = path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(path, content)
    }

    fn copy_group(
        &self,
        group: Feature,
        target: &Path,
        context: &RenderContext,
    ) -> NodegenResult<()> {
        for (relative, content) in templates::render_group(group, context) {
            let path = target.join(relative);
            if self.fs.exists(&path) {
                debug!(path = %path.display(), "Keeping existing file");
                continue;
            }
            self.write(&path, &content)?;
        }
        Ok(())
    }

    fn invoke(&self, target: &Path, request: &SubGeneratorRequest) -> NodegenResult<()> {
        let name = request.generator.as_str();
        let entrypoint =
            subgenerators::lookup(name).ok_or_else(|| ApplicationError::UnknownSubGenerator {
                name: name.to_string(),
            })?;

        info!(generator = name, "Running sub-generator");
        entrypoint(&GeneratorContext {
            fs: self.fs.as_ref(),
            target,
            request,
        })
    }
}

impl IntentSink for IntentApplier {
    #[instrument(skip_all, fields(intent = %intent))]
    fn apply(&self, intent: &Intent) -> NodegenResult<()> {
        match intent {
            Intent::WriteManifest { path, manifest } => {
                self.write(path, &to_pretty_json(&manifest.to_value(), path)?)
            }
            Intent::Readme(ReadmeIntent::Create { path, content }) => self.write(path, content),
            Intent::Readme(ReadmeIntent::Keep { path }) => {
                debug!(path = %path.display(), "Keeping existing README");
                Ok(())
            }
            Intent::CopyGroup {
                group,
                target,
                context,
            } => self.copy_group(*group, target, context),
            Intent::InvokeSubGenerator { target, request } => self.invoke(target, request),
        }
    }
}
