//! Sub-generators and the static table that names them.
//!
//! An invocation request is resolved to an entrypoint by name through
//! [`lookup`]; there is no other way to reach a sub-generator.

mod boilerplate;
mod cli;
mod eslint;
mod jsc;
mod license;

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use nodegen_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{MANIFEST_FILE, SubGeneratorRequest, plan::keys},
    error::NodegenResult,
};

use crate::json_extend;

/// A sub-generator body.
pub type Entrypoint = fn(&GeneratorContext<'_>) -> NodegenResult<()>;

static REGISTRY: &[(&str, Entrypoint)] = &[
    ("license", license::run),
    ("eslint", eslint::run),
    ("jsc", jsc::run),
    ("cli", cli::run),
    ("boilerplate", boilerplate::run),
];

/// Entrypoint registered under `name`.
pub fn lookup(name: &str) -> Option<Entrypoint> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, entrypoint)| *entrypoint)
}

/// Registered names, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

/// What a sub-generator may touch: files below `target`, and its request.
pub struct GeneratorContext<'a> {
    pub fs: &'a dyn Filesystem,
    pub target: &'a Path,
    pub request: &'a SubGeneratorRequest,
}

impl GeneratorContext<'_> {
    pub fn project_name(&self) -> &str {
        self.request.option(keys::NAME).unwrap_or("")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.target.join(relative)
    }

    /// Write (or overwrite) a file below the target.
    pub fn write(&self, relative: &str, content: &str) -> NodegenResult<()> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        debug!(path = %path.display(), "Writing file");
        self.fs.write_file(&path, content)
    }

    /// Write a file only if nothing is there yet. Returns whether it wrote.
    pub fn write_if_absent(&self, relative: &str, content: &str) -> NodegenResult<bool> {
        if self.fs.exists(&self.path(relative)) {
            debug!(file = relative, "Keeping existing file");
            return Ok(false);
        }
        self.write(relative, content)?;
        Ok(true)
    }

    /// Read the manifest, let `edit` change it, write it back.
    pub fn update_manifest(
        &self,
        edit: impl FnOnce(&mut Map<String, Value>),
    ) -> NodegenResult<()> {
        let path = self.path(MANIFEST_FILE);
        let mut manifest = match self.fs.read_to_string(&path)? {
            Some(text) => parse_object(&path, &text)?,
            None => Map::new(),
        };
        edit(&mut manifest);
        self.write(MANIFEST_FILE, &to_pretty_json(&Value::Object(manifest), &path)?)
    }

    /// Deep-merge `patch` into the manifest.
    pub fn extend_manifest(&self, patch: &Value) -> NodegenResult<()> {
        self.update_manifest(|manifest| {
            let mut document = Value::Object(std::mem::take(manifest));
            json_extend::extend(&mut document, patch);
            if let Value::Object(merged) = document {
                *manifest = merged;
            }
        })
    }
}

fn parse_object(path: &Path, text: &str) -> NodegenResult<Map<String, Value>> {
    let malformed = |reason: String| ApplicationError::MalformedState {
        path: path.to_path_buf(),
        reason,
    };
    match serde_json::from_str(text).map_err(|e| malformed(e.to_string()))? {
        Value::Object(object) => Ok(object),
        _ => Err(malformed("top-level value must be a JSON object".into()).into()),
    }
}

/// Two-space indented JSON with a trailing newline.
pub fn to_pretty_json(value: &Value, path: &Path) -> NodegenResult<String> {
    let mut text = serde_json::to_string_pretty(value).map_err(|e| {
        ApplicationError::RenderingFailed {
            reason: format!("{}: {e}", path.display()),
        }
    })?;
    text.push('\n');
    Ok(text)
}
