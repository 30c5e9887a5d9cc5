//! Origin URL lookup.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use nodegen_core::application::{OriginUnavailable, ports::OriginResolver};

/// Asks `git` for `remote.origin.url`.
///
/// The target may not exist yet, so the lookup runs in its nearest existing
/// ancestor. One attempt, no retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitOriginResolver;

impl GitOriginResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OriginResolver for GitOriginResolver {
    async fn resolve_origin(&self, target: &Path) -> Result<String, OriginUnavailable> {
        let dir = nearest_existing(target)
            .ok_or_else(|| OriginUnavailable::new("no existing directory to query"))?;
        debug!(dir = %dir.display(), "Querying git remote");

        let output = Command::new("git")
            .args(["config", "--get", "remote.origin.url"])
            .current_dir(&dir)
            .output()
            .await
            .map_err(|e| OriginUnavailable::new(format!("could not run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => "no git remote".to_string(),
                msg => msg.to_string(),
            };
            return Err(OriginUnavailable::new(reason));
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if url.is_empty() {
            return Err(OriginUnavailable::new("git remote has no url"));
        }
        Ok(url)
    }
}

fn nearest_existing(path: &Path) -> Option<PathBuf> {
    // a relative path bottoms out at "", which is the working directory
    path.ancestors()
        .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
        .find(|p| p.is_dir())
        .map(Path::to_path_buf)
}

/// Fixed answer; `None` behaves like a directory without a remote.
#[derive(Debug, Clone, Default)]
pub struct StaticOriginResolver {
    url: Option<String>,
}

impl StaticOriginResolver {
    pub fn new(url: Option<String>) -> Self {
        Self { url }
    }

    pub fn unavailable() -> Self {
        Self { url: None }
    }
}

#[async_trait]
impl OriginResolver for StaticOriginResolver {
    async fn resolve_origin(&self, _target: &Path) -> Result<String, OriginUnavailable> {
        self.url
            .clone()
            .ok_or_else(|| OriginUnavailable::new("no origin configured"))
    }
}
