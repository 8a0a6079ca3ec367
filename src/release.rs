use anyhow::{bail, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::builder::{BuildCommand, Builder};
use crate::{manifest, versioning};

/// Where the release happens: the manifest to stamp and the build to run.
#[derive(Debug, Clone)]
pub struct ReleaseContext {
    pub manifest: PathBuf,
    pub build: BuildCommand,
}

impl ReleaseContext {
    pub fn new(manifest: PathBuf) -> Self {
        let project_dir = match manifest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            build: BuildCommand::uv_build(project_dir),
            manifest,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was written or built.
    DryRun { patched: String },
    Built { version: String },
}

/// Stamp the version derived from `tag` into the manifest, build, and restore.
///
/// A failed build returns early and leaves the patched manifest on disk.
pub async fn run<B: Builder>(
    ctx: &ReleaseContext,
    tag: &str,
    dry_run: bool,
    builder: &B,
) -> Result<Outcome> {
    debug!(dry_run, tag, "args");
    let version = versioning::process_tag(tag)?;

    info!("Building version {}", version);
    let original = manifest::read(&ctx.manifest)?;
    let patched = manifest::patch(&original, &version);

    if dry_run {
        return Ok(Outcome::DryRun { patched });
    }

    manifest::write(&ctx.manifest, &patched)?;
    debug!("wrote patched manifest");

    info!("Building API package");
    let status = builder.run(&ctx.build).await?;
    if !status.success() {
        bail!("Command failed: {} ({})", ctx.build, status);
    }

    manifest::write(&ctx.manifest, &original)?;
    debug!("restored original manifest");

    Ok(Outcome::Built { version })
}
