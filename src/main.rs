mod builder;
mod config;
mod logging;
mod manifest;
mod release;
mod versioning;

use anyhow::Result;
use tracing::{debug, info};

use builder::ProcessBuilder;
use config::Config;
use release::{Outcome, ReleaseContext};

#[allow(dead_code)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::parse_args();
    debug!(
        version = built_info::PKG_VERSION,
        commit = built_info::GIT_COMMIT_HASH_SHORT.unwrap_or("unknown"),
        "pyproject-stamp"
    );

    let ctx = ReleaseContext::new(config.manifest);
    match release::run(&ctx, &config.tag, config.dry_run, &ProcessBuilder).await? {
        Outcome::DryRun { patched } => print!("{}", patched),
        Outcome::Built { version } => info!("Built version {}", version),
    }

    Ok(())
}
