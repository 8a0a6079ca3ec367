use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_MANIFEST: &str = "pyproject.toml";

#[derive(Parser, Debug, Clone)]
#[command(name = "pyproject-stamp")]
#[command(about = "Stamp a release version into pyproject.toml, build the package, then restore it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Config {
    /// The version to build
    #[arg(long, value_name = "TAG", help = "The version to build (e.g. v1.2.3 or v1.2.3-rc.1)")]
    pub tag: String,

    /// Compute the patched manifest without writing it or building
    #[arg(long, help = "Print the patched manifest instead of writing it and building")]
    pub dry_run: bool,

    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST, help = "Manifest containing the version placeholder")]
    pub manifest: PathBuf,
}

impl Config {
    pub fn parse_args() -> Self {
        Config::parse()
    }
}
