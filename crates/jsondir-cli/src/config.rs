//! # Configuration
//!
//! CLI configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables, and compiled defaults.
//!
//! Resolution order (highest priority first):
//! 1. **Command line**: `--root` overrides everything.
//! 2. **Environment variables**: `JSONDIR_ROOT`, `JSONDIR_LOG_LEVEL`, `JSONDIR_SYNC_WRITES`.
//! 3. **Config file**: `jsondir.toml` in the current directory, skipped when
//!    absent. A path given with `--config <path>` must exist.
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `root` | `./data` | Directory holding the collections |
//! | `log_level` | `info` | `tracing` filter directive for console logging |
//! | `sync_writes` | `false` | `fsync` records before publishing them |

use anyhow::{bail, Context, Result};
use confique::Config;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "jsondir.toml";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory holding the collections.
    #[config(env = "JSONDIR_ROOT", default = "./data")]
    pub root: PathBuf,

    /// Filter directive for console logging (e.g. "info", "jsondir=debug").
    #[config(env = "JSONDIR_LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Flush every record to disk before it is renamed into place.
    #[config(env = "JSONDIR_SYNC_WRITES", default = false)]
    pub sync_writes: bool,
}

impl CliConfig {
    /// Load from environment, then the config file, then defaults.
    ///
    /// With no `explicit` path the default `jsondir.toml` is used if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) if !path.exists() => {
                bail!("config file {} does not exist", path.display())
            }
            Some(path) => path,
            None => Path::new(DEFAULT_CONFIG_FILE),
        };

        CliConfig::builder()
            .env()
            .file(file)
            .load()
            .with_context(|| format!("failed to load config from {}", file.display()))
    }

    pub fn with_root_override(mut self, root: Option<PathBuf>) -> Self {
        if let Some(root) = root {
            self.root = root;
        }
        self
    }
}
