//! Settings resolved from flags, environment and the config file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::BaseDirs;
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;

const CONFIG_FILE_NAME: &str = ".skuid.json";

/// Optional values read from the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    dir: Option<PathBuf>,
    module: Option<String>,
}

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root of the local metadata tree.
    pub dir: PathBuf,
    /// Module filters, in the order given. Empty means every module.
    pub modules: Vec<String>,
}

impl Settings {
    /// Flags and environment win over the config file; the directory
    /// defaults to the working directory.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = load_config_file(cli.config.as_deref())?;

        let dir = cli
            .dir
            .clone()
            .or(file.dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let module = cli.module.clone().or(file.module).unwrap_or_default();

        Ok(Self {
            dir,
            modules: split_modules(&module),
        })
    }
}

/// Split a comma-separated module list, dropping blanks.
pub fn split_modules(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILE_NAME))
}

/// An explicit path must exist; the default one is optional.
fn load_config_file(explicit: Option<&Path>) -> Result<ConfigFile> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(ConfigFile::default()),
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ConfigFile = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    debug!(path = %path.display(), "Using config file");

    Ok(config)
}
