use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Conventional source root (foundry's default `out/`)
pub const DEFAULT_SOURCE_ROOT: &str = "out";

/// Conventional target directory consumed by ityfuzz
pub const DEFAULT_TARGET_DIR: &str = "ityfuzz_build";

/// Project-local config file name, looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "abibin.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one subdirectory per compiled source file
    pub source_root: PathBuf,
    /// Flat output directory for `.abi` / `.bin` files
    pub target_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
        }
    }
}

impl Config {
    /// Apply command-line overrides on top of file/default values
    pub fn with_overrides(
        mut self,
        source_root: Option<PathBuf>,
        target_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(source_root) = source_root {
            self.source_root = source_root;
        }
        if let Some(target_dir) = target_dir {
            self.target_dir = target_dir;
        }
        self
    }
}

/// Load configuration.
///
/// An explicit path must exist and parse. The implicit lookup falls back to
/// defaults when no file is found, and ignores a file that fails to parse.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    let Some(path) = config_path() else {
        return Ok(Config::default());
    };
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    match load_file(&path) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!("ignoring config file: {err:#}");
            Ok(Config::default())
        }
    }
}

fn load_file(path: &Path) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = parse(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("ABIBIN_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("abibin").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("abibin").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "abibin", "abibin")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
