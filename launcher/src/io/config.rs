//! Launcher configuration stored under `~/.launcher/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::io::resolver::{LocalRepositoryResolver, ResolveFlags};

/// Launcher configuration (TOML).
///
/// Missing fields take their defaults; command-line flags override the
/// resolution switches at run time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LauncherConfig {
    /// Never reach for remote repositories.
    pub offline: bool,

    /// Ignore cached resolution state.
    pub fresh: bool,

    /// Suppress resolver progress output.
    pub quiet: bool,

    /// Maven-layout repository used to locate artifacts.
    /// Defaults to `$HOME/.m2/repository`.
    pub local_repository: Option<PathBuf>,

    /// Java executable used in launch commands.
    pub java: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            offline: false,
            fresh: false,
            quiet: false,
            local_repository: None,
            java: "java".to_string(),
        }
    }
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<()> {
        if self.java.trim().is_empty() {
            return Err(anyhow!("java must be a non-empty command"));
        }
        if let Some(repo) = &self.local_repository
            && repo.as_os_str().is_empty()
        {
            return Err(anyhow!("local_repository must not be empty when set"));
        }
        Ok(())
    }

    pub fn flags(&self) -> ResolveFlags {
        ResolveFlags {
            offline: self.offline,
            fresh: self.fresh,
            quiet: self.quiet,
        }
    }

    /// Resolver over the configured repository. The default repository is
    /// only looked up when a coordinate is actually resolved.
    pub fn resolver(&self) -> LocalRepositoryResolver {
        match &self.local_repository {
            Some(repo) => LocalRepositoryResolver::new(repo),
            None => LocalRepositoryResolver::with_default_root(),
        }
    }
}

/// Default config location: `~/.launcher/config.toml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".launcher").join("config.toml"))
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LauncherConfig::default()`.
pub fn load_config(path: &Path) -> Result<LauncherConfig> {
    if !path.exists() {
        let cfg = LauncherConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LauncherConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &LauncherConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
