//! Dependency resolver abstraction.
//!
//! The [`DependencyResolver`] trait decouples classpath policy from whatever
//! turns coordinates into artifact files. Tests use recording resolvers that
//! return scripted classpaths without touching the filesystem.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

use crate::core::classpath::{ArtifactInfo, ModularClassPath};
use crate::core::coordinate::Coordinate;
use crate::io::archive::is_modular;

/// Process-wide resolution switches, threaded through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveFlags {
    pub offline: bool,
    pub fresh: bool,
    pub quiet: bool,
}

/// Parameters for one resolver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    /// Coordinates to resolve, in order.
    pub coordinates: Vec<String>,
    /// Repository overrides; empty means the resolver's defaults.
    pub repositories: Vec<String>,
    pub offline: bool,
    pub fresh: bool,
    pub verbose: bool,
}

impl ResolveRequest {
    /// Request with no repository overrides and `verbose = !quiet`.
    pub fn new(coordinates: Vec<String>, flags: ResolveFlags) -> Self {
        Self {
            coordinates,
            repositories: Vec::new(),
            offline: flags.offline,
            fresh: flags.fresh,
            verbose: !flags.quiet,
        }
    }
}

/// Abstraction over dependency resolution backends.
pub trait DependencyResolver {
    /// Resolve coordinates into an ordered, deduplicated classpath.
    ///
    /// The result's validity flag reports whether every artifact is present.
    fn resolve(&self, request: &ResolveRequest) -> Result<ModularClassPath>;
}

/// Resolver backed by a Maven-layout repository on the local filesystem.
///
/// Artifacts are looked up directly; dependencies of dependencies are not
/// traversed and nothing is downloaded.
#[derive(Debug, Clone)]
pub struct LocalRepositoryResolver {
    /// `None` means `~/.m2/repository`, found on first use.
    root: Option<PathBuf>,
}

impl LocalRepositoryResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn with_default_root() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => default_local_repository(),
        }
    }

    /// Location of `coordinate` inside the repository (may not exist).
    pub fn locate(&self, coordinate: &str) -> Result<PathBuf> {
        let coordinate = Coordinate::parse(coordinate)?;
        Ok(self.root()?.join(coordinate.repository_path()))
    }
}

/// `~/.m2/repository`.
pub fn default_local_repository() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".m2").join("repository"))
        .context("cannot determine home directory for the local repository")
}

impl DependencyResolver for LocalRepositoryResolver {
    #[instrument(skip_all, fields(count = request.coordinates.len(), offline = request.offline))]
    fn resolve(&self, request: &ResolveRequest) -> Result<ModularClassPath> {
        if request.coordinates.is_empty() {
            return Ok(ModularClassPath::empty());
        }
        let root = self.root()?;
        debug!(root = %root.display(), "resolving from local repository");
        if !request.repositories.is_empty() {
            debug!(repositories = ?request.repositories, "repository overrides ignored");
        }
        if request.fresh {
            debug!("fresh resolution requested, local repository has no cache to refresh");
        }

        let mut artifacts = Vec::with_capacity(request.coordinates.len());
        let mut valid = true;
        for raw in &request.coordinates {
            let coordinate = Coordinate::parse(raw)
                .with_context(|| format!("resolve dependency '{raw}'"))?;
            let file = root.join(coordinate.repository_path());
            let module = if file.exists() {
                is_modular(&file).unwrap_or_else(|err| {
                    let detail = format!("{err:#}");
                    warn!(err = %detail, artifact = %coordinate, "cannot inspect artifact");
                    false
                })
            } else {
                valid = false;
                if request.verbose {
                    warn!(
                        artifact = %coordinate,
                        path = %file.display(),
                        offline = request.offline,
                        "artifact missing from local repository"
                    );
                }
                false
            };
            artifacts.push(ArtifactInfo::resolved(coordinate, file, module));
        }

        debug!(valid, "resolved dependencies");
        Ok(ModularClassPath::deduped(artifacts, valid))
    }
}
