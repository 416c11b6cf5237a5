//! Resolved classpath values.
//!
//! A [`ModularClassPath`] is an ordered list of artifacts, each flagged for
//! module-path or classpath placement, plus a validity flag set by whoever
//! produced it. It is built fresh for every resolution and never cached.

use std::collections::HashSet;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::coordinate::Coordinate;

/// One resolved classpath entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactInfo {
    /// Coordinate the artifact was resolved from; `None` for literal paths.
    pub coordinate: Option<Coordinate>,
    pub file: PathBuf,
    /// Whether the artifact belongs on the module path.
    pub module: bool,
}

impl ArtifactInfo {
    pub fn from_path(file: impl Into<PathBuf>) -> Self {
        Self {
            coordinate: None,
            file: file.into(),
            module: false,
        }
    }

    pub fn resolved(coordinate: Coordinate, file: impl Into<PathBuf>, module: bool) -> Self {
        Self {
            coordinate: Some(coordinate),
            file: file.into(),
            module,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModularClassPath {
    artifacts: Vec<ArtifactInfo>,
    valid: bool,
}

impl Default for ModularClassPath {
    fn default() -> Self {
        Self::empty()
    }
}

impl ModularClassPath {
    /// Classpath with entries kept exactly as given.
    pub fn new(artifacts: Vec<ArtifactInfo>, valid: bool) -> Self {
        Self { artifacts, valid }
    }

    /// Classpath with later entries dropped when their file was already seen.
    pub fn deduped(artifacts: Vec<ArtifactInfo>, valid: bool) -> Self {
        let mut seen = HashSet::new();
        let artifacts = artifacts
            .into_iter()
            .filter(|artifact| seen.insert(artifact.file.clone()))
            .collect();
        Self { artifacts, valid }
    }

    /// The zero-length classpath. It is valid: nothing is missing.
    pub fn empty() -> Self {
        Self::new(Vec::new(), true)
    }

    /// Parse a classpath string embedded in an archive manifest.
    ///
    /// Entries are split on the platform path separator and taken as literal
    /// paths with no existence check. The result inherits `valid = true`.
    pub fn from_manifest_class_path(class_path: &str) -> Self {
        let artifacts = env::split_paths(class_path)
            .filter(|path| !path.as_os_str().is_empty())
            .map(ArtifactInfo::from_path)
            .collect();
        Self::new(artifacts, true)
    }

    /// Concatenate `self` followed by `literal`, without deduplication.
    ///
    /// Validity is taken from `self` only; entries of `literal` are not
    /// checked for existence.
    pub fn followed_by(self, literal: ModularClassPath) -> Self {
        let mut artifacts = self.artifacts;
        artifacts.extend(literal.artifacts);
        Self::new(artifacts, self.valid)
    }

    pub fn artifacts(&self) -> &[ArtifactInfo] {
        &self.artifacts
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|artifact| artifact.file.as_path())
    }

    pub fn class_path_entries(&self) -> impl Iterator<Item = &Path> {
        self.artifacts
            .iter()
            .filter(|artifact| !artifact.module)
            .map(|artifact| artifact.file.as_path())
    }

    pub fn module_path_entries(&self) -> impl Iterator<Item = &Path> {
        self.artifacts
            .iter()
            .filter(|artifact| artifact.module)
            .map(|artifact| artifact.file.as_path())
    }

    /// All entries joined with the platform path separator.
    pub fn class_path(&self) -> String {
        join(self.files())
    }

    /// Module entries joined with the platform path separator.
    pub fn module_path(&self) -> String {
        join(self.module_path_entries())
    }
}

fn join<'a>(paths: impl Iterator<Item = &'a Path>) -> String {
    join_class_path(paths).to_string_lossy().into_owned()
}

/// Join paths into a single embedded classpath string.
pub fn join_class_path<I, P>(paths: I) -> OsString
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let separator = if cfg!(windows) { ";" } else { ":" };
    let mut joined = OsString::new();
    for (idx, path) in paths.into_iter().enumerate() {
        if idx > 0 {
            joined.push(separator);
        }
        joined.push(path.as_ref());
    }
    joined
}
