//! Reading metadata embedded in JAR archives.
//!
//! Every read opens the archive inside [`with_archive`], which owns the file
//! handle for the duration of one closure and releases it on every exit path.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::core::manifest::{
    AUTOMATIC_MODULE_NAME, Attributes, BUILD_JDK, CLASS_PATH, JAVA_OPTIONS, MAIN_CLASS,
    parse_main_attributes,
};
use crate::core::options::parse_quoted_list;
use crate::core::version::parse_java_version;

pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";
const MODULE_INFO: &str = "module-info.class";

/// Values derived from an archive's own manifest and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveMetadata {
    /// Fully-qualified entry point.
    pub main_class: Option<String>,
    /// Extra runtime flags embedded by the build.
    pub runtime_options: Vec<String>,
    /// Minimum Java feature version; 0 when unspecified.
    pub build_jdk: u32,
    /// Raw platform-separator-joined classpath, verbatim.
    pub class_path: Option<String>,
}

impl ArchiveMetadata {
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            main_class: attrs.get(MAIN_CLASS).map(str::to_string),
            runtime_options: attrs
                .get(JAVA_OPTIONS)
                .map(parse_quoted_list)
                .unwrap_or_default(),
            build_jdk: attrs.get(BUILD_JDK).map(parse_java_version).unwrap_or(0),
            class_path: attrs.get(CLASS_PATH).map(str::to_string),
        }
    }
}

/// Open `path` as a ZIP archive and run `f` against it.
pub fn with_archive<T>(
    path: &Path,
    f: impl FnOnce(&mut ZipArchive<File>) -> Result<T>,
) -> Result<T> {
    let file = File::open(path).with_context(|| format!("open archive {}", path.display()))?;
    let mut archive =
        ZipArchive::new(file).with_context(|| format!("read archive {}", path.display()))?;
    f(&mut archive)
}

/// Read the manifest's main attributes. `Ok(None)` if the archive has no manifest.
pub fn read_manifest(path: &Path) -> Result<Option<Attributes>> {
    with_archive(path, manifest_of)
}

fn manifest_of(archive: &mut ZipArchive<File>) -> Result<Option<Attributes>> {
    let mut entry = match archive.by_name(MANIFEST_PATH) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err).context("open manifest entry"),
    };
    let mut raw = Vec::new();
    entry.read_to_end(&mut raw).context("read manifest entry")?;
    Ok(Some(parse_main_attributes(&String::from_utf8_lossy(&raw))))
}

/// Extract [`ArchiveMetadata`] from `path`, best effort.
///
/// A missing file yields default metadata. An unreadable archive is reported
/// through a warning naming `location` and also yields default metadata.
#[instrument(skip_all, fields(archive = %path.display()))]
pub fn read_metadata(path: &Path, location: &str) -> ArchiveMetadata {
    if !path.exists() {
        debug!("archive does not exist, using empty metadata");
        return ArchiveMetadata::default();
    }
    match read_manifest(path) {
        Ok(Some(attrs)) => ArchiveMetadata::from_attributes(&attrs),
        Ok(None) => {
            debug!("archive has no manifest");
            ArchiveMetadata::default()
        }
        Err(err) => {
            let detail = format!("{err:#}");
            warn!(err = %detail, "Problem reading manifest from {location}");
            ArchiveMetadata::default()
        }
    }
}

/// Whether the archive belongs on the module path.
///
/// True for archives carrying a `module-info.class` (also under
/// `META-INF/versions/N/`) or declaring `Automatic-Module-Name`.
pub fn is_modular(path: &Path) -> Result<bool> {
    with_archive(path, |archive| {
        let descriptor_suffix = format!("/{MODULE_INFO}");
        let has_descriptor = archive.file_names().any(|name| {
            name == MODULE_INFO
                || (name.starts_with("META-INF/versions/") && name.ends_with(&descriptor_suffix))
        });
        if has_descriptor {
            return Ok(true);
        }
        Ok(manifest_of(archive)?
            .is_some_and(|attrs| attrs.get(AUTOMATIC_MODULE_NAME).is_some()))
    })
}
