//! Script view of a resource.

use std::path::Path;
use std::path::PathBuf;

use crate::resource::ResourceRef;

/// The same resource reinterpreted as a source script.
///
/// Holds no parsed script content; it only carries identity so a
/// [`super::JarSource`] can be turned back into its script form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSource {
    resource_ref: ResourceRef,
    jar_file: Option<PathBuf>,
}

impl ScriptSource {
    /// Script view with no associated build output.
    pub fn prepare(resource_ref: ResourceRef) -> Self {
        Self {
            resource_ref,
            jar_file: None,
        }
    }

    /// Script view whose build output is `jar_file`.
    pub fn with_jar_file(resource_ref: ResourceRef, jar_file: impl Into<PathBuf>) -> Self {
        Self {
            resource_ref,
            jar_file: Some(jar_file.into()),
        }
    }

    pub fn resource_ref(&self) -> &ResourceRef {
        &self.resource_ref
    }

    pub fn jar_file(&self) -> Option<&Path> {
        self.jar_file.as_deref()
    }
}
