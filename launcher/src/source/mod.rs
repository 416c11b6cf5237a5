//! Runnable sources.
//!
//! A [`Source`] is something the launcher can run. [`JarSource`] wraps a
//! prebuilt archive; [`ScriptSource`] is the script view of the same
//! resource.

use std::path::Path;

use anyhow::Result;

use crate::core::classpath::ModularClassPath;
use crate::io::resolver::{DependencyResolver, ResolveFlags};
use crate::resource::ResourceRef;

pub mod jar;
pub mod script;

pub use jar::JarSource;
pub use script::ScriptSource;

pub trait Source {
    fn resource_ref(&self) -> &ResourceRef;

    /// Archive holding the compiled code, if one is known.
    fn jar_file(&self) -> Option<&Path>;

    /// Minimum Java version as a floor, e.g. `"17+"`.
    fn java_version(&self) -> String;

    fn main_class(&self) -> Option<&str>;

    fn runtime_options(&self) -> &[String];

    /// Whether the archive was produced by this tool's own build step.
    fn is_created_jar(&self) -> bool;

    /// Dependency coordinates declared by the source itself.
    fn all_dependencies(&self) -> Vec<String>;

    /// Resolve the runtime classpath, adding `additional_deps`.
    fn resolve_class_path(
        &self,
        additional_deps: &[String],
        resolver: &dyn DependencyResolver,
        flags: ResolveFlags,
    ) -> Result<ModularClassPath>;
}
