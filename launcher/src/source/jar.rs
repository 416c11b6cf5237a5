//! Prebuilt archives as runnable sources.
//!
//! A [`JarSource`] carries nothing beyond what can be read from the archive
//! itself, so two sources pointing at the same file always agree.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Result;
use tracing::{debug, instrument};

use crate::core::classpath::ModularClassPath;
use crate::core::policy::ClassPathPlan;
use crate::io::archive::{ArchiveMetadata, read_metadata};
use crate::io::resolver::{DependencyResolver, ResolveFlags, ResolveRequest};
use crate::resource::ResourceRef;
use crate::source::{ScriptSource, Source};

#[derive(Debug)]
pub struct JarSource {
    resource_ref: ResourceRef,
    jar_file: Option<PathBuf>,
    metadata: ArchiveMetadata,
    script_source: OnceLock<ScriptSource>,
}

impl JarSource {
    /// Source for the archive at the resource's own local file.
    pub fn prepare(resource_ref: ResourceRef) -> Self {
        let jar_file = resource_ref.file().map(Path::to_path_buf);
        Self::load(resource_ref, jar_file, None)
    }

    /// Source for `resource_ref` whose archive lives at `jar_file`.
    pub fn prepare_with_jar(resource_ref: ResourceRef, jar_file: impl Into<PathBuf>) -> Self {
        Self::load(resource_ref, Some(jar_file.into()), None)
    }

    /// Source for the build output of `script`, keeping `script` as its script view.
    pub fn from_script(script: ScriptSource) -> Self {
        let jar_file = script.jar_file().map(Path::to_path_buf);
        Self::load(script.resource_ref().clone(), jar_file, Some(script))
    }

    fn load(
        resource_ref: ResourceRef,
        jar_file: Option<PathBuf>,
        script_source: Option<ScriptSource>,
    ) -> Self {
        let metadata = match &jar_file {
            Some(jar) => read_metadata(jar, &resource_ref.location()),
            None => ArchiveMetadata::default(),
        };
        Self {
            resource_ref,
            jar_file,
            metadata,
            script_source: script_source.map(OnceLock::from).unwrap_or_default(),
        }
    }

    pub fn metadata(&self) -> &ArchiveMetadata {
        &self.metadata
    }

    /// Script view of this resource, built on first access.
    pub fn as_script_source(&self) -> &ScriptSource {
        self.script_source
            .get_or_init(|| ScriptSource::prepare(self.resource_ref.clone()))
    }

    pub fn class_path_plan<'a>(&'a self, additional_deps: &'a [String]) -> ClassPathPlan<'a> {
        ClassPathPlan::classify(
            self.resource_ref.original_resource(),
            self.metadata.class_path.as_deref(),
            additional_deps,
        )
    }

    /// Whether the archive can run as-is, or needs rebuilding.
    ///
    /// Always re-resolves: artifacts may have disappeared since the last build.
    pub fn is_up_to_date(
        &self,
        resolver: &dyn DependencyResolver,
        flags: ResolveFlags,
    ) -> Result<bool> {
        let Some(jar) = self.jar_file.as_deref() else {
            return Ok(false);
        };
        if !jar.exists() {
            debug!(jar = %jar.display(), "archive missing, not up to date");
            return Ok(false);
        }
        Ok(self.resolve_class_path(&[], resolver, flags)?.is_valid())
    }
}

impl Source for JarSource {
    fn resource_ref(&self) -> &ResourceRef {
        &self.resource_ref
    }

    fn jar_file(&self) -> Option<&Path> {
        self.jar_file.as_deref()
    }

    fn java_version(&self) -> String {
        format!("{}+", self.metadata.build_jdk)
    }

    fn main_class(&self) -> Option<&str> {
        self.metadata.main_class.as_deref()
    }

    fn runtime_options(&self) -> &[String] {
        &self.metadata.runtime_options
    }

    fn is_created_jar(&self) -> bool {
        false
    }

    fn all_dependencies(&self) -> Vec<String> {
        Vec::new()
    }

    #[instrument(skip_all, fields(resource = %self.resource_ref.location(), extras = additional_deps.len()))]
    fn resolve_class_path(
        &self,
        additional_deps: &[String],
        resolver: &dyn DependencyResolver,
        flags: ResolveFlags,
    ) -> Result<ModularClassPath> {
        let plan = self.class_path_plan(additional_deps);
        debug!(plan = plan.name(), "resolving classpath");
        match plan {
            ClassPathPlan::Coordinate { .. } | ClassPathPlan::ExtrasOnly { .. } => {
                resolver.resolve(&ResolveRequest::new(plan.coordinates(), flags))
            }
            ClassPathPlan::Embedded { extras, class_path } => {
                let resolved = resolver.resolve(&ResolveRequest::new(extras.to_vec(), flags))?;
                let embedded = ModularClassPath::from_manifest_class_path(class_path);
                Ok(resolved.followed_by(embedded))
            }
            ClassPathPlan::Empty => Ok(ModularClassPath::empty()),
        }
    }
}
