//! Java launch command construction.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Result, anyhow};

use crate::core::classpath::{ModularClassPath, join_class_path};
use crate::source::Source;

/// Build `java [options] [-cp ..] [--module-path ..] <main> [args]`.
///
/// The source's own archive goes first on the classpath unless the resolved
/// classpath already contains it.
pub fn build_command(
    java: &str,
    source: &dyn Source,
    classpath: &ModularClassPath,
    args: &[String],
) -> Result<Vec<String>> {
    let main_class = source.main_class().ok_or_else(|| {
        anyhow!(
            "no Main-Class in manifest of {}",
            source.resource_ref().location()
        )
    })?;

    let mut seen = HashSet::new();
    let class_path_entries: Vec<&Path> = source
        .jar_file()
        .into_iter()
        .chain(classpath.class_path_entries())
        .filter(|path| seen.insert(path.to_path_buf()))
        .filter(|path| !classpath.module_path_entries().any(|module| module == *path))
        .collect();

    let mut command = vec![java.to_string()];
    command.extend(source.runtime_options().iter().cloned());
    if !class_path_entries.is_empty() {
        command.push("-classpath".to_string());
        command.push(
            join_class_path(class_path_entries)
                .to_string_lossy()
                .into_owned(),
        );
    }
    let module_path = classpath.module_path();
    if !module_path.is_empty() {
        command.push("--module-path".to_string());
        command.push(module_path);
    }
    command.push(main_class.to_string());
    command.extend(args.iter().cloned());
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classpath::ArtifactInfo;
    use crate::core::coordinate::Coordinate;
    use crate::resource::ResourceRef;
    use crate::source::JarSource;
    use crate::test_support::write_jar;

    #[test]
    fn puts_options_classpath_and_main_in_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let jar = temp.path().join("app.jar");
        write_jar(
            &jar,
            &[("Main-Class", "app.Main"), ("JBang-Java-Options", "-Xmx1g")],
        );
        let source = JarSource::prepare(ResourceRef::for_file(&jar));
        let classpath = ModularClassPath::new(
            vec![
                ArtifactInfo::from_path("/lib/a.jar"),
                ArtifactInfo::resolved(
                    Coordinate::parse("m:mod:1").expect("coordinate"),
                    "/lib/mod.jar",
                    true,
                ),
            ],
            true,
        );

        let command = build_command(
            "java",
            &source,
            &classpath,
            &["--verbose".to_string()],
        )
        .expect("command");

        let expected_cp = join_class_path([jar.as_path(), Path::new("/lib/a.jar")])
            .to_string_lossy()
            .into_owned();
        assert_eq!(
            command,
            vec![
                "java".to_string(),
                "-Xmx1g".to_string(),
                "-classpath".to_string(),
                expected_cp,
                "--module-path".to_string(),
                "/lib/mod.jar".to_string(),
                "app.Main".to_string(),
                "--verbose".to_string(),
            ]
        );
    }

    #[test]
    fn does_not_repeat_archive_already_on_classpath() {
        let temp = tempfile::tempdir().expect("tempdir");
        let jar = temp.path().join("app.jar");
        write_jar(&jar, &[("Main-Class", "app.Main")]);
        let source = JarSource::prepare(ResourceRef::for_file(&jar));
        let classpath = ModularClassPath::new(vec![ArtifactInfo::from_path(&jar)], true);

        let command = build_command("java", &source, &classpath, &[]).expect("command");
        assert_eq!(command[2], jar.to_string_lossy());
    }

    #[test]
    fn missing_main_class_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let jar = temp.path().join("lib.jar");
        write_jar(&jar, &[]);
        let source = JarSource::prepare(ResourceRef::for_file(&jar));
        let err = build_command("java", &source, &ModularClassPath::empty(), &[])
            .expect_err("should fail");
        assert!(err.to_string().contains("no Main-Class"));
    }
}
