//! CLI tests for `launcher info`, `launcher classpath` and `launcher command`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use launcher::core::classpath::join_class_path;
use launcher::io::config::{LauncherConfig, write_config};
use launcher::io::resolver::LocalRepositoryResolver;
use launcher::test_support::write_jar;

struct Fixture {
    temp: tempfile::TempDir,
    config: PathBuf,
    resolver: LocalRepositoryResolver,
}

impl Fixture {
    fn new() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let repo = temp.path().join("repo");
        let config = temp.path().join("config.toml");
        let cfg = LauncherConfig {
            local_repository: Some(repo.clone()),
            java: "/opt/jdk/bin/java".to_string(),
            ..LauncherConfig::default()
        };
        write_config(&config, &cfg).expect("write config");
        Self {
            temp,
            config,
            resolver: LocalRepositoryResolver::new(repo),
        }
    }

    fn dir(&self) -> &Path {
        self.temp.path()
    }

    fn artifact(&self, coordinate: &str) -> PathBuf {
        let jar = self.resolver.locate(coordinate).expect("locate");
        write_jar(&jar, &[]);
        jar
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_launcher"))
            .current_dir(self.dir())
            .env("HOME", self.dir())
            .arg("--config")
            .arg(&self.config)
            .args(args)
            .output()
            .expect("run launcher")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn info_json_reports_manifest_values() {
    let fx = Fixture::new();
    write_jar(
        &fx.dir().join("app.jar"),
        &[
            ("Main-Class", "app.Main"),
            ("Build-Jdk", "17.0.8"),
            ("JBang-Java-Options", r#"-Xmx512m "-Dfoo=a b""#),
        ],
    );

    let output = fx.run(&["info", "app.jar", "--json"]);
    assert!(output.status.success(), "{output:?}");
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["main_class"], "app.Main");
    assert_eq!(report["java_version"], "17+");
    assert_eq!(
        report["runtime_options"],
        serde_json::json!(["-Xmx512m", "-Dfoo=a b"])
    );
    assert!(report["class_path"].is_null());
}

#[test]
fn info_on_missing_archive_fails() {
    let fx = Fixture::new();
    let output = fx.run(&["info", "missing.jar"]);
    assert_eq!(output.status.code(), Some(launcher::exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("archive not found"));
}

#[test]
fn classpath_puts_extras_before_embedded_entries() {
    let fx = Fixture::new();
    let dep = fx.artifact("com.example:dep:1.0");
    let embedded = join_class_path([fx.dir().join("x.jar"), fx.dir().join("y.jar")]);
    let embedded = embedded.to_string_lossy().into_owned();
    write_jar(
        &fx.dir().join("app.jar"),
        &[("Main-Class", "app.Main"), ("Class-Path", embedded.as_str())],
    );

    let output = fx.run(&["classpath", "app.jar", "--deps", "com.example:dep:1.0"]);
    assert!(output.status.success(), "{output:?}");
    let expected = join_class_path([dep, fx.dir().join("x.jar"), fx.dir().join("y.jar")]);
    assert_eq!(stdout(&output), expected.to_string_lossy());
}

#[test]
fn classpath_with_missing_dependency_fails() {
    let fx = Fixture::new();
    write_jar(&fx.dir().join("app.jar"), &[("Main-Class", "app.Main")]);

    let output = fx.run(&["classpath", "app.jar", "--deps", "com.example:gone:1.0"]);
    assert_eq!(output.status.code(), Some(launcher::exit_codes::INVALID));
}

#[test]
fn classpath_of_coordinate_includes_the_artifact() {
    let fx = Fixture::new();
    let jar = fx.resolver.locate("com.example:app:1.0").expect("locate");
    write_jar(&jar, &[("Main-Class", "app.Main"), ("Class-Path", "/ignored.jar")]);

    let output = fx.run(&["classpath", "com.example:app:1.0"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), jar.to_string_lossy());
}

#[test]
fn command_prints_java_invocation() {
    let fx = Fixture::new();
    let jar = fx.dir().join("app.jar");
    write_jar(
        &jar,
        &[("Main-Class", "app.Main"), ("JBang-Java-Options", "-Xmx1g")],
    );

    let reference = jar.to_string_lossy().into_owned();
    let output = fx.run(&["command", reference.as_str(), "--", "hello"]);
    assert!(output.status.success(), "{output:?}");
    let words = shell_words::split(&stdout(&output)).expect("split");
    assert_eq!(
        words,
        vec![
            "/opt/jdk/bin/java".to_string(),
            "-Xmx1g".to_string(),
            "-classpath".to_string(),
            jar.to_string_lossy().into_owned(),
            "app.Main".to_string(),
            "hello".to_string(),
        ]
    );
}

#[test]
fn info_on_local_jar_works_without_home_directory() {
    let fx = Fixture::new();
    let empty_config = fx.dir().join("empty.toml");
    std::fs::write(&empty_config, "").expect("write config");
    let jar = fx.dir().join("app.jar");
    write_jar(&jar, &[("Main-Class", "app.Main")]);

    let output = Command::new(env!("CARGO_BIN_EXE_launcher"))
        .current_dir(fx.dir())
        .env_remove("HOME")
        .env_remove("USERPROFILE")
        .arg("--config")
        .arg(&empty_config)
        .args(["info", "app.jar"])
        .output()
        .expect("run launcher");

    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("main-class: app.Main"));
}
