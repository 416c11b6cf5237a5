//! Runnable-JAR launcher.
//!
//! Reads the manifest of a prebuilt JAR (by path, or by coordinate from the
//! local Maven repository) and reports what running it takes: entry point,
//! classpath, minimum Java version and embedded runtime options.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;

use launcher::core::coordinate::looks_like_coordinate;
use launcher::exit_codes;
use launcher::io::config::{LauncherConfig, default_config_path, load_config};
use launcher::io::resolver::{LocalRepositoryResolver, ResolveFlags};
use launcher::launch::build_command;
use launcher::logging;
use launcher::resource::{ResourceRef, is_url};
use launcher::source::{JarSource, Source};

#[derive(Parser)]
#[command(
    name = "launcher",
    version,
    about = "Resolve classpath and launch metadata for prebuilt JARs"
)]
struct Cli {
    /// Config file (defaults to `~/.launcher/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Do not reach for remote repositories.
    #[arg(long, global = true)]
    offline: bool,

    /// Ignore cached resolution state.
    #[arg(long, global = true)]
    fresh: bool,

    /// Only report errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the archive's entry point, Java version and runtime options.
    Info {
        /// JAR path or `group:artifact:version` coordinate.
        reference: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved runtime classpath.
    Classpath {
        /// JAR path or `group:artifact:version` coordinate.
        reference: String,
        /// Additional dependency coordinates.
        #[arg(long = "deps", value_delimiter = ',')]
        deps: Vec<String>,
    },
    /// Exit 0 if the archive is up to date, 2 if it must be rebuilt.
    Check {
        /// JAR path or `group:artifact:version` coordinate.
        reference: String,
    },
    /// Print the Java command line that runs the archive.
    Command {
        /// JAR path or `group:artifact:version` coordinate.
        reference: String,
        /// Additional dependency coordinates.
        #[arg(long = "deps", value_delimiter = ',')]
        deps: Vec<String>,
        /// Java executable (overrides config).
        #[arg(long)]
        java: Option<String>,
        /// Arguments passed to the program.
        #[arg(last = true)]
        args: Vec<String>,
    },
}

/// Resolved settings for one invocation: config merged with CLI flags.
struct Session {
    config: LauncherConfig,
    flags: ResolveFlags,
    resolver: LocalRepositoryResolver,
}

#[derive(Serialize)]
struct InfoReport<'a> {
    resource: Option<&'a str>,
    jar: Option<String>,
    main_class: Option<&'a str>,
    java_version: String,
    runtime_options: &'a [String],
    class_path: Option<&'a str>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let session = open_session(&cli)?;
    match cli.command {
        Command::Info { reference, json } => cmd_info(&session, &reference, json),
        Command::Classpath { reference, deps } => cmd_classpath(&session, &reference, &deps),
        Command::Check { reference } => cmd_check(&session, &reference),
        Command::Command {
            reference,
            deps,
            java,
            args,
        } => cmd_command(&session, &reference, &deps, java.as_deref(), &args),
    }
}

fn open_session(cli: &Cli) -> Result<Session> {
    let config = match cli.config.clone().or_else(default_config_path) {
        Some(path) => load_config(&path)?,
        None => LauncherConfig::default(),
    };
    let base = config.flags();
    let flags = ResolveFlags {
        offline: base.offline || cli.offline,
        fresh: base.fresh || cli.fresh,
        quiet: base.quiet || cli.quiet,
    };
    let resolver = config.resolver();
    Ok(Session {
        config,
        flags,
        resolver,
    })
}

/// Turn a CLI reference into a source. Coordinates are located in the local repository.
fn open_source(session: &Session, reference: &str) -> Result<JarSource> {
    let reference = reference.trim();
    if is_url(reference) {
        bail!("remote resources are not supported: {reference}");
    }
    let resource_ref = if looks_like_coordinate(reference) {
        let jar = session.resolver.locate(reference)?;
        ResourceRef::new(Some(reference.to_string()), Some(jar))
    } else {
        ResourceRef::for_file(reference)
    };
    Ok(JarSource::prepare(resource_ref))
}

fn require_jar(source: &JarSource) -> Result<&Path> {
    let jar = source
        .jar_file()
        .with_context(|| format!("no archive for {}", source.resource_ref().location()))?;
    if !jar.exists() {
        bail!("archive not found: {}", jar.display());
    }
    Ok(jar)
}

fn cmd_info(session: &Session, reference: &str, json: bool) -> Result<i32> {
    let source = open_source(session, reference)?;
    let jar = require_jar(&source)?;
    let metadata = source.metadata();
    let report = InfoReport {
        resource: source.resource_ref().original_resource(),
        jar: Some(jar.display().to_string()),
        main_class: source.main_class(),
        java_version: source.java_version(),
        runtime_options: source.runtime_options(),
        class_path: metadata.class_path.as_deref(),
    };

    if json {
        let payload = serde_json::to_string_pretty(&report).context("serialize info json")?;
        println!("{payload}");
        return Ok(exit_codes::OK);
    }

    println!("resource: {}", report.resource.unwrap_or("-"));
    println!("jar: {}", jar.display());
    println!("main-class: {}", report.main_class.unwrap_or("-"));
    println!("java-version: {}", report.java_version);
    println!(
        "runtime-options: {}",
        shell_words::join(report.runtime_options)
    );
    println!("class-path: {}", report.class_path.unwrap_or("-"));
    Ok(exit_codes::OK)
}

fn cmd_classpath(session: &Session, reference: &str, deps: &[String]) -> Result<i32> {
    let source = open_source(session, reference)?;
    require_jar(&source)?;
    let classpath = source.resolve_class_path(deps, &session.resolver, session.flags)?;
    if !classpath.is_valid() {
        bail!("classpath has unresolved artifacts");
    }
    println!("{}", classpath.class_path());
    Ok(exit_codes::OK)
}

fn cmd_check(session: &Session, reference: &str) -> Result<i32> {
    let source = open_source(session, reference)?;
    if source.is_up_to_date(&session.resolver, session.flags)? {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::STALE)
    }
}

fn cmd_command(
    session: &Session,
    reference: &str,
    deps: &[String],
    java: Option<&str>,
    args: &[String],
) -> Result<i32> {
    let source = open_source(session, reference)?;
    require_jar(&source)?;
    let classpath = source.resolve_class_path(deps, &session.resolver, session.flags)?;
    if !classpath.is_valid() {
        bail!("classpath has unresolved artifacts");
    }
    let java = java.unwrap_or(&session.config.java);
    let command = build_command(java, &source, &classpath, args)?;
    println!("{}", shell_words::join(&command));
    Ok(exit_codes::OK)
}
