//! Test-only helpers for building archives and scripting resolvers.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::core::classpath::{ArtifactInfo, ModularClassPath};
use crate::core::coordinate::Coordinate;
use crate::io::archive::MANIFEST_PATH;
use crate::io::resolver::{DependencyResolver, ResolveRequest};

/// Bytes of a class file header, enough for entries that only need to exist.
pub const CLASS_MAGIC: &[u8] = b"\xca\xfe\xba\xbe";

/// Render manifest text with `Manifest-Version` first and CRLF line endings.
pub fn manifest_text(attrs: &[(&str, &str)]) -> String {
    let mut text = String::from("Manifest-Version: 1.0\r\n");
    for (name, value) in attrs {
        text.push_str(&format!("{name}: {value}\r\n"));
    }
    text.push_str("\r\n");
    text
}

/// Write a JAR containing only a manifest with `attrs`.
pub fn write_jar(path: &Path, attrs: &[(&str, &str)]) {
    write_jar_with_entries(path, Some(attrs), &[]);
}

/// Write a JAR with an optional manifest and extra entries.
pub fn write_jar_with_entries(
    path: &Path,
    manifest: Option<&[(&str, &str)]>,
    entries: &[(&str, &[u8])],
) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create jar parent");
    }
    let file = File::create(path).expect("create jar");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    if let Some(attrs) = manifest {
        zip.start_file(MANIFEST_PATH, options).expect("start manifest");
        zip.write_all(manifest_text(attrs).as_bytes())
            .expect("write manifest");
    }
    for (name, contents) in entries {
        zip.start_file(*name, options).expect("start entry");
        zip.write_all(contents).expect("write entry");
    }
    zip.finish().expect("finish jar");
}

/// In-memory sink for formatted tracing output.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Run `f` with a plain-text subscriber writing into this capture.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().expect("log buffer lock");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .expect("log buffer lock")
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Resolver that records requests and maps coordinates under `/repo`.
#[derive(Debug, Default)]
pub struct RecordingResolver {
    pub requests: RefCell<Vec<ResolveRequest>>,
    /// Validity flag returned with every classpath.
    pub invalid: bool,
    /// When set, every call fails with this message.
    pub failure: Option<String>,
}

impl RecordingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalid() -> Self {
        Self {
            invalid: true,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_coordinates(&self) -> Vec<String> {
        self.requests
            .borrow()
            .last()
            .map(|request| request.coordinates.clone())
            .unwrap_or_default()
    }
}

impl DependencyResolver for RecordingResolver {
    fn resolve(&self, request: &ResolveRequest) -> Result<ModularClassPath> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(message) = &self.failure {
            return Err(anyhow!("{message}"));
        }
        let mut artifacts = Vec::new();
        for raw in &request.coordinates {
            let coordinate = Coordinate::parse(raw)?;
            let file = Path::new("/repo").join(coordinate.repository_path());
            artifacts.push(ArtifactInfo::resolved(coordinate, file, false));
        }
        Ok(ModularClassPath::deduped(artifacts, !self.invalid))
    }
}
