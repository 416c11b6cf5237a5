//! References to the resource a runnable archive came from.

use std::path::{Path, PathBuf};

/// Where an archive came from and where it lives locally.
///
/// `original_resource` is what the user asked for (a path, a URL or a
/// coordinate); `file` is the local copy, when one is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    original_resource: Option<String>,
    file: Option<PathBuf>,
}

impl ResourceRef {
    pub fn new(original_resource: Option<String>, file: Option<PathBuf>) -> Self {
        Self {
            original_resource,
            file,
        }
    }

    /// Reference to a local file that is its own original resource.
    pub fn for_file(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        Self {
            original_resource: Some(file.to_string_lossy().into_owned()),
            file: Some(file),
        }
    }

    pub fn original_resource(&self) -> Option<&str> {
        self.original_resource.as_deref()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Human-readable location for messages: the local file, else the original.
    pub fn location(&self) -> String {
        match (&self.file, &self.original_resource) {
            (Some(file), _) => file.display().to_string(),
            (None, Some(original)) => original.clone(),
            (None, None) => "<unknown>".to_string(),
        }
    }
}

/// Whether `value` carries a URL scheme such as `https://`.
pub fn is_url(value: &str) -> bool {
    value
        .split_once("://")
        .is_some_and(|(scheme, _)| {
            !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_file_uses_path_as_original() {
        let rr = ResourceRef::for_file("/tmp/app.jar");
        assert_eq!(rr.original_resource(), Some("/tmp/app.jar"));
        assert_eq!(rr.file(), Some(Path::new("/tmp/app.jar")));
    }

    #[test]
    fn location_falls_back_to_original() {
        let gav = ResourceRef::new(Some("com.example:lib:1.0".to_string()), None);
        assert_eq!(gav.location(), "com.example:lib:1.0");
    }

    #[test]
    fn detects_url_schemes() {
        assert!(is_url("https://example.com/app.jar"));
        assert!(is_url("file:///tmp/app.jar"));
        assert!(!is_url("/tmp/app.jar"));
        assert!(!is_url("com.example:lib:1.0"));
        assert!(!is_url("://nothing"));
    }

    #[test]
    fn location_prefers_local_file() {
        let rr = ResourceRef::new(
            Some("com.example:lib:1.0".to_string()),
            Some(PathBuf::from("/repo/lib-1.0.jar")),
        );
        assert_eq!(rr.location(), "/repo/lib-1.0.jar");
        assert_eq!(ResourceRef::new(None, None).location(), "<unknown>");
    }
}
