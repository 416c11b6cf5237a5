//! Maven-style dependency coordinates (`group:artifact:version`).

use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::{Result, anyhow};
use regex::Regex;

static COORDINATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<group>[\w.\-]+):(?P<artifact>[\w.\-]+):(?P<version>[^:@/\\\s]+)(?::(?P<classifier>[\w.\-]+))?(?:@(?P<kind>[\w.\-]+))?$",
    )
    .expect("coordinate regex is valid")
});

/// A parsed `group:artifact:version[:classifier][@type]` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub classifier: Option<String>,
    /// Packaging type; `None` means `jar`.
    pub kind: Option<String>,
}

/// Returns true if `value` is syntactically a dependency coordinate.
///
/// URLs and file paths never match: group and artifact may not contain `/`,
/// and a coordinate has at least three `:`-separated parts. Surrounding
/// whitespace is not accepted.
pub fn looks_like_coordinate(value: &str) -> bool {
    COORDINATE_RE.is_match(value)
}

impl Coordinate {
    pub fn parse(value: &str) -> Result<Self> {
        let caps = COORDINATE_RE
            .captures(value)
            .ok_or_else(|| anyhow!("invalid dependency coordinate '{value}'"))?;
        Ok(Self {
            group: caps["group"].to_string(),
            artifact: caps["artifact"].to_string(),
            version: caps["version"].to_string(),
            classifier: caps.name("classifier").map(|m| m.as_str().to_string()),
            kind: caps.name("kind").map(|m| m.as_str().to_string()),
        })
    }

    pub fn extension(&self) -> &str {
        self.kind.as_deref().unwrap_or("jar")
    }

    /// Path of the artifact relative to a Maven-layout repository root.
    pub fn repository_path(&self) -> PathBuf {
        let mut path: PathBuf = self.group.split('.').collect();
        path.push(&self.artifact);
        path.push(&self.version);
        let file_name = match &self.classifier {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.artifact,
                self.version,
                classifier,
                self.extension()
            ),
            None => format!("{}-{}.{}", self.artifact, self.version, self.extension()),
        };
        path.push(file_name);
        path
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        if let Some(kind) = &self.kind {
            write!(f, "@{kind}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn accepts_plain_gav() {
        assert!(looks_like_coordinate("com.example:lib:1.0"));
        assert!(looks_like_coordinate("info.picocli:picocli:4.7.5"));
    }

    #[test]
    fn accepts_classifier_and_type() {
        assert!(looks_like_coordinate("org.openjfx:javafx-base:21:linux"));
        assert!(looks_like_coordinate("com.example:lib:1.0-SNAPSHOT@pom"));
    }

    #[test]
    fn rejects_paths_and_urls() {
        assert!(!looks_like_coordinate("app.jar"));
        assert!(!looks_like_coordinate("/tmp/app.jar"));
        assert!(!looks_like_coordinate("C:\\work\\app.jar"));
        assert!(!looks_like_coordinate("https://repo.example.com/app.jar"));
        assert!(!looks_like_coordinate("com.example:lib"));
        assert!(!looks_like_coordinate(""));
        assert!(!looks_like_coordinate(" com.example:lib:1.0"));
    }

    #[test]
    fn parse_splits_parts() {
        let coord = Coordinate::parse("org.openjfx:javafx-base:21:linux@jar").expect("parse");
        assert_eq!(coord.group, "org.openjfx");
        assert_eq!(coord.artifact, "javafx-base");
        assert_eq!(coord.version, "21");
        assert_eq!(coord.classifier.as_deref(), Some("linux"));
        assert_eq!(coord.to_string(), "org.openjfx:javafx-base:21:linux@jar");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Coordinate::parse("not a coordinate").is_err());
    }

    #[test]
    fn repository_path_follows_maven_layout() {
        let coord = Coordinate::parse("com.example:lib:1.0").expect("parse");
        assert_eq!(
            coord.repository_path(),
            Path::new("com/example/lib/1.0/lib-1.0.jar")
        );

        let coord = Coordinate::parse("com.example:lib:1.0:tests").expect("parse");
        assert_eq!(
            coord.repository_path(),
            Path::new("com/example/lib/1.0/lib-1.0-tests.jar")
        );
    }
}
