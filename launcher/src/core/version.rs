//! Java version-string parsing.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<major>\d+)(?:\.(?P<minor>\d+))?").expect("version regex is valid")
});

/// Parse a Java version string into its major feature version.
///
/// Legacy `1.x` versions map to `x` (`1.8.0_292` -> 8). Returns 0 when the
/// string carries no leading number.
pub fn parse_java_version(version: &str) -> u32 {
    let Some(caps) = VERSION_RE.captures(version) else {
        debug!(version, "unparsable java version");
        return 0;
    };
    let major = caps["major"].parse::<u32>().unwrap_or(0);
    match (major, caps.name("minor")) {
        (1, Some(minor)) => minor.as_str().parse().unwrap_or(0),
        _ => major,
    }
}
