//! JAR manifest (`META-INF/MANIFEST.MF`) main-section parsing.

pub const MAIN_CLASS: &str = "Main-Class";
pub const CLASS_PATH: &str = "Class-Path";
pub const BUILD_JDK: &str = "Build-Jdk";
pub const JAVA_OPTIONS: &str = "JBang-Java-Options";
pub const AUTOMATIC_MODULE_NAME: &str = "Automatic-Module-Name";

/// Main attributes of a manifest. Names compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: String, value: String) {
        match self
            .entries
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }
}

/// Parse the main section of a manifest.
///
/// Lines starting with a single space continue the previous value. Parsing
/// stops at the first blank line; per-entry sections are not read. Lines
/// without a `:` separator are skipped.
pub fn parse_main_attributes(text: &str) -> Attributes {
    let mut attrs = Attributes::default();
    let mut current: Option<(String, String)> = None;

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(' ') {
            if let Some((_, value)) = current.as_mut() {
                value.push_str(rest);
            }
            continue;
        }
        if let Some((name, value)) = current.take() {
            attrs.insert(name, value);
        }
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.strip_prefix(' ').unwrap_or(value);
            current = Some((name.trim().to_string(), value.to_string()));
        }
    }
    if let Some((name, value)) = current {
        attrs.insert(name, value);
    }
    attrs
}
