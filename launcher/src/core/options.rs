//! Shell-like splitting of embedded runtime option strings.

use tracing::debug;

/// Split a quoted argument string into a list of options.
///
/// Single quotes, double quotes and backslash escapes follow shell rules, so
/// `"-Dfoo=a b"` stays one token. Unbalanced quoting falls back to plain
/// whitespace splitting.
pub fn parse_quoted_list(value: &str) -> Vec<String> {
    match shell_words::split(value) {
        Ok(words) => words,
        Err(err) => {
            debug!(err = %err, value, "unbalanced quoting, splitting on whitespace");
            value.split_whitespace().map(str::to_string).collect()
        }
    }
}
