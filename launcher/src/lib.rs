//! Classpath and launch metadata for prebuilt runnable JARs.
//!
//! Given a reference to an archive (a local file, or a dependency coordinate
//! that resolves to one), the launcher determines the entry point, the
//! runtime classpath, the minimum Java version and the embedded runtime
//! options, and decides whether the archive is still up to date.
//!
//! - **[`core`]**: Pure, deterministic logic (manifest parsing, coordinate
//!   syntax, classpath policy). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (archive reading, dependency
//!   resolution, configuration). Isolated behind traits for tests.
//!
//! [`source::JarSource`] ties the two together; [`launch`] turns its result
//! into a command line.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod launch;
pub mod logging;
pub mod resource;
pub mod source;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
