//! Deterministic, pure logic shared by the launcher.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! strings and values and return deterministic outputs suitable for tests.

pub mod classpath;
pub mod coordinate;
pub mod manifest;
pub mod options;
pub mod policy;
pub mod version;
