//! I/O helpers for launcher commands.

pub mod archive;
pub mod config;
pub mod resolver;
