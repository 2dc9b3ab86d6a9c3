//! Shared helpers for terminal output and filesystem paths

pub mod paths;
pub mod terminal;
