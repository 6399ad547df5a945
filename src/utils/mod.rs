//! Utils - Config Storage and Formatting

pub mod config_store;
pub mod format;
