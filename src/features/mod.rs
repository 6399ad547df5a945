//! Features - The Page's Body Regions

pub mod details;
pub mod navigation;
