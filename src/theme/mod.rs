//! Theme - Semantic Color Tokens and Typography

pub mod colors;
pub mod typography;
