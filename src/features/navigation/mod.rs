//! Navigation Region

pub mod panel;
