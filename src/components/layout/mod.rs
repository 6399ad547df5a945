//! Layout Components
//!
//! Shell, header band, footer band, and the notice output panel.

pub mod footer;
pub mod header;
pub mod notice_panel;
pub mod shell;
