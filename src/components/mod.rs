//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on app state or do I/O.

pub mod composite;
pub mod layout;
pub mod primitives;
