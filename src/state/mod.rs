//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of shared UI state,
//! split by update frequency to avoid unnecessary re-renders. Form-field
//! state is deliberately not here: each field belongs to the panel that
//! owns it.

pub mod notice_state;
pub mod selection_state;
