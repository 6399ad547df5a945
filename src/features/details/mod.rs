//! Details Region
//!
//! Order-shipping form, order summary table, and the output pane.

pub mod controller;
pub mod form;
pub mod panel;
