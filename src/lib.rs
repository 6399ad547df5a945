//! Order Desk Library
//!
//! A native GUI order management screen: a three-band page frame hosting
//! a customer navigation list and an order-shipping details pane.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod features;
pub mod fixtures;
pub mod state;
pub mod theme;
pub mod utils;
