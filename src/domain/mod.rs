//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the order-management domain.

pub mod config;
pub mod customer;
pub mod order;
pub mod region;

pub use config::UiConfig;
pub use customer::Customer;
pub use order::Order;
pub use region::RegionOption;
