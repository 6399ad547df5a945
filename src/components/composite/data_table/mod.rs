//! DataTable Component
//!
//! A keyed data table with a fixed column schema.

pub mod column;
pub mod data_provider;
pub mod data_table;

pub use column::Column;
pub use data_provider::{DataProvider, VecDataProvider};
pub use data_table::DataTable;
