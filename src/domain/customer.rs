//! Customer - Navigation List Record

use serde::{Deserialize, Serialize};

/// A customer entry shown in the navigation list
///
/// Immutable after construction; the key is the stable row identity used
/// to match the record to its rendered row across re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub key: String,
    /// Display name
    pub name: String,
}

impl Customer {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}
