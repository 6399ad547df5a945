//! RegionOption - Combo Box Option Record

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A selectable region (U.S. state) for the shipping combo box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOption {
    /// Unique identifier
    pub key: String,
    /// Display label
    pub label: String,
}

impl RegionOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Drop options whose key was already seen, keeping the first occurrence.
///
/// Duplicate keys in sample data are a data-quality defect, not a design
/// invariant; a keyed list must have unique keys to give rows stable
/// identity. Each dropped duplicate is logged.
pub fn dedup_regions(raw: Vec<RegionOption>) -> Vec<RegionOption> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(raw.len());

    for option in raw {
        if seen.insert(option.key.clone()) {
            unique.push(option);
        } else {
            tracing::warn!(
                key = %option.key,
                label = %option.label,
                "dropping region option with duplicate key"
            );
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_regions_keeps_first() {
        let raw = vec![
            RegionOption::new("New", "New Hampshire"),
            RegionOption::new("New", "New Jersey"),
            RegionOption::new("New", "New York"),
            RegionOption::new("OH", "Ohio"),
        ];
        let unique = dedup_regions(raw);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].label, "New Hampshire");
        assert_eq!(unique[1].key, "OH");
    }

    #[test]
    fn test_dedup_regions_preserves_order() {
        let raw = vec![
            RegionOption::new("CA", "California"),
            RegionOption::new("TX", "Texas"),
            RegionOption::new("AL", "Alabama"),
        ];
        let unique = dedup_regions(raw.clone());
        assert_eq!(unique, raw);
    }

    #[test]
    fn test_dedup_regions_empty() {
        assert!(dedup_regions(Vec::new()).is_empty());
    }
}
