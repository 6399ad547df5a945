//! DataProvider Trait
//!
//! Abstraction over the data handed to the table, so fixtures are injected
//! rather than reached for.

use std::sync::Arc;

/// Trait for providing rows to the DataTable
pub trait DataProvider: Send + Sync + 'static {
    type Row: Clone + Send + Sync + 'static;

    /// Get the total number of rows
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by index
    fn row(&self, index: usize) -> Option<Self::Row>;

    /// Get all rows in display order
    fn all(&self) -> Vec<Self::Row> {
        (0..self.len()).filter_map(|i| self.row(i)).collect()
    }
}

/// Simple in-memory data provider
pub struct VecDataProvider<R> {
    rows: Arc<Vec<R>>,
}

impl<R: Clone + Send + Sync + 'static> VecDataProvider<R> {
    /// Create a new VecDataProvider
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }
}

impl<R> Clone for VecDataProvider<R> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<R: Clone + Send + Sync + 'static> DataProvider for VecDataProvider<R> {
    type Row = R;

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<Self::Row> {
        self.rows.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_provider_rows_in_order() {
        let provider = VecDataProvider::new(vec!["a", "b", "c"]);
        assert_eq!(provider.len(), 3);
        assert_eq!(provider.row(1), Some("b"));
        assert_eq!(provider.all(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_vec_provider_empty() {
        let provider: VecDataProvider<&str> = VecDataProvider::new(Vec::new());
        assert!(provider.is_empty());
        assert!(provider.row(0).is_none());
        assert!(provider.all().is_empty());
    }
}
