//! Column Definition
//!
//! Defines table columns: header label, width hint, and the field binding
//! that produces each cell's text.

use gpui::SharedString;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Column width hint
    pub width: ColumnWidth,
    /// Bound field accessor producing the cell text
    value: Box<dyn Fn(&R) -> SharedString + Send + Sync>,
}

/// Column width specification
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with a minimum
    Flex { min: f32 },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: 100.0 }
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column bound to a field accessor
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        value: impl Fn(&R) -> SharedString + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            value: Box::new(value),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with a minimum
    pub fn flex_width(mut self, min: f32) -> Self {
        self.width = ColumnWidth::Flex { min };
        self
    }

    /// The cell text for a row
    pub fn value(&self, row: &R) -> SharedString {
        (self.value)(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
        count: u32,
    }

    #[test]
    fn test_column_binds_field() {
        let col = Column::new("name", "Name", |item: &Item| item.name.into());
        let item = Item {
            name: "widget",
            count: 2,
        };
        assert_eq!(col.value(&item), SharedString::from("widget"));

        let col = Column::new("count", "Count", |item: &Item| {
            SharedString::from(item.count.to_string())
        });
        assert_eq!(col.value(&item), SharedString::from("2"));
    }

    #[test]
    fn test_width_hints() {
        let col: Column<Item> =
            Column::new("name", "Name", |item: &Item| item.name.into()).fixed_width(80.0);
        assert!(matches!(col.width, ColumnWidth::Fixed(w) if (w - 80.0).abs() < f32::EPSILON));
    }
}
