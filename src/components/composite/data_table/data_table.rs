//! DataTable Component
//!
//! Renders a header row plus one body row per record. Rows carry the
//! record's key as their element identity; an empty record sequence
//! renders the header with zero body rows.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use super::column::{Column, ColumnWidth};
use crate::theme::colors::DeskColors;

/// DataTable component
pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    key: Box<dyn Fn(&R) -> SharedString + Send + Sync>,
    row_height: f32,
    header_height: f32,
}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    /// Create a new data table with a row-key accessor
    pub fn new(key: impl Fn(&R) -> SharedString + Send + Sync + 'static) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            key: Box::new(key),
            row_height: 36.0,
            header_height: 40.0,
        }
    }

    /// Set the column schema
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Number of body rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolve a width hint to pixels
    fn column_width(&self, width: &ColumnWidth) -> f32 {
        match width {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex { min } => *min,
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(DeskColors::table_header_bg())
            .border_b_1()
            .border_color(DeskColors::border())
            .children(self.columns.iter().map(|col| {
                let width = self.column_width(&col.width);
                div()
                    .w(px(width))
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(DeskColors::text_primary())
                    .child(col.label.clone())
            }))
    }

    /// Render a body row keyed by the record's identity
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            DeskColors::content_bg()
        } else {
            DeskColors::table_row_alt()
        };

        div()
            .id((self.key)(row))
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(DeskColors::table_row_hover()))
            .border_b_1()
            .border_color(DeskColors::border())
            .children(self.columns.iter().map(|col| {
                let width = self.column_width(&col.width);
                div()
                    .w(px(width))
                    .px_3()
                    .text_sm()
                    .text_color(DeskColors::text_primary())
                    .overflow_hidden()
                    .child(col.value(row))
            }))
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .w_full()
            .flex()
            .flex_col()
            .bg(DeskColors::content_bg())
            .border_1()
            .border_color(DeskColors::border())
            .rounded_md()
            .overflow_hidden();

        // Header always renders, even with zero rows
        table = table.child(self.render_header());

        if !self.rows.is_empty() {
            let rows_content = div()
                .id("data-table-rows")
                .max_h(px(260.0))
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                );
            table = table.child(rows_content);
        }

        table
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: Clone + Send + Sync + 'static, V: 'static>(
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    key: impl Fn(&R) -> SharedString + Send + Sync + 'static,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|_cx| {
        let mut table = DataTable::new(key);
        table.set_columns(columns);
        table.set_rows(rows);
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_tracks_rows() {
        let mut table: DataTable<&str> =
            DataTable::new(|row: &&str| SharedString::from(row.to_string()));
        table.set_columns(vec![Column::new("name", "Name", |row: &&str| {
            SharedString::from(row.to_string())
        })]);
        assert_eq!(table.row_count(), 0);

        table.set_rows(vec!["a", "b"]);
        assert_eq!(table.row_count(), 2);

        table.set_rows(Vec::new());
        assert_eq!(table.row_count(), 0);
    }
}
