//! ComboBox Component
//!
//! A searchable single-select dropdown. The option list is filtered with a
//! case-insensitive substring match over the labels.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::components::primitives::text_input::{edit_op, EditOp};
use crate::theme::colors::DeskColors;

/// A selectable option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Filter options by a case-insensitive substring match on the label
pub fn filter_options<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    if query.is_empty() {
        return options.iter().collect();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|opt| opt.label.to_lowercase().contains(&needle))
        .collect()
}

/// A searchable single-select combo box
pub struct ComboBox {
    id: ElementId,
    options: Vec<SelectOption>,
    selected: Option<String>,
    query: String,
    open: bool,
    placeholder: SharedString,
    focus_handle: FocusHandle,
}

impl ComboBox {
    /// Create a new combo box
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            selected: None,
            query: String::new(),
            open: false,
            placeholder: "Select...".into(),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Set the options
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Get the selected value
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Get the label of the selected option
    pub fn selected_label(&self) -> Option<SharedString> {
        self.selected.as_ref().and_then(|value| {
            self.options
                .iter()
                .find(|opt| &opt.value == value)
                .map(|opt| opt.label.clone())
        })
    }

    /// Select an option by value
    pub fn select(&mut self, value: impl Into<String>, cx: &mut Context<Self>) {
        self.selected = Some(value.into());
        self.query.clear();
        self.open = false;
        cx.notify();
    }

    /// Clear the selection
    pub fn clear_selection(&mut self, cx: &mut Context<Self>) {
        self.selected = None;
        cx.notify();
    }

    /// Update the filter query
    pub fn set_query(&mut self, query: impl Into<String>, cx: &mut Context<Self>) {
        self.query = query.into();
        cx.notify();
    }

    fn toggle_open(&mut self, cx: &mut Context<Self>) {
        self.open = !self.open;
        if !self.open {
            self.query.clear();
        }
        cx.notify();
    }

    /// Keyboard search while the dropdown is open: printable characters
    /// narrow the query, enter takes the first match, escape closes.
    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        if !self.open {
            return;
        }
        let keystroke = &event.keystroke;
        match keystroke.key.as_str() {
            "escape" => {
                self.open = false;
                self.query.clear();
                cx.notify();
            }
            "enter" => {
                let first = filter_options(&self.options, &self.query)
                    .first()
                    .map(|opt| opt.value.clone());
                if let Some(value) = first {
                    self.select(value, cx);
                }
            }
            _ => {
                let modified = keystroke.modifiers.control
                    || keystroke.modifiers.alt
                    || keystroke.modifiers.platform;
                match edit_op(&keystroke.key, keystroke.key_char.as_deref(), modified) {
                    EditOp::Insert(text) => self.set_query(format!("{}{}", self.query, text), cx),
                    EditOp::Backspace => {
                        self.query.pop();
                        cx.notify();
                    }
                    EditOp::None => {}
                }
            }
        }
    }

    fn render_option(&self, option: &SelectOption, cx: &Context<Self>) -> impl IntoElement {
        let value = option.value.clone();
        let is_selected = self.selected.as_deref() == Some(option.value.as_str());

        div()
            .id(SharedString::from(format!("option-{}", option.value)))
            .w_full()
            .px_3()
            .py_1()
            .text_sm()
            .text_color(DeskColors::text_primary())
            .when(is_selected, |s| s.bg(DeskColors::row_selected_bg()))
            .cursor_pointer()
            .hover(|s| s.bg(DeskColors::table_row_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.select(value.clone(), cx);
            }))
            .child(option.label.clone())
    }
}

impl Focusable for ComboBox {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ComboBox {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let display_text = if self.open && !self.query.is_empty() {
            SharedString::from(self.query.clone())
        } else {
            self.selected_label().unwrap_or(self.placeholder.clone())
        };

        let text_color = if self.selected.is_some() || (self.open && !self.query.is_empty()) {
            DeskColors::text_primary()
        } else {
            DeskColors::input_placeholder()
        };

        let mut combo = div()
            .flex()
            .flex_col()
            .min_w(px(200.0))
            // Anchor row
            .child(
                div()
                    .id(self.id.clone())
                    .track_focus(&self.focus_handle)
                    .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                        this.handle_key_down(event, cx);
                    }))
                    .px_3()
                    .py_2()
                    .bg(DeskColors::input_bg())
                    .border_1()
                    .border_color(if self.open {
                        DeskColors::border_focus()
                    } else {
                        DeskColors::input_border()
                    })
                    .rounded_md()
                    .text_color(text_color)
                    .text_sm()
                    .flex()
                    .items_center()
                    .justify_between()
                    .cursor_pointer()
                    .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                        window.focus(&this.focus_handle);
                        this.toggle_open(cx);
                    }))
                    .child(display_text)
                    .child(
                        div()
                            .text_color(DeskColors::text_muted())
                            .text_size(px(10.0))
                            .child(if self.open { "▲" } else { "▼" }),
                    ),
            );

        if self.open {
            let filtered: Vec<SelectOption> = filter_options(&self.options, &self.query)
                .into_iter()
                .cloned()
                .collect();

            combo = combo.child(
                div()
                    .id(SharedString::from("combo-options"))
                    .w_full()
                    .max_h(px(220.0))
                    .overflow_y_scroll()
                    .bg(DeskColors::content_bg())
                    .border_1()
                    .border_color(DeskColors::border())
                    .rounded_md()
                    .flex()
                    .flex_col()
                    .children(
                        filtered
                            .iter()
                            .map(|option| self.render_option(option, cx)),
                    ),
            );
        }

        combo
    }
}

/// Create a combo box entity
pub fn combo_box<V: 'static>(
    id: impl Into<ElementId>,
    options: Vec<SelectOption>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<ComboBox> {
    let id = id.into();
    let options_vec = options;
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut combo = ComboBox::new(id, cx);
        combo.set_options(options_vec);
        combo.set_placeholder(placeholder);
        combo
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> Vec<SelectOption> {
        vec![
            SelectOption::new("NH", "New Hampshire"),
            SelectOption::new("NY", "New York"),
            SelectOption::new("OH", "Ohio"),
            SelectOption::new("WA", "Washington"),
        ]
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let options = states();
        assert_eq!(filter_options(&options, "").len(), 4);
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let options = states();
        let hits = filter_options(&options, "new");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].value, "NH");
        assert_eq!(hits[1].value, "NY");

        let hits = filter_options(&options, "SHING");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value, "WA");
    }

    #[test]
    fn test_filter_no_match() {
        let options = states();
        assert!(filter_options(&options, "zz").is_empty());
    }
}
