//! TextInput Component

use gpui::{
    div, prelude::*, px, ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString, Styled,
    Window,
};

use crate::theme::colors::DeskColors;

/// A text edit derived from a keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Insert(String),
    Backspace,
    None,
}

/// Map a keystroke to a text edit. Keystrokes carrying a command
/// modifier and non-printing keys produce no edit.
pub fn edit_op(key: &str, key_char: Option<&str>, modified: bool) -> EditOp {
    if modified {
        return EditOp::None;
    }
    match key {
        "backspace" => EditOp::Backspace,
        "space" => EditOp::Insert(" ".to_string()),
        _ => match key_char {
            Some(ch) if !ch.is_empty() && !ch.chars().any(char::is_control) => {
                EditOp::Insert(ch.to_string())
            }
            _ => EditOp::None,
        },
    }
}

/// A single-line text input
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Append typed text
    pub fn append(&mut self, text: &str, cx: &mut Context<Self>) {
        self.value.push_str(text);
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }

    /// Remove the last character
    pub fn backspace(&mut self, cx: &mut Context<Self>) {
        self.value.pop();
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let modified = keystroke.modifiers.control
            || keystroke.modifiers.alt
            || keystroke.modifiers.platform;
        match edit_op(&keystroke.key, keystroke.key_char.as_deref(), modified) {
            EditOp::Insert(text) => self.append(&text, cx),
            EditOp::Backspace => self.backspace(cx),
            EditOp::None => {}
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            DeskColors::border_focus()
        } else {
            DeskColors::input_border()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            DeskColors::input_placeholder()
        } else {
            DeskColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                window.focus(&this.focus_handle);
                cx.notify();
            }))
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key_down(event, cx);
            }))
            .cursor_text()
            .px_3()
            .py_2()
            .bg(DeskColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(240.0))
            .child(display_text)
    }
}

/// Create a text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_placeholder(placeholder);
        input
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_op_printable_chars_insert() {
        assert_eq!(edit_op("a", Some("a"), false), EditOp::Insert("a".to_string()));
        assert_eq!(edit_op("é", Some("é"), false), EditOp::Insert("é".to_string()));
        assert_eq!(edit_op("space", None, false), EditOp::Insert(" ".to_string()));
    }

    #[test]
    fn test_edit_op_backspace() {
        assert_eq!(edit_op("backspace", None, false), EditOp::Backspace);
    }

    #[test]
    fn test_edit_op_ignores_modified_and_non_printing_keys() {
        assert_eq!(edit_op("a", Some("a"), true), EditOp::None);
        assert_eq!(edit_op("enter", Some("\n"), false), EditOp::None);
        assert_eq!(edit_op("escape", None, false), EditOp::None);
        assert_eq!(edit_op("left", None, false), EditOp::None);
    }
}
