//! Shell Component
//!
//! The page frame: a full-size vertical stack the header band, body, and
//! footer band are placed into.

use gpui::{div, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::theme::colors::DeskColors;

/// Application shell wrapper
#[derive(IntoElement)]
pub struct Shell {
    children: Vec<gpui::AnyElement>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(DeskColors::background())
            .children(self.children)
    }
}
