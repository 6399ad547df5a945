//! Footer Component
//!
//! The bottom band of the page frame.

use gpui::{
    div, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::DeskColors;

/// Footer band
#[derive(IntoElement)]
pub struct Footer {
    status: SharedString,
}

impl Footer {
    pub fn new(status: impl Into<SharedString>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl RenderOnce for Footer {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .h(px(32.0))
            .w_full()
            .bg(DeskColors::brand())
            .border_t_1()
            .border_color(DeskColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .text_color(DeskColors::text_header())
                    .text_size(px(12.0))
                    .child(self.status),
            )
            .child(
                div()
                    .text_color(gpui::rgba(0xffffffaa))
                    .text_size(px(11.0))
                    .child(concat!("v", env!("CARGO_PKG_VERSION"))),
            )
    }
}
