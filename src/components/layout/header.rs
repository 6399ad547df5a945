//! Header Component
//!
//! The top band with the product mark and the current customer selection.

use gpui::{
    div, px, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::domain::Customer;
use crate::theme::colors::DeskColors;

/// Header band
pub struct Header {
    entities: AppEntities,
    customers: Vec<Customer>,
}

impl Header {
    pub fn new(entities: AppEntities, customers: Vec<Customer>, cx: &mut Context<Self>) -> Self {
        // Re-render when the navigation selection changes
        cx.observe(&entities.selection, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            customers,
        }
    }

    fn selected_customer_name(&self, cx: &Context<Self>) -> Option<SharedString> {
        let selection = self.entities.selection.read(cx);
        let key = selection.selected_key()?;
        self.customers
            .iter()
            .find(|c| c.key == key)
            .map(|c| SharedString::from(c.name.clone()))
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let selection_label = self
            .selected_customer_name(cx)
            .map(|name| SharedString::from(format!("Customer: {name}")))
            .unwrap_or_else(|| SharedString::from("No customer selected"));

        div()
            .h(px(48.0))
            .w_full()
            .bg(DeskColors::brand())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: product mark and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(DeskColors::brand())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("OD"),
                    )
                    .child(
                        div()
                            .text_color(DeskColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("Order Desk"),
                    ),
            )
            // Right side: selection indicator
            .child(
                div()
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(gpui::rgba(0xffffff22))
                    .text_color(DeskColors::text_header())
                    .text_size(px(13.0))
                    .child(selection_label),
            )
    }
}
