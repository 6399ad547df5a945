//! Navigation Panel
//!
//! The left-hand region: a selectable list of customers. Each row's
//! element identity is the record key; activating a row records the key
//! in the shared selection state.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::domain::Customer;
use crate::theme::colors::DeskColors;

/// Navigation panel component
pub struct NavigationPanel {
    entities: AppEntities,
    title: SharedString,
    customers: Vec<Customer>,
}

impl NavigationPanel {
    pub fn new(
        entities: AppEntities,
        title: impl Into<SharedString>,
        customers: Vec<Customer>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Re-render when the selection changes
        cx.observe(&entities.selection, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            title: title.into(),
            customers,
        }
    }

    fn render_row(&self, customer: &Customer, cx: &Context<Self>) -> impl IntoElement {
        let is_selected = self
            .entities
            .selection
            .read(cx)
            .is_selected(&customer.key);
        let key = customer.key.clone();
        let entities = self.entities.clone();

        let (bg_color, border_color) = if is_selected {
            (DeskColors::row_selected_bg(), DeskColors::brand())
        } else {
            (gpui::rgba(0x00000000), gpui::rgba(0x00000000))
        };

        div()
            .id(SharedString::from(customer.key.clone()))
            .w_full()
            .px_4()
            .py_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(DeskColors::text_primary())
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(DeskColors::table_row_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                tracing::debug!(key = %key, "customer row activated");
                entities.selection.update(cx, |selection, cx| {
                    selection.select(key.clone());
                    cx.notify();
                });
            })
            .child(customer.name.clone())
    }
}

impl Render for NavigationPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(DeskColors::nav_bg())
            .border_r_1()
            .border_color(DeskColors::border())
            .flex()
            .flex_col()
            // Pane title
            .child(
                div()
                    .w_full()
                    .px_4()
                    .py_2()
                    .bg(DeskColors::nav_list_bg())
                    .text_color(DeskColors::text_primary())
                    .text_size(px(16.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(self.title.clone()),
            )
            // One row per customer, in input order; zero rows when empty
            .child(
                div()
                    .id("customer-list")
                    .flex_1()
                    .overflow_y_scroll()
                    .flex()
                    .flex_col()
                    .children(
                        self.customers
                            .iter()
                            .map(|customer| self.render_row(customer, cx)),
                    ),
            )
    }
}
