//! Details Panel
//!
//! The right-hand region: order-shipping form, order summary table, and
//! the notice output pane.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::data_table::data_table;
use crate::components::composite::data_table::{Column, DataProvider, DataTable, VecDataProvider};
use crate::components::layout::notice_panel::NoticePanel;
use crate::components::primitives::button::Button;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::combo_box::{combo_box, ComboBox, SelectOption};
use crate::components::primitives::radio_group::{RadioGroup, RadioOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::{Order, RegionOption};
use crate::features::details::controller::{DetailsController, ShipOrderHandler};
use crate::features::details::form::{CustomerType, OrderForm};
use crate::theme::colors::DeskColors;
use crate::utils::format::format_price;

/// Column schema for the order summary table
pub fn order_columns() -> Vec<Column<Order>> {
    vec![
        Column::new("customer", "Customer", |order: &Order| {
            SharedString::from(order.customer.clone())
        })
        .flex_width(140.0),
        Column::new("product", "Product", |order: &Order| {
            SharedString::from(order.product.clone())
        })
        .flex_width(220.0),
        Column::new("quantity", "Quantity", |order: &Order| {
            SharedString::from(order.quantity.to_string())
        })
        .fixed_width(90.0),
        Column::new("price", "Price", |order: &Order| {
            SharedString::from(format_price(order.price))
        })
        .fixed_width(90.0),
    ]
}

/// Details panel component
pub struct DetailsPanel {
    controller: DetailsController,
    on_ship: ShipOrderHandler,
    form: OrderForm,
    memo_input: Entity<TextInput>,
    region_combo: Entity<ComboBox>,
    order_table: Entity<DataTable<Order>>,
    notice_panel: Entity<NoticePanel>,
}

impl DetailsPanel {
    pub fn new(
        entities: AppEntities,
        orders: VecDataProvider<Order>,
        regions: Vec<RegionOption>,
        on_ship: ShipOrderHandler,
        cx: &mut Context<Self>,
    ) -> Self {
        let controller = DetailsController::new(entities.clone());

        let memo_input = text_input("memo-input", "Shipping memo", cx);

        let region_options: Vec<SelectOption> = regions
            .iter()
            .map(|r| SelectOption::new(r.key.clone(), r.label.clone()))
            .collect();
        let region_combo = combo_box("region-combo", region_options, "Select a state...", cx);

        let order_table = data_table(
            order_columns(),
            orders.all(),
            |order: &Order| SharedString::from(order.key.clone()),
            cx,
        );

        let notice_panel = cx.new(|cx| NoticePanel::new(entities, cx));

        Self {
            controller,
            on_ship,
            form: OrderForm::default(),
            memo_input,
            region_combo,
            order_table,
            notice_panel,
        }
    }

    fn ship_order(&mut self, cx: &mut Context<Self>) {
        // Pull the widget-owned fields into the form before snapshotting
        let memo = self.memo_input.read(cx).value().to_string();
        let region = self.region_combo.read(cx).selected().map(str::to_string);
        self.form.set_memo(memo);
        self.form.set_region(region);

        let submission = self.form.snapshot();
        self.controller.ship_order(submission, &self.on_ship, cx);
    }

    fn render_section_label(&self, label: impl Into<SharedString>) -> impl IntoElement {
        div()
            .text_sm()
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(DeskColors::text_primary())
            .child(label.into())
    }

    fn render_customer_type(&self, cx: &Context<Self>) -> impl IntoElement {
        let panel = cx.entity();
        let options: Vec<RadioOption> = CustomerType::all()
            .iter()
            .map(|t| RadioOption::new(t.value(), t.label()))
            .collect();

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(self.render_section_label("Customer Type"))
            .child(
                RadioGroup::new("customer-type", self.form.customer_type.value())
                    .options(options)
                    .on_change(move |value, _window, cx| {
                        if let Some(customer_type) = CustomerType::from_value(value) {
                            panel.update(cx, |this, cx| {
                                this.form.set_customer_type(customer_type);
                                cx.notify();
                            });
                        }
                    }),
            )
    }

    fn render_shipping_instructions(&self, cx: &Context<Self>) -> impl IntoElement {
        let panel = cx.entity();
        let international = self.form.international;

        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(self.render_section_label("Shipping Instructions"))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(self.memo_input.clone())
                    .child(
                        Checkbox::new("international-shipping")
                            .checked(international)
                            .label("International Shipping")
                            .on_change(move |checked, _window, cx| {
                                panel.update(cx, |this, cx| {
                                    this.form.set_international(checked);
                                    cx.notify();
                                });
                            }),
                    ),
            )
    }

    fn render_region(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(self.render_section_label("Shipping Region"))
            .child(self.region_combo.clone())
    }

    fn render_summary(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(self.render_section_label("Recent Orders"))
            .child(self.order_table.clone())
    }
}

impl Render for DetailsPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(DeskColors::content_bg())
            .child(
                div()
                    .id("details-content")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(
                        div()
                            .text_size(px(20.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(DeskColors::text_primary())
                            .child("Order Shipping"),
                    )
                    .child(self.render_customer_type(cx))
                    .child(self.render_shipping_instructions(cx))
                    .child(self.render_region())
                    .child(
                        div().flex().items_center().child(
                            Button::primary("ship-order-btn", "Ship Order").on_click(cx.listener(
                                |this, _event: &ClickEvent, _window, cx| {
                                    this.ship_order(cx);
                                },
                            )),
                        ),
                    )
                    .child(self.render_summary()),
            )
            .child(self.notice_panel.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_columns_bind_fields() {
        let order = Order::new("order1", "Jim", "Toothbrush, Green", 3, 1.12);
        let row: Vec<String> = order_columns()
            .iter()
            .map(|col| col.value(&order).to_string())
            .collect();
        assert_eq!(row.join(" | "), "Jim | Toothbrush, Green | 3 | 1.12");
    }

    #[test]
    fn test_order_columns_schema() {
        let columns = order_columns();
        let labels: Vec<&str> = columns.iter().map(|c| c.label.as_ref()).collect();
        assert_eq!(labels, vec!["Customer", "Product", "Quantity", "Price"]);
    }
}
