//! Workspace - Page Composer
//!
//! Assembles the three-band frame: header band, two-pane body (navigation
//! and details), and footer band. The body split proportion comes from the
//! injected UI configuration.

use gpui::{
    div, relative, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::VecDataProvider;
use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::components::layout::shell::Shell;
use crate::domain::{Customer, Order, RegionOption};
use crate::features::details::controller::ShipOrderHandler;
use crate::features::details::panel::DetailsPanel;
use crate::features::navigation::panel::NavigationPanel;

/// Main workspace containing the page layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    navigation: Entity<NavigationPanel>,
    details: Entity<DetailsPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        customers: Vec<Customer>,
        orders: Vec<Order>,
        regions: Vec<RegionOption>,
        on_ship: ShipOrderHandler,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), customers.clone(), cx));

        let navigation =
            cx.new(|cx| NavigationPanel::new(entities.clone(), "Customers", customers, cx));

        let details = cx.new(|cx| {
            DetailsPanel::new(
                entities.clone(),
                VecDataProvider::new(orders),
                regions,
                on_ship,
                cx,
            )
        });

        Self {
            entities,
            header,
            navigation,
            details,
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let nav_split = self.entities.config.nav_split_clamped();

        Shell::new()
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(
                        div()
                            .w(relative(nav_split))
                            .h_full()
                            .child(self.navigation.clone()),
                    )
                    .child(
                        div()
                            .flex_1()
                            .h_full()
                            .overflow_hidden()
                            .child(self.details.clone()),
                    ),
            )
            .child(Footer::new("Ready"))
    }
}
