//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::rc::Rc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::UiConfig;
use crate::features::details::controller::ShipOrderHandler;
use crate::features::details::form::OrderSubmission;
use crate::fixtures;
use crate::utils::config_store;

actions!(order_desk, [Quit]);

/// Run the Order Desk application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Load UI configuration, falling back to defaults
        let config = match config_store::load_config::<UiConfig>("config.json") {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load config, using defaults");
                UiConfig::default()
            }
        };

        // Write the active config back so the file exists for hand editing
        // on first run and stays normalized after one
        if let Err(e) = config_store::save_config("config.json", &config) {
            tracing::warn!(error = %e, "failed to persist config");
        }

        // Initialize global entities
        let entities = AppEntities::init(config.clone(), cx);
        cx.set_global(entities.clone());

        // The default ship-order handler only acknowledges the snapshot;
        // embedders supply their own to route submissions onward.
        let on_ship: ShipOrderHandler = Rc::new(|submission: &OrderSubmission| {
            tracing::info!(customer_type = %submission.customer_type, "ship order accepted");
            Ok(())
        });

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window_width), px(config.window_height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Order Desk")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| {
                Workspace::new(
                    entities.clone(),
                    fixtures::sample_customers(),
                    fixtures::sample_orders(),
                    fixtures::us_states(),
                    on_ship,
                    cx,
                )
            })
        })
        .expect("failed to open main window");

        cx.activate(true);
    });
}
