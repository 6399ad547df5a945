//! Details Controller
//!
//! Owns ship-order dispatch: snapshots the form, invokes the
//! caller-supplied handler, and surfaces the outcome in the notice panel.
//! A handler failure or panic never crashes the page.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use gpui::App;

use crate::app::entities::AppEntities;
use crate::error::{Error, Result};
use crate::features::details::form::OrderSubmission;
use crate::state::notice_state::NoticeLevel;
use crate::utils::format::truncate;

/// Caller-supplied handler invoked once per ship-order activation
pub type ShipOrderHandler = Rc<dyn Fn(&OrderSubmission) -> Result<()>>;

/// Details region controller
pub struct DetailsController {
    entities: AppEntities,
}

impl DetailsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Ship the order: dispatch the snapshot and record the outcome
    pub fn ship_order(&self, submission: OrderSubmission, handler: &ShipOrderHandler, cx: &mut App) {
        match dispatch(handler.as_ref(), &submission) {
            Ok(()) => {
                let detail = serde_json::to_string(&submission)
                    .unwrap_or_else(|_| "<unserializable submission>".to_string());
                tracing::info!(%detail, "order shipped");
                self.entities.notices.update(cx, |notices, cx| {
                    notices.push(
                        NoticeLevel::Info,
                        truncate(&format!("Order shipped: {detail}"), 200),
                    );
                    cx.notify();
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "ship order failed");
                self.entities.notices.update(cx, |notices, cx| {
                    notices.push(NoticeLevel::Error, format!("Ship order failed: {e}"));
                    cx.notify();
                });
            }
        }
    }
}

/// Invoke the handler exactly once, converting a panic into an error
pub fn dispatch(
    handler: &dyn Fn(&OrderSubmission) -> Result<()>,
    submission: &OrderSubmission,
) -> Result<()> {
    match catch_unwind(AssertUnwindSafe(|| handler(submission))) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "handler panicked".to_string());
            Err(Error::Submit { message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn submission() -> OrderSubmission {
        OrderSubmission {
            customer_type: "new".to_string(),
            memo: "fragile".to_string(),
            international: false,
            region: Some("WA".to_string()),
        }
    }

    #[test]
    fn test_dispatch_invokes_handler_once_with_snapshot() {
        let calls = Cell::new(0u32);
        let handler = |s: &OrderSubmission| {
            calls.set(calls.get() + 1);
            assert_eq!(s.customer_type, "new");
            assert_eq!(s.memo, "fragile");
            assert_eq!(s.region.as_deref(), Some("WA"));
            Ok(())
        };
        assert!(dispatch(&handler, &submission()).is_ok());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_dispatch_propagates_handler_error() {
        let handler = |_: &OrderSubmission| {
            Err(Error::Submit {
                message: "warehouse unavailable".to_string(),
            })
        };
        let err = dispatch(&handler, &submission()).expect_err("should fail");
        assert!(err.to_string().contains("warehouse unavailable"));
    }

    #[test]
    fn test_dispatch_catches_panicking_handler() {
        let handler = |_: &OrderSubmission| -> Result<()> { panic!("boom") };
        let err = dispatch(&handler, &submission()).expect_err("should fail");
        assert!(err.to_string().contains("boom"));
    }
}
