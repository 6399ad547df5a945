//! AppEntities - Global Entity Handles
//!
//! The shared UI state is collected here for easy access. State is split
//! by update frequency so a selection change does not re-render the
//! notice panel and vice versa.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::UiConfig;
use crate::state::{notice_state::NoticeState, selection_state::SelectionState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Navigation selection
    pub selection: Entity<SelectionState>,
    /// Submit notices (ring buffer)
    pub notices: Entity<NoticeState>,
    /// UI configuration, fixed after startup
    pub config: UiConfig,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(config: UiConfig, cx: &mut App) -> Self {
        Self {
            selection: cx.new(|_| SelectionState::default()),
            notices: cx.new(|_| NoticeState::default()),
            config,
        }
    }
}
