//! SelectionState - Active Customer Selection

/// State for the navigation list's row activation
///
/// The drafts this screen grew out of never wired selection up; the
/// contract here is "on row activation, record the activated key" so the
/// details pane can react to it.
#[derive(Debug, Default)]
pub struct SelectionState {
    /// Key of the currently selected customer, if any
    selected_key: Option<String>,
}

impl SelectionState {
    /// Record a row activation
    pub fn select(&mut self, key: impl Into<String>) {
        self.selected_key = Some(key.into());
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected_key = None;
    }

    /// Get the selected key
    pub fn selected_key(&self) -> Option<&str> {
        self.selected_key.as_deref()
    }

    /// Check whether the given key is the selected one
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_key.as_deref() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces_previous() {
        let mut state = SelectionState::default();
        assert!(state.selected_key().is_none());

        state.select("1");
        assert!(state.is_selected("1"));

        state.select("3");
        assert!(state.is_selected("3"));
        assert!(!state.is_selected("1"));
    }

    #[test]
    fn test_clear() {
        let mut state = SelectionState::default();
        state.select("2");
        state.clear();
        assert!(state.selected_key().is_none());
    }
}
