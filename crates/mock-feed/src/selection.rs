//! Detail-panel selection state.
//!
//! A minimal two-state controller: either no detail panel is open, or
//! exactly one is, keyed by message identifier. The original cleared the
//! selection by writing the falsy sentinel `0`, which collides with a
//! legitimately generated identifier of zero (an all-zero digit token);
//! this controller uses a proper `Option` so no identifier is reserved.

/// Tracks which single record's detail panel is open, if any.
///
/// # Example
///
/// ```
/// use mock_feed::Selection;
///
/// let mut selection = Selection::default();
/// assert!(selection.selected().is_none());
///
/// selection.select(42);
/// assert!(selection.is_selected(42));
/// assert!(!selection.is_selected(7));
///
/// selection.clear();
/// assert!(!selection.is_selected(42));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<u64>,
}

impl Selection {
    /// Opens the detail panel for the given identifier, replacing any
    /// previous selection.
    pub const fn select(&mut self, id: u64) {
        self.selected = Some(id);
    }

    /// Closes the open detail panel, if any.
    pub const fn clear(&mut self) {
        self.selected = None;
    }

    /// Returns the currently selected identifier.
    #[must_use]
    pub const fn selected(&self) -> Option<u64> {
        self.selected
    }

    /// Returns true if the given identifier's detail panel is open.
    #[must_use]
    pub const fn is_selected(&self, id: u64) -> bool {
        matches!(self.selected, Some(selected) if selected == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_selected() {
        let selection = Selection::default();

        assert_eq!(selection.selected(), None);
        assert!(!selection.is_selected(0));
        assert!(!selection.is_selected(42));
    }

    #[test]
    fn select_then_clear_round_trips() {
        let mut selection = Selection::default();

        selection.select(42);
        assert_eq!(selection.selected(), Some(42));
        assert!(selection.is_selected(42));

        selection.clear();
        assert_eq!(selection.selected(), None);
        assert!(!selection.is_selected(42));
    }

    #[test]
    fn selecting_replaces_the_previous_selection() {
        let mut selection = Selection::default();

        selection.select(7);
        selection.select(8);

        assert!(!selection.is_selected(7));
        assert!(selection.is_selected(8));
    }

    #[test]
    fn identifier_zero_is_a_legitimate_selection() {
        // An all-zero digit token yields id 0; under the historical falsy
        // sentinel its panel could never be told apart from "closed".
        let mut selection = Selection::default();

        selection.select(0);
        assert!(selection.is_selected(0));

        selection.clear();
        assert!(!selection.is_selected(0));
    }
}
