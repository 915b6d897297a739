//! Selection state for list dialogs
//!
//! A list dialog presents checkable rows and only surfaces the accumulated
//! state at explicit commit points (OK, Cancel, or dismissing the dialog).
//! The state container copies the caller's rows at construction, so
//! toggling never mutates caller-owned data.

/// A checkable row in a selection list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectableRow {
    /// Unique id within the owning list
    pub id: String,
    /// Display label
    pub label: String,
    /// Current checked state
    pub checked: bool,
}

impl SelectableRow {
    pub fn new(id: impl Into<String>, label: impl Into<String>, checked: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked,
        }
    }
}

/// Checkbox vs. radio semantics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Exactly one row checked after any toggle (radio)
    #[default]
    Single,
    /// Rows toggle independently (checkbox)
    Multi,
}

/// Row state behind a single- or multi-select list dialog
///
/// The only mutators are the toggle methods; the only read path is
/// [`commit`](Self::commit) (and the [`rows`](Self::rows) accessor it is
/// built on), which every dialog action (OK, Cancel, tap-outside dismiss)
/// funnels through with the current state.
pub struct SelectionListState {
    mode: SelectionMode,
    rows: Vec<SelectableRow>,
}

impl SelectionListState {
    /// Create from caller-supplied rows
    ///
    /// Rows are value-copied; later toggles never alias the caller's data.
    pub fn new(mode: SelectionMode, rows: &[SelectableRow]) -> Self {
        Self {
            mode,
            rows: rows.to_vec(),
        }
    }

    /// Toggle a row according to the configured mode
    pub fn toggle(&mut self, id: &str) {
        match self.mode {
            SelectionMode::Single => self.toggle_single(id),
            SelectionMode::Multi => self.toggle_multi(id),
        }
    }

    /// Flip the checked state of the matching row (checkbox semantics)
    ///
    /// Unknown ids are ignored.
    pub fn toggle_multi(&mut self, id: &str) {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => row.checked = !row.checked,
            None => tracing::debug!(id, "toggle on unknown row ignored"),
        }
    }

    /// Check the matching row and uncheck all others (radio semantics)
    ///
    /// An unknown id leaves every row untouched, preserving the
    /// one-row-checked invariant.
    pub fn toggle_single(&mut self, id: &str) {
        if !self.rows.iter().any(|row| row.id == id) {
            tracing::debug!(id, "toggle on unknown row ignored");
            return;
        }
        for row in &mut self.rows {
            row.checked = row.id == id;
        }
    }

    /// Current rows
    pub fn rows(&self) -> &[SelectableRow] {
        &self.rows
    }

    /// The configured selection mode
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Ids of all checked rows, in list order
    pub fn checked_ids(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.checked)
            .map(|row| row.id.as_str())
            .collect()
    }

    /// Surface the current row state to a commit action
    ///
    /// Dialogs call this from every button-like exit: confirming,
    /// canceling, and dismissing all report the same current state.
    pub fn commit<F>(&self, action: F)
    where
        F: FnOnce(&[SelectableRow]),
    {
        action(&self.rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rows() -> Vec<SelectableRow> {
        vec![
            SelectableRow::new("a", "First option", true),
            SelectableRow::new("b", "Second option", false),
            SelectableRow::new("c", "Third option", false),
        ]
    }

    #[test]
    fn test_single_select_checks_exactly_one() {
        let rows = three_rows();
        let mut state = SelectionListState::new(SelectionMode::Single, &rows);

        state.toggle_single("b");

        let checked = state.checked_ids();
        assert_eq!(checked, vec!["b"]);
    }

    #[test]
    fn test_single_select_unknown_id_unchanged() {
        let rows = three_rows();
        let mut state = SelectionListState::new(SelectionMode::Single, &rows);

        state.toggle_single("z");

        assert_eq!(state.rows(), rows.as_slice());
        assert_eq!(state.checked_ids(), vec!["a"]);
    }

    #[test]
    fn test_multi_select_double_toggle_roundtrips() {
        let rows = three_rows();
        let mut state = SelectionListState::new(SelectionMode::Multi, &rows);

        state.toggle_multi("a");
        assert!(!state.rows()[0].checked);

        state.toggle_multi("a");
        assert_eq!(state.rows(), rows.as_slice());
    }

    #[test]
    fn test_multi_select_rows_independent() {
        let rows = three_rows();
        let mut state = SelectionListState::new(SelectionMode::Multi, &rows);

        state.toggle_multi("b");
        state.toggle_multi("c");

        assert_eq!(state.checked_ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_multi_select_unknown_id_ignored() {
        let rows = three_rows();
        let mut state = SelectionListState::new(SelectionMode::Multi, &rows);

        state.toggle_multi("nope");
        assert_eq!(state.rows(), rows.as_slice());
    }

    #[test]
    fn test_commit_roundtrip_without_toggles() {
        let rows = three_rows();
        let state = SelectionListState::new(SelectionMode::Single, &rows);

        state.commit(|committed| {
            // Deep equality against the original input: values match even
            // though the state owns its own copies
            assert_eq!(committed, rows.as_slice());
        });
    }

    #[test]
    fn test_state_never_aliases_caller_rows() {
        let mut rows = three_rows();
        let mut state = SelectionListState::new(SelectionMode::Multi, &rows);

        // Mutating the caller's array after construction has no effect
        rows[0].checked = false;
        rows[0].label = "mutated".to_string();

        assert!(state.rows()[0].checked);
        assert_eq!(state.rows()[0].label, "First option");

        // And toggling internal state doesn't touch the caller's array
        state.toggle_multi("c");
        assert!(!rows[2].checked);
    }

    #[test]
    fn test_mode_dispatch() {
        let rows = three_rows();

        let mut single = SelectionListState::new(SelectionMode::Single, &rows);
        single.toggle("c");
        assert_eq!(single.checked_ids(), vec!["c"]);

        let mut multi = SelectionListState::new(SelectionMode::Multi, &rows);
        multi.toggle("c");
        assert_eq!(multi.checked_ids(), vec!["a", "c"]);
    }
}
