//! Central store for control values.
//!
//! The store is the write surface for programmatic edits: setting or clearing
//! a text value, selecting an option, moving focus. It performs no layout and
//! dispatches no events; callers emit notifications themselves after editing.

use crate::id::ControlId;
use crate::state::ControlState;
use std::collections::HashMap;

/// Central store for control state.
///
/// # Example
///
/// ```
/// use input_state::{ControlId, ControlValueStore};
///
/// let mut store = ControlValueStore::new();
/// let id = ControlId::from_raw(1);
///
/// store.focus(id);
/// store.set_value(id, "Doe, Jane");
/// assert_eq!(store.get(id), Some("Doe, Jane"));
/// assert_eq!(store.focused(), Some(id));
///
/// store.blur(id);
/// assert_eq!(store.focused(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ControlValueStore {
    values: HashMap<ControlId, ControlState>,
    focused: Option<ControlId>,
}

impl ControlValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, id: ControlId) -> bool {
        self.values.contains_key(&id)
    }

    /// Ensure an entry exists; if missing, inserts the given initial value
    /// without bumping the revision.
    pub fn ensure_initial(&mut self, id: ControlId, initial: String) {
        self.values.entry(id).or_insert_with(|| ControlState {
            value: initial,
            ..ControlState::default()
        });
    }

    pub fn get(&self, id: ControlId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Monotonic revision counter for the control's value. 0 if unknown.
    pub fn value_revision(&self, id: ControlId) -> u64 {
        self.values.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// Replace the text value. Returns `true` if the value actually changed.
    pub fn set_value(&mut self, id: ControlId, value: &str) -> bool {
        let st = self.values.entry(id).or_default();
        if st.value == value {
            return false;
        }
        st.value = value.to_string();
        st.value_rev += 1;
        true
    }

    /// Reset the text value to empty. Returns `true` if it changed.
    pub fn clear_value(&mut self, id: ControlId) -> bool {
        self.set_value(id, "")
    }

    /// Selected option index for an option-selector control. 0 if unknown.
    pub fn selected_index(&self, id: ControlId) -> usize {
        self.values.get(&id).map(|s| s.selected).unwrap_or(0)
    }

    /// Select an option by index. Returns `true` if the selection changed.
    pub fn set_selected(&mut self, id: ControlId, index: usize) -> bool {
        let st = self.values.entry(id).or_default();
        if st.selected == index {
            return false;
        }
        st.selected = index;
        st.value_rev += 1;
        true
    }

    pub fn focus(&mut self, id: ControlId) {
        self.focused = Some(id);
    }

    /// Drop focus if this control currently holds it.
    pub fn blur(&mut self, id: ControlId) {
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }
}
