//! Per-control state held by the store. Not exposed publicly.

#[derive(Clone, Debug, Default)]
pub(crate) struct ControlState {
    /// Current text value (text-like controls).
    pub value: String,

    /// Monotonic revision counter, incremented on any value change.
    pub value_rev: u64,

    /// Selected option index (option-selector controls). 0 is the default
    /// first option.
    pub selected: usize,
}
