//! Filter-control discovery.
//!
//! The filter block mirrors the data block's column layout. The row holding
//! the active-filter controls is found by its "contains" marker text, and the
//! control aligned to the data block's column is the engine's write target.

use crate::columns;
use crate::grid;
use dom::{Id, Node, attr};

/// Label of the column both target sections filter on.
pub const PERSON_COLUMN: &str = "Person";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-line text input.
    Text,
    /// Multi-line text control.
    TextArea,
    /// Single/multi-option selector.
    Select,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterControl {
    pub id: Id,
    pub kind: ControlKind,
}

/// Classify a node as an interactive control the engine can write to.
/// An `input` with no `type` attribute defaults to text; non-text input
/// types (checkbox, radio, …) are not usable as filter controls.
pub fn control_kind(node: &Node) -> Option<ControlKind> {
    if node.is_element_named("input") {
        return match attr(node, "type").map(str::trim).filter(|t| !t.is_empty()) {
            None => Some(ControlKind::Text),
            Some(t) if t.eq_ignore_ascii_case("text") => Some(ControlKind::Text),
            Some(_) => None,
        };
    }
    if node.is_element_named("textarea") {
        return Some(ControlKind::TextArea);
    }
    if node.is_element_named("select") {
        return Some(ControlKind::Select);
    }
    None
}

fn first_control(node: &Node) -> Option<FilterControl> {
    for c in node.children() {
        if let Some(kind) = control_kind(c) {
            return Some(FilterControl { id: c.id(), kind });
        }
        if let Some(found) = first_control(c) {
            return Some(found);
        }
    }
    None
}

/// Locate the person-filter control inside `filter_table`, aligned to the
/// `Person` column of `data_table`. Every miss (column, row, cell, control)
/// is soft: the caller simply cannot apply a filter here.
pub fn person_filter_control(data_table: &Node, filter_table: &Node) -> Option<FilterControl> {
    let col = columns::column_index(data_table, PERSON_COLUMN)?;

    let rows = grid::rows(filter_table);
    let filter_row = rows
        .iter()
        .copied()
        .find(|r| grid::row_text(r).to_ascii_lowercase().contains("contains"))
        .or_else(|| rows.get(1).copied())
        .or_else(|| rows.first().copied())?;

    let cells = grid::cells(filter_row);
    let cell = cells.get(col)?;
    first_control(cell)
}
