//! Binding of the Relationships data view.
//!
//! Host re-renders (paging, sorting, navigation) rebuild the section's nodes,
//! so binding runs repeatedly. Idempotence rests on a registry of bound cell
//! keys; the marker class on the cell is a visual affordance, not the guard.

use crate::classify;
use crate::columns;
use crate::config::{Config, Section};
use crate::grid;
use dom::query::{add_class, set_attr};
use dom::{Id, Node, find_node_by_id_mut};
use std::collections::HashSet;

/// Marker class for cells the engine has made clickable.
pub const CLICKABLE_CLASS: &str = "cf-clickable";

/// Label of the column whose cells carry the selectable names.
pub const CONTACT_COLUMN: &str = "Contact";

const CLICKABLE_TITLE: &str = "Click to filter General & Professional by this person";

/// Bind every not-yet-bound Contact cell of the Relationships data block.
/// Returns the number of newly bound cells; re-running over an unchanged view
/// binds nothing.
pub fn rebind(dom: &mut Node, cfg: &Config, bound: &mut HashSet<Id>) -> usize {
    let fresh: Vec<Id> = {
        let Some(table) = classify::data_block(dom, cfg, Section::Relationships) else {
            log::debug!(target: "crossfilter.bind", "no relationships data block");
            return 0;
        };
        let Some(col) = columns::column_index(table, CONTACT_COLUMN) else {
            log::debug!(target: "crossfilter.bind", "no {CONTACT_COLUMN:?} column");
            return 0;
        };

        grid::rows(table)
            .iter()
            .skip(1) // header
            .filter_map(|row| grid::cells(row).get(col).map(|cell| cell.id()))
            .filter(|id| !bound.contains(id))
            .collect()
    };

    for id in &fresh {
        bound.insert(*id);
        if let Some(cell) = find_node_by_id_mut(dom, *id) {
            add_class(cell, CLICKABLE_CLASS);
            set_attr(cell, "title", CLICKABLE_TITLE);
        }
    }

    if !fresh.is_empty() {
        log::debug!(target: "crossfilter.bind", "bound {} cells", fresh.len());
    }
    fresh.len()
}
