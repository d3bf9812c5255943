//! Column resolution: map a human-readable header label to a positional
//! index in a block's first header row. Exact, case-insensitive; a mismatch
//! is a hard miss, never a fuzzy match.

use crate::grid;
use dom::Node;

pub fn column_index(table: &Node, label: &str) -> Option<usize> {
    grid::header_texts(table, 1)
        .iter()
        .position(|h| h.eq_ignore_ascii_case(label))
}
