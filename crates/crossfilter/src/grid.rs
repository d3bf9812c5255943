//! Row/cell access for block ("table") nodes.
//!
//! The host markup nests rows under intermediate containers (`thead`,
//! `tbody`), so rows are gathered as descendants, not direct children.

use dom::{Node, collect_text, query::descendant_elements};

/// All descendant rows of a block, in document order.
pub fn rows<'a>(table: &'a Node) -> Vec<&'a Node> {
    let mut out = Vec::new();
    descendant_elements(table, "tr", &mut out);
    out
}

/// The element children of a row: its cells, whatever their tag.
pub fn cells<'a>(row: &'a Node) -> Vec<&'a Node> {
    row.element_children().collect()
}

/// Trimmed `th` texts from the first `depth` rows.
pub fn header_texts(table: &Node, depth: usize) -> Vec<String> {
    let mut out = Vec::new();
    for row in rows(table).into_iter().take(depth) {
        push_header_cells(row, &mut out);
    }
    out
}

/// Trimmed `th` texts from every row. The filter row sits below the header
/// in the host markup, so its marker cells only show up in a full scan.
pub fn all_header_texts(table: &Node) -> Vec<String> {
    let mut out = Vec::new();
    for row in rows(table) {
        push_header_cells(row, &mut out);
    }
    out
}

fn push_header_cells(row: &Node, out: &mut Vec<String>) {
    for cell in row.element_children() {
        if cell.is_element_named("th") {
            let mut text = String::new();
            collect_text(cell, &mut text);
            out.push(text.trim().to_string());
        }
    }
}

/// Concatenated text content of a row.
pub fn row_text(row: &Node) -> String {
    let mut out = String::new();
    collect_text(row, &mut out);
    out
}
