//! Section location.
//!
//! Each section starts at a boundary anchor: an `a` element whose `href`
//! carries the page-part role marker and the section's part identifier. The
//! section's blocks are the `table` elements among the anchor's following
//! siblings, up to (exclusive) the next page-part anchor.

use dom::{Id, Node, attr};

/// Structural role marker carried by every section boundary anchor.
pub const PART_ROLE_MARKER: &str = "elem=pagepart";

/// Resolved boundary for one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionRef {
    /// The boundary anchor itself.
    pub anchor: Id,
    /// The anchor's parent; injected affordances go here.
    pub holder: Id,
}

fn is_part_anchor(node: &Node) -> bool {
    node.is_element_named("a")
        && attr(node, "href").is_some_and(|h| h.contains(PART_ROLE_MARKER))
}

fn is_anchor_for(node: &Node, part: u32) -> bool {
    is_part_anchor(node) && attr(node, "href").is_some_and(|h| h.contains(&format!("id={part}")))
}

/// Find the container holding this section's boundary anchor. Returns the
/// container and the anchor's child index within it.
fn find_holder<'a>(node: &'a Node, part: u32) -> Option<(&'a Node, usize)> {
    let children = node.children();
    for (i, c) in children.iter().enumerate() {
        if is_anchor_for(c, part) {
            return Some((node, i));
        }
    }
    for c in children {
        if let Some(found) = find_holder(c, part) {
            return Some(found);
        }
    }
    None
}

/// Locate a section's boundary. `None` means "section not found" and is a
/// no-op condition for callers, never an error.
pub fn locate(dom: &Node, part: u32) -> Option<SectionRef> {
    let (holder, idx) = find_holder(dom, part)?;
    Some(SectionRef {
        anchor: holder.children()[idx].id(),
        holder: holder.id(),
    })
}

/// The blocks contained in a section, in document order. Empty when the
/// section (or its anchor) is missing.
pub fn tables<'a>(dom: &'a Node, part: u32) -> Vec<&'a Node> {
    let Some((holder, idx)) = find_holder(dom, part) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for sib in &holder.children()[idx + 1..] {
        if !matches!(sib, Node::Element { .. }) {
            continue;
        }
        if is_part_anchor(sib) {
            break; // reached the next section
        }
        if sib.is_element_named("table") {
            out.push(sib);
        }
    }
    out
}
