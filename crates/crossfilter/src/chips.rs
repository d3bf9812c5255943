//! Clear affordance: one small chip per filtered section, showing the active
//! value with a clear control. Chips are injected markup; host re-renders may
//! destroy them at any time, so the registry is revalidated against the tree
//! and stale entries are rebuilt on the next pass.

use crate::config::Section;
use dom::builder::{IdAllocator, elem_with, text};
use dom::{Id, Node, find_node_by_id, insert_first_child, max_id, remove_elements_with_class,
    remove_node_by_id};
use std::collections::HashMap;

/// Marker class carried by every injected chip root.
pub const CHIP_CLASS: &str = "cf-chip";

#[derive(Clone, Debug)]
struct Chip {
    root: Id,
    button: Id,
    label: String,
}

/// Registry of live chips, keyed by section. At most one chip per section.
#[derive(Clone, Debug, Default)]
pub struct ChipRegistry {
    chips: HashMap<Section, Chip>,
}

impl ChipRegistry {
    /// Show (or refresh) the chip for a section inside `holder`. Any previous
    /// chip for the section is replaced, so the label always reflects the
    /// most recently applied value.
    pub fn show(
        &mut self,
        dom: &mut Node,
        ids: &mut IdAllocator,
        holder: Id,
        section: Section,
        label: &str,
    ) {
        if let Some(prev) = self.chips.remove(&section) {
            remove_node_by_id(dom, prev.root);
        }

        ids.bump_past(max_id(dom));
        let root = ids.next_id();
        let button = ids.next_id();
        let chip = elem_with(
            root.0,
            "div",
            vec![("class", Some(CHIP_CLASS))],
            vec![
                text(ids.next_id().0, "Filtered by: "),
                dom::builder::elem(ids.next_id().0, "strong", vec![text(ids.next_id().0, label)]),
                text(ids.next_id().0, " "),
                elem_with(
                    button.0,
                    "button",
                    vec![("type", Some("button"))],
                    vec![text(ids.next_id().0, "Clear")],
                ),
            ],
        );

        if insert_first_child(dom, holder, chip) {
            self.chips.insert(
                section,
                Chip {
                    root,
                    button,
                    label: label.to_string(),
                },
            );
        }
    }

    /// If `target` is a live chip's clear button, return its section and
    /// label. Entries whose chip node no longer exists are ignored.
    pub fn button_target(&self, dom: &Node, target: Id) -> Option<(Section, String)> {
        self.chips
            .iter()
            .find(|(_, chip)| chip.button == target && find_node_by_id(dom, chip.root).is_some())
            .map(|(section, chip)| (*section, chip.label.clone()))
    }

    /// The label currently shown for a section, if its chip is still alive.
    pub fn label(&self, section: Section) -> Option<&str> {
        self.chips.get(&section).map(|c| c.label.as_str())
    }

    /// Remove one section's chip (node and registry entry).
    pub fn remove(&mut self, dom: &mut Node, section: Section) {
        if let Some(chip) = self.chips.remove(&section) {
            remove_node_by_id(dom, chip.root);
        }
    }

    /// Remove every chip node in the tree, registered or stale, and clear the
    /// registry. Returns the number of removed chip nodes.
    pub fn clear_all(&mut self, dom: &mut Node) -> usize {
        self.chips.clear();
        remove_elements_with_class(dom, CHIP_CLASS)
    }
}
