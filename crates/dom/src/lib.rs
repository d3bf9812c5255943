//! # dom
//!
//! The document substrate the cross-filter engine operates on:
//! - [`Node`]: an owned-children document tree (`Document` / `Element` / `Text` / `Comment`)
//! - [`Id`]: a stable per-node identifier assigned by the host
//! - query helpers for attributes, classes, text content, and id lookup
//! - [`builder`]: node constructors and an [`IdAllocator`] for injected nodes
//! - [`events`]: the host page's native notification surface ([`DomEvent`], [`EventSink`])
//!
//! This crate deliberately knows nothing about sections, tables, or filters;
//! it is the neutral structural layer everything above reads and mutates.

pub mod builder;
pub mod events;
pub mod query;

mod types;

pub use builder::IdAllocator;
pub use events::{DomEvent, DomEventKind, EventSink, Key};
pub use query::{
    add_class, attr, collect_text, descendant_elements, find_node_by_id, find_node_by_id_mut,
    has_attr, has_class, insert_first_child, max_id, remove_elements_with_class,
    remove_node_by_id, set_attr,
};
pub use types::{Id, Node, NodeId};
