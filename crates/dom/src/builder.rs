//! Node constructors.
//!
//! Used by the engine to inject affordance markup and by tests to assemble
//! fixture documents without a parser.

use crate::{Id, Node};

pub fn doc(children: Vec<Node>) -> Node {
    Node::Document { id: Id(0), children }
}

pub fn elem(id: u32, name: &str, children: Vec<Node>) -> Node {
    elem_with(id, name, Vec::new(), children)
}

pub fn elem_with(
    id: u32,
    name: &str,
    attributes: Vec<(&str, Option<&str>)>,
    children: Vec<Node>,
) -> Node {
    Node::Element {
        id: Id(id),
        name: name.to_string(),
        attributes: attributes
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect(),
        children,
    }
}

pub fn text(id: u32, text: &str) -> Node {
    Node::Text {
        id: Id(id),
        text: text.to_string(),
    }
}

/// Monotonic id source for nodes this system injects itself.
///
/// Host-assigned ids are dense and low; call [`IdAllocator::bump_past`] with
/// the tree's current maximum before allocating so injected ids never collide
/// with nodes a re-render may still produce.
#[derive(Clone, Copy, Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new(start: u32) -> Self {
        Self { next: start }
    }

    pub fn next_id(&mut self) -> Id {
        let id = Id(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    pub fn bump_past(&mut self, id: Id) {
        if id.0 >= self.next {
            self.next = id.0 + 1;
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(1)
    }
}
