use crate::{Id, Node};

/// First attribute value with this name (ASCII-case-insensitive key match).
pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Whether the element's `class` attribute contains `class_name` as one of
/// its whitespace-separated tokens.
pub fn has_class(node: &Node, class_name: &str) -> bool {
    attr(node, "class")
        .map(|v| v.split_whitespace().any(|t| t == class_name))
        .unwrap_or(false)
}

/// Append a class token if not already present. No-op on non-elements.
pub fn add_class(node: &mut Node, class_name: &str) {
    if has_class(node, class_name) {
        return;
    }
    let Node::Element { attributes, .. } = node else {
        return;
    };
    if let Some((_, v)) = attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case("class")) {
        let mut next = v.take().unwrap_or_default();
        if !next.is_empty() {
            next.push(' ');
        }
        next.push_str(class_name);
        *v = Some(next);
    } else {
        attributes.push(("class".to_string(), Some(class_name.to_string())));
    }
}

/// Set (or replace) an attribute value. No-op on non-elements.
pub fn set_attr(node: &mut Node, name: &str, value: &str) {
    let Node::Element { attributes, .. } = node else {
        return;
    };
    if let Some((_, v)) = attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        *v = Some(value.to_string());
    } else {
        attributes.push((name.to_string(), Some(value.to_string())));
    }
}

/// Concatenated text content of the node and all its descendants
/// (comments excluded), in document order. No whitespace normalization.
pub fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text { text, .. } => out.push_str(text),
        Node::Element { children, .. } | Node::Document { children, .. } => {
            for c in children {
                collect_text(c, out);
            }
        }
        Node::Comment { .. } => {}
    }
}

/// Descendant elements with the given tag name, in document order.
/// The root itself is not considered.
pub fn descendant_elements<'a>(node: &'a Node, tag: &str, out: &mut Vec<&'a Node>) {
    for c in node.children() {
        if c.is_element_named(tag) {
            out.push(c);
        }
        descendant_elements(c, tag, out);
    }
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    for c in node.children() {
        if let Some(found) = find_node_by_id(c, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    if let Some(children) = node.children_mut() {
        for c in children {
            if let Some(found) = find_node_by_id_mut(c, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Largest id anywhere in the tree. Hosts assign ids densely from 1;
/// injected nodes must allocate above this.
pub fn max_id(node: &Node) -> Id {
    let mut best = node.id();
    for c in node.children() {
        let m = max_id(c);
        if m.0 > best.0 {
            best = m;
        }
    }
    best
}

/// Insert `child` as the first child of the node with id `parent`.
/// Returns false if the parent is missing or cannot hold children.
pub fn insert_first_child(root: &mut Node, parent: Id, child: Node) -> bool {
    let Some(node) = find_node_by_id_mut(root, parent) else {
        return false;
    };
    let Some(children) = node.children_mut() else {
        return false;
    };
    children.insert(0, child);
    true
}

/// Detach and return the node with the given id, wherever it sits.
pub fn remove_node_by_id(root: &mut Node, id: Id) -> Option<Node> {
    let children = root.children_mut()?;
    if let Some(pos) = children.iter().position(|c| c.id() == id) {
        return Some(children.remove(pos));
    }
    for c in children {
        if let Some(removed) = remove_node_by_id(c, id) {
            return Some(removed);
        }
    }
    None
}

/// Remove every element carrying the given class token, anywhere in the
/// tree. Returns the number of removed subtrees.
pub fn remove_elements_with_class(root: &mut Node, class_name: &str) -> usize {
    let mut removed = 0;
    if let Some(children) = root.children_mut() {
        children.retain(|c| {
            if has_class(c, class_name) {
                removed += 1;
                false
            } else {
                true
            }
        });
        for c in children {
            removed += remove_elements_with_class(c, class_name);
        }
    }
    removed
}
