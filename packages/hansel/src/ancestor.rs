//! Ancestor resolution
//!
//! Walks from a node towards the top of its hierarchy and returns the nearest
//! node (the start node included) satisfying a predicate.

use crate::config::HANDLER_ATTRIBUTE;
use crate::dom::Dom;

/// Nearest node from `start` outwards for which `predicate` holds.
///
/// The walk stops without a match at the document sentinel or when a node has
/// no parent (detached subtrees, fragments).
pub fn find_ancestor<D, P>(dom: &D, start: &D::Node, mut predicate: P) -> Option<D::Node>
where
    D: Dom,
    P: FnMut(&D::Node) -> bool,
{
    let mut current = Some(start.clone());
    while let Some(node) = current {
        if dom.is_document(&node) {
            return None;
        }
        if predicate(&node) {
            return Some(node);
        }
        current = dom.parent_node(&node);
    }
    None
}

/// Nearest node from `start` outwards carrying the handler marker.
pub fn find_element_with_handler<D: Dom>(dom: &D, start: &D::Node) -> Option<D::Node> {
    find_ancestor(dom, start, |node: &D::Node| dom.has_attribute(node, HANDLER_ATTRIBUTE))
}
