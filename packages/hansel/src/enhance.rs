//! Enhancement
//!
//! Runs enhancer callbacks once against every element carrying the enhancer
//! marker in a subtree.
//!
//! # Example
//!
//! ```
//! use hansel::{enhance, Document, Enhancers, NodeId};
//! use std::cell::Cell;
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! doc.append_element(body, "div", &[("data-enhancer", "carousel, lazy")])?;
//!
//! let started = Cell::new(0);
//! let enhancers = Enhancers::new()
//!     .with("carousel", |_: &NodeId| started.set(started.get() + 1))
//!     .with("lazy", |_: &NodeId| started.set(started.get() + 1));
//!
//! let enhanced = enhance(&doc, &body, &enhancers);
//! assert_eq!(enhanced.len(), 1);
//! assert_eq!(started.get(), 2);
//! # Ok::<(), hansel::HanselError>(())
//! ```

use crate::config::ENHANCER_ATTRIBUTE;
use crate::console::{warn, Diagnostic};
use crate::dom::Dom;
use crate::markers::{marker_names, marker_value};
use crate::registry::Enhancers;

/// Enhance `root` and its marked descendants.
///
/// The root takes part only when it is an element carrying the marker;
/// fragments never do, although their descendants are scanned. Candidates are
/// processed in document order and every name is invoked once per occurrence.
/// Unregistered names are reported to the node's console and skipped.
///
/// Nothing is remembered between calls: enhancing the same tree twice runs
/// the enhancers twice.
///
/// # Returns
/// Every candidate node, in the order processed. Empty when `enhancers` is.
pub fn enhance<D: Dom>(
    dom: &D,
    root: &D::Node,
    enhancers: &Enhancers<'_, D::Node>,
) -> Vec<D::Node> {
    if enhancers.is_empty() {
        tracing::debug!("No enhancers registered, skipping enhancement");
        return Vec::new();
    }

    let mut candidates = Vec::new();
    if dom.supports_attributes(root) && dom.has_attribute(root, ENHANCER_ATTRIBUTE) {
        candidates.push(root.clone());
    }
    candidates.extend(dom.query_attribute_all(root, ENHANCER_ATTRIBUTE));

    tracing::debug!(
        root = ?root,
        candidates = candidates.len(),
        "Enhancing subtree"
    );

    for element in &candidates {
        let Some(collection) = marker_value(dom, element, ENHANCER_ATTRIBUTE) else {
            continue;
        };
        for name in marker_names(&collection) {
            match enhancers.get(name) {
                Some(enhancer) => enhancer(element),
                None => warn(dom, Diagnostic::missing_enhancer(name, element.clone())),
            }
        }
    }

    candidates
}
