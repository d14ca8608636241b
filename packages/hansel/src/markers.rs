//! Marker attribute parsing and element predicates

use crate::config::{ANCHOR_TAG, NAME_SEPARATOR};
use crate::dom::Dom;

/// Names listed in a marker value, in order.
///
/// Splits on commas and trims whitespace around each name. Nothing is
/// filtered or deduplicated: `"foo,bar,foo"` yields `foo` twice, and a
/// trailing comma yields an empty name.
///
/// ```
/// let names: Vec<_> = hansel::marker_names(" save , track,save").collect();
/// assert_eq!(names, ["save", "track", "save"]);
/// ```
pub fn marker_names(value: &str) -> impl Iterator<Item = &str> {
    value.split(NAME_SEPARATOR).map(str::trim)
}

/// Read a marker off `node`, `None` when absent or empty.
///
/// A whitespace-only value is not empty and still yields one (blank) name.
pub fn marker_value<D: Dom>(dom: &D, node: &D::Node, attribute: &str) -> Option<String> {
    dom.attribute(node, attribute).filter(|value| !value.is_empty())
}

/// Whether `node` is a hyperlink element.
pub fn is_anchor<D: Dom>(dom: &D, node: &D::Node) -> bool {
    dom.local_name(node)
        .is_some_and(|name| name.eq_ignore_ascii_case(ANCHOR_TAG))
}
