//! Host DOM abstraction
//!
//! Hansel never owns a tree. Everything it needs from the host is expressed by
//! the [`Dom`] and [`ClickEvent`] traits:
//!
//! - reading parents, attributes and local names
//! - scanning a subtree for elements carrying an attribute
//! - finding the console associated with a node's document
//! - installing a click listener on a node
//!
//! Two hosts ship with the crate: the in-memory [`Document`](crate::document::Document)
//! and, behind the `wasm` feature, `WebDom` over `web-sys`.

use std::fmt;
use std::rc::Rc;

use crate::console::Console;
use crate::error::Result;

/// Delegated click listener as stored by a host.
///
/// Receives the host itself so the listener can walk the tree when the event
/// fires, long after installation.
pub type Listener<D> = Rc<dyn Fn(&D, &<D as Dom>::Event)>;

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Meta / command key
    pub meta: bool,
    /// Control key
    pub ctrl: bool,
    /// Alt / option key
    pub alt: bool,
    /// Shift key
    pub shift: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Modifiers = Modifiers {
        meta: false,
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Only the meta key held.
    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }

    /// Only the control key held.
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    /// Only the alt key held.
    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    /// Only the shift key held.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// Whether any modifier is held.
    pub fn any(&self) -> bool {
        self.meta || self.ctrl || self.alt || self.shift
    }
}

/// A click as seen by the delegated listener.
pub trait ClickEvent {
    /// Node type of the host tree
    type Node;

    /// The node the click originated from, if it is part of the tree.
    fn target_node(&self) -> Option<Self::Node>;

    /// Modifier keys held during the click.
    fn modifiers(&self) -> Modifiers;
}

/// Read access to a host tree plus listener installation.
pub trait Dom: Sized + 'static {
    /// Handle to a node of the tree. Cheap to clone.
    type Node: Clone + PartialEq + fmt::Debug + 'static;

    /// Click events dispatched by this host.
    type Event: ClickEvent<Node = Self::Node> + 'static;

    /// Parent of `node`, `None` at the top of a hierarchy.
    fn parent_node(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Whether `node` is the document sentinel above the document element.
    fn is_document(&self, node: &Self::Node) -> bool;

    /// Whether `node` can carry attributes at all.
    ///
    /// False for documents, fragments and text nodes.
    fn supports_attributes(&self, node: &Self::Node) -> bool;

    /// Value of attribute `name` on `node`.
    ///
    /// `None` when absent or when the node cannot carry attributes.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Whether `node` carries attribute `name`, regardless of its value.
    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Lowercase local name of an element, `None` for other node kinds.
    fn local_name(&self, node: &Self::Node) -> Option<String>;

    /// All descendants of `root` carrying attribute `name`, in document order.
    ///
    /// `root` itself is never part of the result.
    fn query_attribute_all(&self, root: &Self::Node, name: &str) -> Vec<Self::Node>;

    /// Console of the document owning `node`, if the host exposes one.
    fn console(&self, node: &Self::Node) -> Option<&dyn Console<Self::Node>>;

    /// Install `listener` for clicks reaching `target`.
    ///
    /// There is no way to remove it again.
    fn add_click_listener(&self, target: &Self::Node, listener: Listener<Self>) -> Result<()>;
}
