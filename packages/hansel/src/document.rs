//! In-memory document
//!
//! A small arena-backed DOM implementing [`Dom`] for native hosts, tests and
//! benches. It models what Hansel relies on and nothing more:
//!
//! - a document node above `<html>`, with `<body>` created up front
//! - elements with ordered, lowercase-named attributes
//! - detached fragments and text nodes
//! - click dispatch that bubbles from the target up to the document
//!
//! # Example
//!
//! ```
//! use hansel::{handle, Click, Document, HandleOptions, Handlers, NodeId};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let button = doc.append_element(body, "button", &[("data-handler", "save")])?;
//!
//! let handlers = Handlers::new().on("save", |node: &NodeId, _event: &Click| {
//!     println!("saving from {node}");
//! });
//! handle(&doc, &body, handlers, HandleOptions::default())?;
//!
//! doc.click(button)?;
//! # Ok::<(), hansel::HanselError>(())
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::console::Console;
use crate::dom::{ClickEvent, Dom, Listener, Modifiers};
use crate::error::{HanselError, Result};

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The sentinel above the document element
    Document,
    /// Element with its lowercase local name and attributes in insertion order
    Element {
        local_name: String,
        attributes: Vec<(String, String)>,
    },
    /// Attribute-less container, never attached to the document
    Fragment,
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A click dispatched through a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub target: NodeId,
    pub modifiers: Modifiers,
}

impl ClickEvent for Click {
    type Node = NodeId;

    fn target_node(&self) -> Option<NodeId> {
        Some(self.target)
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

/// Arena-backed document tree.
pub struct Document {
    nodes: Vec<NodeData>,
    listeners: RefCell<HashMap<NodeId, Vec<Listener<Document>>>>,
    console: Option<Box<dyn Console<NodeId>>>,
}

const DOCUMENT: NodeId = NodeId(0);
const DOCUMENT_ELEMENT: NodeId = NodeId(1);
const BODY: NodeId = NodeId(2);

impl Document {
    /// Empty document: `#document > html > body`, without a console.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            listeners: RefCell::new(HashMap::new()),
            console: None,
        };
        let document = doc.push_node(NodeKind::Document);
        let html = doc.push_node(Self::element_kind("html"));
        let body = doc.push_node(Self::element_kind("body"));
        doc.link(document, html);
        doc.link(html, body);
        doc
    }

    /// Attach a console receiving this document's diagnostics.
    pub fn with_console(mut self, console: impl Console<NodeId> + 'static) -> Self {
        self.set_console(console);
        self
    }

    pub fn set_console(&mut self, console: impl Console<NodeId> + 'static) {
        self.console = Some(Box::new(console));
    }

    /// The document sentinel at the top of the tree.
    pub fn root(&self) -> NodeId {
        DOCUMENT
    }

    /// The `<html>` element.
    pub fn document_element(&self) -> NodeId {
        DOCUMENT_ELEMENT
    }

    /// The `<body>` element.
    pub fn body(&self) -> NodeId {
        BODY
    }

    /// Number of nodes ever created, attached or not.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.nodes.get(node.0).map(|data| &data.kind)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|data| data.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|data| data.children.as_slice())
            .unwrap_or(&[])
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push_node(Self::element_kind(tag))
    }

    /// Create a detached, attribute-less fragment.
    pub fn create_fragment(&mut self) -> NodeId {
        self.push_node(NodeKind::Fragment)
    }

    /// Create an element with `attributes` and append it to `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> Result<NodeId> {
        self.ensure_can_have_children(parent)?;
        let element = self.create_element(tag);
        for (name, value) in attributes {
            self.set_attribute(element, name, value)?;
        }
        self.link(parent, element);
        Ok(element)
    }

    /// Create a text node and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId> {
        self.ensure_can_have_children(parent)?;
        let node = self.push_node(NodeKind::Text(text.to_string()));
        self.link(parent, node);
        Ok(node)
    }

    /// Move `child` (and its subtree) under `parent`, as its last child.
    ///
    /// Appending a fragment moves its children and leaves it empty. On error
    /// the tree is left unchanged.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.ensure_can_have_children(parent)?;
        let is_fragment = match self.kind(child) {
            None => return Err(HanselError::NodeNotFound(child)),
            Some(NodeKind::Document) => return Err(HanselError::DocumentNotAppendable),
            Some(kind) => matches!(kind, NodeKind::Fragment),
        };

        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(HanselError::HierarchyCycle { parent, child });
            }
            cursor = self.parent(node);
        }

        if is_fragment {
            for grandchild in std::mem::take(&mut self.nodes[child.0].children) {
                self.link(parent, grandchild);
            }
            return Ok(());
        }

        if let Some(old_parent) = self.parent(child) {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }
        self.link(parent, child);
        Ok(())
    }

    /// Set attribute `name` (lowercased) on an element.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        let attributes = self.attributes_mut(node)?;
        let name = name.to_ascii_lowercase();
        match attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((name, value.to_string())),
        }
        Ok(())
    }

    /// Remove attribute `name`; removing an absent attribute is not an error.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<()> {
        let name = name.to_ascii_lowercase();
        self.attributes_mut(node)?
            .retain(|(existing, _)| *existing != name);
        Ok(())
    }

    /// First element, in document order, whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(DOCUMENT)
            .into_iter()
            .find(|node| self.attribute_value(*node, "id") == Some(id))
    }

    /// Dispatch a click on `target`, bubbling up to the document.
    ///
    /// Listeners on each node of the path run in installation order. The
    /// listener list of a node is read when the event reaches it, so a
    /// listener installed from inside a callback sees the next click, not
    /// this one.
    pub fn dispatch_click(&self, target: NodeId, modifiers: Modifiers) -> Result<()> {
        if target.0 >= self.nodes.len() {
            return Err(HanselError::NodeNotFound(target));
        }
        let event = Click { target, modifiers };

        let mut current = Some(target);
        while let Some(node) = current {
            let listeners = self
                .listeners
                .borrow()
                .get(&node)
                .cloned()
                .unwrap_or_default();
            for listener in listeners {
                listener(self, &event);
            }
            current = self.parent(node);
        }
        Ok(())
    }

    /// Plain click without modifier keys.
    pub fn click(&self, target: NodeId) -> Result<()> {
        self.dispatch_click(target, Modifiers::NONE)
    }

    /// Number of click listeners installed on `node`.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.borrow().get(&node).map_or(0, Vec::len)
    }

    fn element_kind(tag: &str) -> NodeKind {
        NodeKind::Element {
            local_name: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
        }
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Both ids must be valid and `child` detached.
    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn ensure_can_have_children(&self, node: NodeId) -> Result<()> {
        match self.kind(node) {
            None => Err(HanselError::NodeNotFound(node)),
            Some(NodeKind::Text(_)) => Err(HanselError::ChildrenUnsupported(node)),
            Some(_) => Ok(()),
        }
    }

    fn attributes_mut(&mut self, node: NodeId) -> Result<&mut Vec<(String, String)>> {
        match self.nodes.get_mut(node.0).map(|data| &mut data.kind) {
            None => Err(HanselError::NodeNotFound(node)),
            Some(NodeKind::Element { attributes, .. }) => Ok(attributes),
            Some(_) => Err(HanselError::AttributesUnsupported(node)),
        }
    }

    fn attribute_value(&self, node: NodeId, name: &str) -> Option<&str> {
        match self.kind(node)? {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(existing, _)| existing == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Descendants of `root` in document order, `root` excluded.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            result.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        result
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners: usize = self.listeners.borrow().values().map(Vec::len).sum();
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("listeners", &listeners)
            .field("console", &self.console.is_some())
            .finish()
    }
}

impl Dom for Document {
    type Node = NodeId;
    type Event = Click;

    fn parent_node(&self, node: &NodeId) -> Option<NodeId> {
        self.parent(*node)
    }

    fn is_document(&self, node: &NodeId) -> bool {
        matches!(self.kind(*node), Some(NodeKind::Document))
    }

    fn supports_attributes(&self, node: &NodeId) -> bool {
        matches!(self.kind(*node), Some(NodeKind::Element { .. }))
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.attribute_value(*node, name).map(str::to_string)
    }

    fn local_name(&self, node: &NodeId) -> Option<String> {
        match self.kind(*node)? {
            NodeKind::Element { local_name, .. } => Some(local_name.clone()),
            _ => None,
        }
    }

    fn query_attribute_all(&self, root: &NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(*root)
            .into_iter()
            .filter(|node| self.attribute_value(*node, name).is_some())
            .collect()
    }

    fn console(&self, _node: &NodeId) -> Option<&dyn Console<NodeId>> {
        self.console.as_deref()
    }

    fn add_click_listener(&self, target: &NodeId, listener: Listener<Self>) -> Result<()> {
        if target.0 >= self.nodes.len() {
            return Err(HanselError::NodeNotFound(*target));
        }
        self.listeners
            .borrow_mut()
            .entry(*target)
            .or_default()
            .push(listener);
        Ok(())
    }
}
