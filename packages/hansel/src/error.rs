//! Error types for Hansel
//!
//! Marker problems (unknown names, empty markers, unmatched clicks) are never
//! errors; they are diagnostics at most. Errors only come from the host: the
//! in-memory document's building API and listener installation.

use thiserror::Error;

use crate::document::NodeId;

/// Main error type for host operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HanselError {
    /// Node id does not belong to the document
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Attributes can only be written to elements
    #[error("Node {0} cannot carry attributes")]
    AttributesUnsupported(NodeId),

    /// Text nodes cannot have children
    #[error("Node {0} cannot have children")]
    ChildrenUnsupported(NodeId),

    /// Appending would make a node its own ancestor
    #[error("Hierarchy cycle: {child} cannot be appended to {parent}")]
    HierarchyCycle { parent: NodeId, child: NodeId },

    /// The document node is the top of the hierarchy and cannot be moved
    #[error("The document node cannot be appended")]
    DocumentNotAppendable,

    /// The host refused to install the click listener
    #[error("Failed to install listener: {0}")]
    ListenerRejected(String),
}

/// Result type alias for host operations
pub type Result<T> = std::result::Result<T, HanselError>;
