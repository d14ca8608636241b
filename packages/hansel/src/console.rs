//! Diagnostics for unregistered names
//!
//! A marker naming a callback that is not in the registry is not an error.
//! It produces one [`Diagnostic`] per occurrence, handed to the console of the
//! node's document when the host has one, and dropped silently otherwise.

use std::fmt;

use crate::dom::Dom;

/// What kind of name could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Name from an enhancer marker
    MissingEnhancer,
    /// Name from a handler marker
    MissingHandler,
}

impl DiagnosticKind {
    /// printf-style format handed to consoles, with `%s` for the name and `%o` for the node.
    pub fn format(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingEnhancer => "Non-existing enhancer: \"%s\" on %o",
            DiagnosticKind::MissingHandler => "Non-existing handler: \"%s\" on %o",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingEnhancer => "enhancer",
            DiagnosticKind::MissingHandler => "handler",
        }
    }
}

/// An unresolved marker name on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<N> {
    pub kind: DiagnosticKind,
    /// The name as written in the marker, after trimming
    pub name: String,
    /// Node carrying the marker
    pub node: N,
}

impl<N> Diagnostic<N> {
    pub fn missing_enhancer(name: impl Into<String>, node: N) -> Self {
        Self {
            kind: DiagnosticKind::MissingEnhancer,
            name: name.into(),
            node,
        }
    }

    pub fn missing_handler(name: impl Into<String>, node: N) -> Self {
        Self {
            kind: DiagnosticKind::MissingHandler,
            name: name.into(),
            node,
        }
    }

    /// Format string for printf-style consoles.
    pub fn format(&self) -> &'static str {
        self.kind.format()
    }
}

impl<N: fmt::Debug> fmt::Display for Diagnostic<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Non-existing {}: \"{}\" on {:?}",
            self.kind.label(),
            self.name,
            self.node
        )
    }
}

/// Warn-style sink for diagnostics.
pub trait Console<N> {
    fn warn(&self, diagnostic: &Diagnostic<N>);
}

/// Console reporting diagnostics as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl<N: fmt::Debug> Console<N> for TracingConsole {
    fn warn(&self, diagnostic: &Diagnostic<N>) {
        tracing::warn!(
            kind = diagnostic.kind.label(),
            name = %diagnostic.name,
            node = ?diagnostic.node,
            "{}",
            diagnostic
        );
    }
}

/// Route a diagnostic to the console of the node's document.
pub(crate) fn warn<D: Dom>(dom: &D, diagnostic: Diagnostic<D::Node>) {
    tracing::debug!(
        kind = diagnostic.kind.label(),
        name = %diagnostic.name,
        node = ?diagnostic.node,
        "Unresolved marker name"
    );
    if let Some(console) = dom.console(&diagnostic.node) {
        console.warn(&diagnostic);
    }
}
