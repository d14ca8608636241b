//! World struct for Cucumber BDD tests
//!
//! Contains the test state that persists across steps in a scenario.

use cucumber::World;
use hansel::{
    enhance, handle, Click, Console, Diagnostic, Document, Enhancers, HandleOptions,
    HandlerOptions, Handlers, NodeId,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::helpers::page_builder::NamedNodes;

/// One callback invocation observed during a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: String,
    pub node: NodeId,
    /// Click target, `None` for enhancers
    pub target: Option<NodeId>,
}

/// Console keeping every diagnostic for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole(Rc<RefCell<Vec<Diagnostic<NodeId>>>>);

impl RecordingConsole {
    pub fn diagnostics(&self) -> Vec<Diagnostic<NodeId>> {
        self.0.borrow().clone()
    }
}

impl Console<NodeId> for RecordingConsole {
    fn warn(&self, diagnostic: &Diagnostic<NodeId>) {
        self.0.borrow_mut().push(diagnostic.clone());
    }
}

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(World)]
#[world(init = Self::new)]
pub struct HanselWorld {
    /// Document the scenario builds its page in
    pub doc: Document,
    /// Elements by their scenario id
    pub names: NamedNodes,
    /// Console attached to the document
    pub console: RecordingConsole,
    /// Every callback invocation, in order
    pub calls: Rc<RefCell<Vec<Call>>>,
    /// Handler names to register when installing
    pub handler_names: Vec<String>,
    /// Per-entry options by handler name
    pub handler_options: HashMap<String, HandlerOptions>,
    /// Enhancer names to register when enhancing
    pub enhancer_names: Vec<String>,
    /// Result of the last enhancement
    pub enhanced: Option<Vec<NodeId>>,
}

impl fmt::Debug for HanselWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HanselWorld")
            .field("doc", &self.doc)
            .field("names", &self.names)
            .field("calls", &self.calls.borrow())
            .field("diagnostics", &self.console.diagnostics())
            .field("handler_names", &self.handler_names)
            .field("enhancer_names", &self.enhancer_names)
            .field("enhanced", &self.enhanced)
            .finish()
    }
}

impl Default for HanselWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl HanselWorld {
    /// Create a new world with an empty page and a recording console.
    pub fn new() -> Self {
        let console = RecordingConsole::default();
        let doc = Document::new().with_console(console.clone());
        let mut names = NamedNodes::default();
        names.insert("html", doc.document_element());
        names.insert("body", doc.body());

        Self {
            doc,
            names,
            console,
            calls: Rc::new(RefCell::new(Vec::new())),
            handler_names: Vec::new(),
            handler_options: HashMap::new(),
            enhancer_names: Vec::new(),
            enhanced: None,
        }
    }

    /// Handlers recording into `calls`, with any per-entry options applied.
    pub fn build_handlers(&self) -> Handlers<NodeId, Click> {
        let mut handlers = Handlers::new();
        for name in &self.handler_names {
            let calls = Rc::clone(&self.calls);
            let recorded = name.clone();
            let options = self.handler_options.get(name).copied().unwrap_or_default();
            handlers = handlers.on_with_options(
                name.clone(),
                options,
                move |node: &NodeId, click: &Click| {
                    calls.borrow_mut().push(Call {
                        name: recorded.clone(),
                        node: *node,
                        target: Some(click.target),
                    })
                },
            );
        }
        handlers
    }

    /// Install the registered handlers on the named root.
    pub fn install_handlers(&mut self, root: &str, options: HandleOptions) {
        let root = self.names.node(root);
        let handlers = self.build_handlers();
        if let Err(e) = handle(&self.doc, &root, handlers, options) {
            panic!("Failed to install handlers: {e}");
        }
    }

    /// Enhance the named root with the registered enhancers.
    pub fn run_enhance(&mut self, root: &str) {
        let root = self.names.node(root);
        let calls = &self.calls;
        let enhancers = self
            .enhancer_names
            .iter()
            .fold(Enhancers::new(), |enhancers, name| {
                let recorded = name.clone();
                enhancers.with(name.clone(), move |node: &NodeId| {
                    calls.borrow_mut().push(Call {
                        name: recorded.clone(),
                        node: *node,
                        target: None,
                    })
                })
            });
        self.enhanced = Some(enhance(&self.doc, &root, &enhancers));
    }

    /// Calls rendered as `name@node`, comma separated.
    pub fn rendered_calls(&self) -> String {
        self.calls
            .borrow()
            .iter()
            .map(|call| format!("{}@{}", call.name, self.names.name_of(call.node)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::HanselWorld;

    #[test]
    fn test_world_initialization() {
        let world = HanselWorld::new();
        assert_eq!(world.names.get("body"), Some(world.doc.body()));
        assert!(world.calls.borrow().is_empty());
    }
}
