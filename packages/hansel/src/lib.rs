//! Hansel
//!
//! Declarative DOM behaviour through two marker attributes.
//! This library provides functionality for:
//! - Enhancing elements marked with `data-enhancer` by running named callbacks once
//! - Delegating clicks on elements marked with `data-handler` to named callbacks
//!   through a single listener on a root
//! - Leaving modified clicks on links (new tab, new window) to the browser
//!
//! The host tree is abstracted by the [`Dom`] trait. [`Document`] is an
//! in-memory implementation; with the `wasm` feature, `WebDom` runs against the
//! browser DOM through `web-sys`.
//!
//! # Example
//!
//! ```
//! use hansel::{enhance, handle, Click, Document, Enhancers, HandleOptions, Handlers, NodeId};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let menu = doc.append_element(body, "nav", &[("data-enhancer", "menu")])?;
//! let toggle = doc.append_element(menu, "button", &[("data-handler", "toggleMenu")])?;
//!
//! let enhancers = Enhancers::new().with("menu", |nav: &NodeId| println!("enhancing {nav}"));
//! enhance(&doc, &body, &enhancers);
//!
//! let handlers = Handlers::new().on("toggleMenu", |button: &NodeId, click: &Click| {
//!     println!("{button} clicked via {}", click.target);
//! });
//! handle(&doc, &body, handlers, HandleOptions::default())?;
//!
//! doc.click(toggle)?;
//! # Ok::<(), hansel::HanselError>(())
//! ```

pub mod ancestor;
pub mod config;
pub mod console;
pub mod document;
pub mod dom;
pub mod enhance;
pub mod error;
pub mod handle;
pub mod markers;
pub mod options;
pub mod registry;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
pub use ancestor::{find_ancestor, find_element_with_handler};
pub use config::{ENHANCER_ATTRIBUTE, HANDLER_ATTRIBUTE};
pub use console::{Console, Diagnostic, DiagnosticKind, TracingConsole};
pub use document::{Click, Document, NodeId, NodeKind};
pub use dom::{ClickEvent, Dom, Listener, Modifiers};
pub use enhance::enhance;
pub use error::{HanselError, Result};
pub use handle::{dispatch, handle};
pub use markers::{is_anchor, marker_names, marker_value};
pub use options::{HandleOptions, HandlerOptions};
pub use registry::{EnhancerFn, Enhancers, HandlerEntry, HandlerFn, Handlers, RegistryValue};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
