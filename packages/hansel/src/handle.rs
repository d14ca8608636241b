//! Delegated click handling
//!
//! [`handle`] installs one click listener on a root. When a click bubbles up
//! to it, the listener resolves the nearest ancestor of the target carrying
//! the handler marker and runs the handlers named there, left to right.
//!
//! Modified clicks (meta, ctrl, alt or shift) on links keep their native
//! behaviour unless modifier keys are allowed for the installation or for the
//! individual handler entry; the entry-level setting wins.

use std::rc::Rc;

use crate::ancestor::find_element_with_handler;
use crate::config::HANDLER_ATTRIBUTE;
use crate::console::{warn, Diagnostic};
use crate::dom::{ClickEvent, Dom};
use crate::error::Result;
use crate::markers::{is_anchor, marker_names, marker_value};
use crate::options::HandleOptions;
use crate::registry::Handlers;

/// Install a delegated click listener on `root`.
///
/// `handlers` is moved into the listener and lives as long as it does. With an
/// empty registry no listener is installed at all. Calling this twice on the
/// same root installs two listeners.
///
/// # Errors
/// Only when the host refuses the listener.
pub fn handle<D: Dom>(
    dom: &D,
    root: &D::Node,
    handlers: Handlers<D::Node, D::Event>,
    options: HandleOptions,
) -> Result<()> {
    if handlers.is_empty() {
        tracing::debug!(root = ?root, "No handlers registered, not installing listener");
        return Ok(());
    }

    tracing::debug!(
        root = ?root,
        handlers = handlers.len(),
        allow_modifier_keys = options.allow_modifier_keys,
        "Installing delegated click listener"
    );

    dom.add_click_listener(
        root,
        Rc::new(move |dom: &D, event: &D::Event| dispatch(dom, event, &handlers, options)),
    )
}

/// Run the handlers for one click that reached the root.
pub fn dispatch<D: Dom>(
    dom: &D,
    event: &D::Event,
    handlers: &Handlers<D::Node, D::Event>,
    options: HandleOptions,
) {
    let Some(target) = event.target_node() else {
        return;
    };
    let Some(trigger) = find_element_with_handler(dom, &target) else {
        tracing::trace!(click_target = ?target, "Click without handler ancestor");
        return;
    };
    let Some(collection) = marker_value(dom, &trigger, HANDLER_ATTRIBUTE) else {
        return;
    };

    let modified_link_click = is_anchor(dom, &trigger) && event.modifiers().any();

    for name in marker_names(&collection) {
        let entry = handlers.get(name);
        let effective = entry
            .map(|entry| entry.options().resolve(options))
            .unwrap_or(options);

        if modified_link_click && !effective.allow_modifier_keys {
            tracing::debug!(
                name,
                trigger = ?trigger,
                "Modified click on link, leaving it to the browser"
            );
            continue;
        }

        match entry.and_then(|entry| entry.callback()) {
            Some(callback) => callback(&trigger, event),
            None => warn(dom, Diagnostic::missing_handler(name, trigger.clone())),
        }
    }
}
