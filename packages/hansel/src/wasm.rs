//! WASM bindings for Hansel
//!
//! Implements [`Dom`] over `web-sys` and exports `enhance` and `handle` to
//! JavaScript with the same call shapes as the plain JavaScript library.
//! Feature-gated behind the `wasm` feature flag.
//!
//! # Key Constraints
//!
//! - **Registries are plain objects**: enumerable own properties are read once,
//!   when `enhance`/`handle` is called. Later changes to the object are not seen.
//! - **Exceptions are not swallowed**: an exception thrown by a callback is
//!   rethrown, which stops the remaining names of that marker.
//! - **Diagnostics use the node's own window**: `ownerDocument.defaultView.console`,
//!   silently skipped when there is none.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { enhance, handle } from 'hansel';
//!
//! await init();
//!
//! enhance(document.documentElement, {
//!     carousel: (element) => new Carousel(element),
//! });
//!
//! handle(document.documentElement, {
//!     toggleMenu: (element, event) => event.preventDefault(),
//!     share: { fn: (element, event) => share(element), options: { allowModifierKeys: true } },
//! });
//! ```

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DocumentFragment, Element, MouseEvent, Node, NodeList};

use crate::config::CLICK_EVENT;
use crate::console::{Console, Diagnostic};
use crate::dom::{ClickEvent, Dom, Listener, Modifiers};
use crate::enhance::enhance as enhance_tree;
use crate::error::{HanselError, Result};
use crate::handle::handle as install_handler;
use crate::options::{HandleOptions, HandlerOptions};
use crate::registry::{Enhancers, Handlers, RegistryValue};

/// Property holding the callback of a `{ fn, options }` handler entry.
const ENTRY_CALLBACK_KEY: &str = "fn";

/// Property holding the options of a `{ fn, options }` handler entry.
const ENTRY_OPTIONS_KEY: &str = "options";

/// Helper to create consistent error JsValues
fn wasm_error(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}

impl From<HanselError> for JsValue {
    fn from(err: HanselError) -> Self {
        wasm_error(&err.to_string())
    }
}

/// Console of the window owning a node.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl Console<Node> for BrowserConsole {
    fn warn(&self, diagnostic: &Diagnostic<Node>) {
        let Some(console) = owner_console(&diagnostic.node) else {
            return;
        };
        let Some(warn) = Reflect::get(&console, &JsValue::from_str("warn"))
            .ok()
            .and_then(|warn| warn.dyn_into::<Function>().ok())
        else {
            return;
        };
        let args = Array::of3(
            &JsValue::from_str(diagnostic.format()),
            &JsValue::from_str(&diagnostic.name),
            diagnostic.node.as_ref(),
        );
        // A failing console must not break the caller
        let _ = warn.apply(&console, &args);
    }
}

fn owner_console(node: &Node) -> Option<JsValue> {
    let window = node.owner_document()?.default_view()?;
    let console = Reflect::get(window.as_ref(), &JsValue::from_str("console")).ok()?;
    (!console.is_undefined() && !console.is_null()).then_some(console)
}

/// Browser DOM host.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDom {
    console: BrowserConsole,
}

impl ClickEvent for MouseEvent {
    type Node = Node;

    fn target_node(&self) -> Option<Node> {
        web_sys::Event::target(self).and_then(|target| target.dyn_into::<Node>().ok())
    }

    fn modifiers(&self) -> Modifiers {
        Modifiers {
            meta: self.meta_key(),
            ctrl: self.ctrl_key(),
            alt: self.alt_key(),
            shift: self.shift_key(),
        }
    }
}

impl Dom for WebDom {
    type Node = Node;
    type Event = MouseEvent;

    fn parent_node(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn is_document(&self, node: &Node) -> bool {
        node.node_type() == Node::DOCUMENT_NODE
    }

    fn supports_attributes(&self, node: &Node) -> bool {
        node.dyn_ref::<Element>().is_some()
    }

    fn attribute(&self, node: &Node, name: &str) -> Option<String> {
        node.dyn_ref::<Element>()?.get_attribute(name)
    }

    fn local_name(&self, node: &Node) -> Option<String> {
        node.dyn_ref::<Element>().map(Element::local_name)
    }

    fn query_attribute_all(&self, root: &Node, name: &str) -> Vec<Node> {
        let selector = format!("[{name}]");
        let list = if let Some(element) = root.dyn_ref::<Element>() {
            element.query_selector_all(&selector)
        } else if let Some(document) = root.dyn_ref::<web_sys::Document>() {
            document.query_selector_all(&selector)
        } else if let Some(fragment) = root.dyn_ref::<DocumentFragment>() {
            fragment.query_selector_all(&selector)
        } else {
            return Vec::new();
        };
        list.map(|list| nodes(&list)).unwrap_or_default()
    }

    fn console(&self, _node: &Node) -> Option<&dyn Console<Node>> {
        Some(&self.console)
    }

    fn add_click_listener(&self, target: &Node, listener: Listener<Self>) -> Result<()> {
        let dom = *self;
        let closure =
            Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| listener(&dom, &event));
        target
            .add_event_listener_with_callback(CLICK_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|err| HanselError::ListenerRejected(format!("{err:?}")))?;
        // The listener lives as long as the page; there is no removal
        closure.forget();
        Ok(())
    }
}

fn nodes(list: &NodeList) -> Vec<Node> {
    (0..list.length()).filter_map(|index| list.item(index)).collect()
}

/// Own enumerable `[name, value]` pairs of a registry object.
fn registry_entries(registry: &JsValue) -> Vec<(String, JsValue)> {
    if registry.is_undefined() || registry.is_null() {
        return Vec::new();
    }
    let Some(object) = registry.dyn_ref::<Object>() else {
        return Vec::new();
    };
    Object::entries(object)
        .iter()
        .filter_map(|pair| {
            let pair = pair.dyn_into::<Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1)))
        })
        .collect()
}

/// Call a JS callback, rethrowing whatever it throws.
fn invoke(function: &Function, args: &Array) {
    if let Err(exception) = function.apply(&JsValue::UNDEFINED, args) {
        wasm_bindgen::throw_val(exception);
    }
}

/// Enhancer value: only a function is callable.
fn enhancer_value(value: JsValue) -> RegistryValue<Function> {
    match value.dyn_into::<Function>() {
        Ok(function) => RegistryValue::Callback(function),
        Err(_) => RegistryValue::Uncallable,
    }
}

/// Handler value: a function, a `{ fn, options }` record, or neither.
fn handler_value(
    name: &str,
    value: JsValue,
) -> std::result::Result<RegistryValue<Function>, JsValue> {
    if let Some(function) = value.dyn_ref::<Function>() {
        return Ok(RegistryValue::Callback(function.clone()));
    }
    if !value.is_object() {
        return Ok(RegistryValue::Uncallable);
    }

    let options_value = Reflect::get(&value, &JsValue::from_str(ENTRY_OPTIONS_KEY))?;
    let options: HandlerOptions = if options_value.is_undefined() || options_value.is_null() {
        HandlerOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options_value).map_err(|e| {
            wasm_error(&format!("Invalid options for handler \"{}\": {}", name, e))
        })?
    };
    let callback = Reflect::get(&value, &JsValue::from_str(ENTRY_CALLBACK_KEY))?
        .dyn_into::<Function>()
        .ok();
    Ok(RegistryValue::Entry { callback, options })
}

fn enhancer_callback(function: Function) -> impl Fn(&Node) + 'static {
    move |node: &Node| invoke(&function, &Array::of1(node.as_ref()))
}

fn handler_callback(function: Function) -> impl Fn(&Node, &MouseEvent) + 'static {
    move |node: &Node, event: &MouseEvent| {
        invoke(&function, &Array::of2(node.as_ref(), event.as_ref()))
    }
}

/// Build enhancers from `{ name: value }`; every own key is registered.
fn enhancers_from_js(registry: &JsValue) -> Enhancers<'static, Node> {
    Enhancers::from_values(
        registry_entries(registry)
            .into_iter()
            .map(|(name, value)| (name, enhancer_value(value).map(enhancer_callback))),
    )
}

/// Build handlers from `{ name: fn | { fn, options } | other }`.
fn handlers_from_js(
    registry: &JsValue,
) -> std::result::Result<Handlers<Node, MouseEvent>, JsValue> {
    let mut values = Vec::new();
    for (name, value) in registry_entries(registry) {
        let value = handler_value(&name, value)?.map(handler_callback);
        values.push((name, value));
    }
    Ok(Handlers::from_values(values))
}

/// Enhance `root` and its marked descendants.
///
/// # Returns
/// Array of the elements processed, in document order.
///
/// # Example (JavaScript)
/// ```javascript
/// const enhanced = enhance(document.documentElement, { lazy: loadImage });
/// console.log(`${enhanced.length} elements enhanced`);
/// ```
#[wasm_bindgen(js_name = enhance)]
pub fn enhance_js(root: Node, enhancers: JsValue) -> Array {
    let enhancers = enhancers_from_js(&enhancers);
    enhance_tree(&WebDom::default(), &root, &enhancers)
        .into_iter()
        .collect()
}

/// Install a delegated click listener on `root`.
///
/// # Arguments
/// * `root` - Element (or document) receiving bubbling clicks
/// * `handlers` - Object mapping names to functions or `{ fn, options }` records
/// * `options` - Optional `{ allowModifierKeys: boolean }`
///
/// # Example (JavaScript)
/// ```javascript
/// handle(document.documentElement, { save: (element, event) => save(element) });
/// ```
#[wasm_bindgen(js_name = handle)]
pub fn handle_js(root: Node, handlers: JsValue, options: JsValue) -> std::result::Result<(), JsValue> {
    let options: HandleOptions = if options.is_undefined() || options.is_null() {
        HandleOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| wasm_error(&format!("Invalid handle options: {}", e)))?
    };
    let handlers = handlers_from_js(&handlers)?;
    install_handler(&WebDom::default(), &root, handlers, options)?;
    Ok(())
}
