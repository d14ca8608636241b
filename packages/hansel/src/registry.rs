//! Name to callback registries
//!
//! [`Enhancers`] are borrowed for the duration of one
//! [`enhance`](crate::enhance::enhance) call, so their callbacks may capture
//! local state. [`Handlers`] are moved into the installed listener and live as
//! long as it does.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::options::HandlerOptions;

/// A registry value as supplied by a dynamically typed host.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryValue<F> {
    /// A bare callable
    Callback(F),
    /// A `{ fn, options }` record; `fn` may be missing or not callable
    Entry {
        callback: Option<F>,
        options: HandlerOptions,
    },
    /// Anything else
    Uncallable,
}

impl<F> RegistryValue<F> {
    /// Convert the callable, keeping the shape.
    pub fn map<G>(self, f: impl FnOnce(F) -> G) -> RegistryValue<G> {
        match self {
            Self::Callback(callback) => RegistryValue::Callback(f(callback)),
            Self::Entry { callback, options } => RegistryValue::Entry {
                callback: callback.map(f),
                options,
            },
            Self::Uncallable => RegistryValue::Uncallable,
        }
    }
}

/// Enhancer callback, invoked with the marked node.
pub type EnhancerFn<'a, N> = Box<dyn Fn(&N) + 'a>;

/// Handler callback, invoked with the marked node and the click event.
pub type HandlerFn<N, E> = Rc<dyn Fn(&N, &E)>;

/// Enhancer registry.
///
/// A name may be registered without a callback; looking it up then misses
/// like an unknown name, but the registry still counts as non-empty.
pub struct Enhancers<'a, N> {
    entries: HashMap<String, Option<EnhancerFn<'a, N>>>,
}

impl<'a, N> Enhancers<'a, N> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build from host-supplied values; anything but a bare callback is kept
    /// as an entry without one.
    pub fn from_values<F>(values: impl IntoIterator<Item = (String, RegistryValue<F>)>) -> Self
    where
        F: Fn(&N) + 'a,
    {
        let mut enhancers = Self::new();
        for (name, value) in values {
            match value {
                RegistryValue::Callback(enhancer) => enhancers.insert(name, enhancer),
                RegistryValue::Entry { .. } | RegistryValue::Uncallable => {
                    enhancers.insert_without_callback(name)
                }
            }
        }
        enhancers
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, enhancer: impl Fn(&N) + 'a) -> Self {
        self.insert(name, enhancer);
        self
    }

    /// Register `enhancer` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, enhancer: impl Fn(&N) + 'a) {
        self.entries.insert(name.into(), Some(Box::new(enhancer)));
    }

    /// Register `name` with nothing to call.
    pub fn insert_without_callback(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), None);
    }

    /// Callback registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&EnhancerFn<'a, N>> {
        self.entries.get(name).and_then(Option::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N> Default for Enhancers<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for Enhancers<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.keys().collect();
        names.sort();
        f.debug_struct("Enhancers").field("names", &names).finish()
    }
}

/// One handler registration: a callback plus per-entry options.
///
/// The callback is optional so that hosts can register options for a name
/// whose callback could not be resolved; such an entry behaves like a
/// missing one when the click is not suppressed.
pub struct HandlerEntry<N, E> {
    callback: Option<HandlerFn<N, E>>,
    options: HandlerOptions,
}

impl<N, E> HandlerEntry<N, E> {
    /// Bare callback with default options.
    pub fn new(callback: impl Fn(&N, &E) + 'static) -> Self {
        Self::with_options(callback, HandlerOptions::default())
    }

    /// Callback with per-entry options.
    pub fn with_options(callback: impl Fn(&N, &E) + 'static, options: HandlerOptions) -> Self {
        Self {
            callback: Some(Rc::new(callback)),
            options,
        }
    }

    /// Options without a usable callback.
    pub fn without_callback(options: HandlerOptions) -> Self {
        Self {
            callback: None,
            options,
        }
    }

    pub fn callback(&self) -> Option<&HandlerFn<N, E>> {
        self.callback.as_ref()
    }

    pub fn options(&self) -> HandlerOptions {
        self.options
    }
}

impl<N, E> Clone for HandlerEntry<N, E> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            options: self.options,
        }
    }
}

impl<N, E> fmt::Debug for HandlerEntry<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("callback", &self.callback.as_ref().map(|_| "<fn>"))
            .field("options", &self.options)
            .finish()
    }
}

/// Handler registry.
pub struct Handlers<N, E> {
    entries: HashMap<String, HandlerEntry<N, E>>,
}

impl<N, E> Handlers<N, E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build from host-supplied values. Every name is kept; values without a
    /// usable callback miss at click time.
    pub fn from_values<F>(values: impl IntoIterator<Item = (String, RegistryValue<F>)>) -> Self
    where
        F: Fn(&N, &E) + 'static,
    {
        let mut handlers = Self::new();
        for (name, value) in values {
            let entry = match value {
                RegistryValue::Callback(callback) => HandlerEntry::new(callback),
                RegistryValue::Entry {
                    callback: Some(callback),
                    options,
                } => HandlerEntry::with_options(callback, options),
                RegistryValue::Entry {
                    callback: None,
                    options,
                } => HandlerEntry::without_callback(options),
                RegistryValue::Uncallable => {
                    HandlerEntry::without_callback(HandlerOptions::default())
                }
            };
            handlers.insert(name, entry);
        }
        handlers
    }

    /// Register a bare callback under `name`.
    pub fn on(mut self, name: impl Into<String>, callback: impl Fn(&N, &E) + 'static) -> Self {
        self.insert(name, HandlerEntry::new(callback));
        self
    }

    /// Register a callback with per-entry options under `name`.
    pub fn on_with_options(
        mut self,
        name: impl Into<String>,
        options: HandlerOptions,
        callback: impl Fn(&N, &E) + 'static,
    ) -> Self {
        self.insert(name, HandlerEntry::with_options(callback, options));
        self
    }

    /// Register `entry` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: HandlerEntry<N, E>) {
        self.entries.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&HandlerEntry<N, E>> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, E> Default for Handlers<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Clone for Handlers<N, E> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<N, E> fmt::Debug for Handlers<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        f.debug_map().entries(entries).finish()
    }
}
