//! Runtime options for delegated click handling
//!
//! Both option records deserialize from the camelCase shape used by callers
//! configuring Hansel from JSON or JavaScript:
//!
//! ```json
//! { "allowModifierKeys": true }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_ALLOW_MODIFIER_KEYS;

/// Options for one [`handle`](crate::handle::handle) installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandleOptions {
    /// Fire handlers on links even when the click carries modifier keys
    pub allow_modifier_keys: bool,
}

impl Default for HandleOptions {
    fn default() -> Self {
        Self {
            allow_modifier_keys: DEFAULT_ALLOW_MODIFIER_KEYS,
        }
    }
}

impl HandleOptions {
    /// Installation that lets handlers fire for modified clicks on links.
    pub fn allowing_modifier_keys() -> Self {
        Self {
            allow_modifier_keys: true,
        }
    }
}

/// Per-entry overrides on a handler registration.
///
/// Unset fields fall back to the installation's [`HandleOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandlerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_modifier_keys: Option<bool>,
}

impl HandlerOptions {
    pub fn allow_modifier_keys(allow: bool) -> Self {
        Self {
            allow_modifier_keys: Some(allow),
        }
    }

    /// Effective options for this entry under `installation`.
    pub fn resolve(&self, installation: HandleOptions) -> HandleOptions {
        HandleOptions {
            allow_modifier_keys: self
                .allow_modifier_keys
                .unwrap_or(installation.allow_modifier_keys),
        }
    }
}
