//! Configuration constants for Hansel
//!
//! Centralized values shared by enhancement and handling:
//! - Marker attribute names scanned on the host tree
//! - The event type the delegated listener is bound to
//! - The default modifier-key policy for links
//!
//! # Customization
//!
//! The attribute names are compile-time constants and cannot be changed per
//! call. Behaviour that is configurable at runtime lives in
//! [`HandleOptions`](crate::options::HandleOptions) and
//! [`HandlerOptions`](crate::options::HandlerOptions).

/// Attribute flagging an element for one-time enhancement callbacks.
///
/// Holds a comma-separated list of enhancer names, e.g. `data-enhancer="carousel, lazy"`.
pub const ENHANCER_ATTRIBUTE: &str = "data-enhancer";

/// Attribute flagging an element as a delegated click target.
///
/// Holds a comma-separated list of handler names, e.g. `data-handler="save"`.
pub const HANDLER_ATTRIBUTE: &str = "data-handler";

/// Event type the delegated listener is installed for.
pub const CLICK_EVENT: &str = "click";

/// Local name of hyperlink elements.
///
/// Modified clicks on these keep their native behaviour (new tab, new window)
/// unless modifier keys are explicitly allowed.
pub const ANCHOR_TAG: &str = "a";

/// Separator between names inside a marker attribute.
pub const NAME_SEPARATOR: char = ',';

/// Whether handlers fire for modified clicks on links when nothing says otherwise.
pub const DEFAULT_ALLOW_MODIFIER_KEYS: bool = false;
