//! When step definitions
//!
//! Steps that install handlers, click elements and run enhancement.

use cucumber::when;
use hansel::{HandleOptions, Modifiers};

use crate::world::HanselWorld;

fn parse_modifiers(keys: &str) -> Modifiers {
    keys.split(['+', ','])
        .map(str::trim)
        .fold(Modifiers::NONE, |modifiers, key| match key {
            "meta" => Modifiers {
                meta: true,
                ..modifiers
            },
            "ctrl" => Modifiers {
                ctrl: true,
                ..modifiers
            },
            "alt" => Modifiers {
                alt: true,
                ..modifiers
            },
            "shift" => Modifiers {
                shift: true,
                ..modifiers
            },
            other => panic!("Unknown modifier key: {other}"),
        })
}

// =============================================================================
// Handling steps
// =============================================================================

#[when(expr = "the handlers are installed on {string}")]
fn install(world: &mut HanselWorld, root: String) {
    world.install_handlers(&root, HandleOptions::default());
}

#[when(expr = "the handlers are installed on {string} allowing modifier keys")]
fn install_allowing_modifier_keys(world: &mut HanselWorld, root: String) {
    world.install_handlers(&root, HandleOptions::allowing_modifier_keys());
}

#[when(expr = "{string} is clicked")]
fn click(world: &mut HanselWorld, name: String) {
    let node = world.names.node(&name);
    if let Err(e) = world.doc.click(node) {
        panic!("Click failed: {e}");
    }
}

#[when(expr = "{string} is clicked while holding {string}")]
fn click_with_modifiers(world: &mut HanselWorld, name: String, keys: String) {
    let node = world.names.node(&name);
    if let Err(e) = world.doc.dispatch_click(node, parse_modifiers(&keys)) {
        panic!("Click failed: {e}");
    }
}

// =============================================================================
// Enhancement steps
// =============================================================================

#[when(expr = "{string} is enhanced")]
fn run_enhance(world: &mut HanselWorld, root: String) {
    world.run_enhance(&root);
}
