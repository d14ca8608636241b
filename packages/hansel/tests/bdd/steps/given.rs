//! Given step definitions
//!
//! Steps that set up the page and the registries for scenarios.

use cucumber::{gherkin::Step, given};
use hansel::HandlerOptions;

use crate::helpers::page_builder::build_page;
use crate::world::HanselWorld;

fn split_names(names: &str) -> Vec<String> {
    names
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

// =============================================================================
// Page steps
// =============================================================================

fn append_rows(world: &mut HanselWorld, step: &Step) {
    if let Some(table) = &step.table {
        if let Err(e) = build_page(&mut world.doc, &mut world.names, table) {
            panic!("Invalid element table: {e}");
        }
    }
}

#[given("the following elements:")]
fn add_elements(world: &mut HanselWorld, step: &Step) {
    append_rows(world, step);
}

#[given("a fragment with the following elements:")]
fn add_fragment(world: &mut HanselWorld, step: &Step) {
    let fragment = world.doc.create_fragment();
    world.names.insert("fragment", fragment);
    append_rows(world, step);
}

// =============================================================================
// Registry steps
// =============================================================================

#[given(expr = "the handlers {string}")]
fn register_handlers(world: &mut HanselWorld, names: String) {
    world.handler_names.extend(split_names(&names));
}

#[given(expr = "the handler {string} allows modifier keys")]
fn allow_modifier_keys(world: &mut HanselWorld, name: String) {
    world
        .handler_options
        .insert(name, HandlerOptions::allow_modifier_keys(true));
}

#[given(expr = "the handler {string} does not allow modifier keys")]
fn disallow_modifier_keys(world: &mut HanselWorld, name: String) {
    world
        .handler_options
        .insert(name, HandlerOptions::allow_modifier_keys(false));
}

#[given(expr = "the enhancers {string}")]
fn register_enhancers(world: &mut HanselWorld, names: String) {
    world.enhancer_names.extend(split_names(&names));
}
