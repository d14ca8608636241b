//! Page builder for Gherkin data tables
//!
//! Turns an element table into nodes of an in-memory document.
//!
//! The table format is:
//! ```text
//! | id   | tag    | parent | data-handler | data-enhancer |
//! | menu | nav    | body   |              | menu          |
//! | open | button | menu   | toggle       |               |
//! ```
//!
//! `id`, `tag` and `parent` are required. Every other column is an attribute;
//! an empty cell leaves the attribute out and `(empty)` sets it to "".
//! Parents are referenced by id, or as `html`, `body` or `fragment`.

use cucumber::gherkin::Table;
use hansel::{Document, NodeId};
use std::collections::HashMap;

/// Cell value standing for a present-but-empty attribute.
pub const EMPTY_VALUE: &str = "(empty)";

/// Nodes by the name used in the feature files.
#[derive(Debug, Default)]
pub struct NamedNodes {
    nodes: HashMap<String, NodeId>,
}

impl NamedNodes {
    pub fn insert(&mut self, name: impl Into<String>, node: NodeId) {
        self.nodes.insert(name.into(), node);
    }

    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.nodes.get(name).copied()
    }

    /// Resolve a name, panicking with a readable message when unknown.
    pub fn node(&self, name: &str) -> NodeId {
        self.get(name)
            .unwrap_or_else(|| panic!("Unknown element in scenario: {name}"))
    }

    /// Reverse lookup used to print nodes in assertions.
    pub fn name_of(&self, node: NodeId) -> String {
        self.nodes
            .iter()
            .find(|(_, id)| **id == node)
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| node.to_string())
    }
}

/// Append every row of `table` to `doc`, registering the ids in `names`.
pub fn build_page(doc: &mut Document, names: &mut NamedNodes, table: &Table) -> Result<(), String> {
    let Some((header, rows)) = table.rows.split_first() else {
        return Ok(());
    };
    let column = |wanted: &str| header.iter().position(|h| h.trim() == wanted);
    let id_column = column("id").ok_or("Element table needs an 'id' column")?;
    let tag_column = column("tag").ok_or("Element table needs a 'tag' column")?;
    let parent_column = column("parent").ok_or("Element table needs a 'parent' column")?;

    for row in rows {
        let id = row[id_column].trim();
        let parent_name = row[parent_column].trim();
        let parent = names
            .get(parent_name)
            .ok_or_else(|| format!("Unknown parent '{parent_name}' for '{id}'"))?;

        let mut attributes = vec![("id", id)];
        for (index, name) in header.iter().enumerate() {
            if [id_column, tag_column, parent_column].contains(&index) {
                continue;
            }
            match row[index].trim() {
                "" => {}
                EMPTY_VALUE => attributes.push((name.trim(), "")),
                value => attributes.push((name.trim(), value)),
            }
        }

        let node = doc
            .append_element(parent, row[tag_column].trim(), &attributes)
            .map_err(|e| e.to_string())?;
        names.insert(id, node);
    }
    Ok(())
}
