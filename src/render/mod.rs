//! Go text emission
//!
//! Renders the finalized schema tree as Go declarations. Rendering never
//! re-derives an inference decision; it only reads finalized descriptors.
//! Identifier assignment happens in one pre-order pass shared by both output
//! modes and by the schema dump.

mod writer;

pub use writer::render;

use crate::naming::NameTable;
use crate::schema::{NodeId, SchemaTree};

/// Assign every descriptor its formatted identifier, pre-order
pub(crate) fn assign_identifiers(tree: &mut SchemaTree, names: &mut NameTable) {
    assign_node(tree, tree.root(), names);
}

fn assign_node(tree: &mut SchemaTree, id: NodeId, names: &mut NameTable) {
    let ident = names.format(&tree.node(id).key);
    tree.node_mut(id).ident = ident;
    let children = tree.node(id).children.clone();
    for child in children {
        assign_node(tree, child, names);
    }
}

#[cfg(test)]
mod tests;
