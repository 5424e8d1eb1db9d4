//! Tree assembly
//!
//! Drives classification, collection and merging from a document root into
//! one finalized schema tree, and flattens it for the flat output mode.

use super::collect::collect;
use super::merge::merge_tree;
use super::types::{NodeId, SchemaTree};
use crate::error::{Error, Result};
use crate::source::RawValue;

/// Build the finalized schema tree for one document.
///
/// A top-level array treats every object element as one occurrence of the
/// implicit root object; non-object elements are skipped. Any other
/// top-level shape is fatal.
pub fn build(doc: &RawValue, root_name: &str) -> Result<SchemaTree> {
    let mut tree = SchemaTree::with_root(root_name);
    let root = tree.root();
    match doc {
        RawValue::Object(members) => collect(&mut tree, root, members),
        RawValue::Array(elements) => {
            for element in elements {
                if let RawValue::Object(members) = &element.value {
                    collect(&mut tree, root, members);
                }
            }
        }
        _ => return Err(Error::UnsupportedRoot),
    }
    merge_tree(&mut tree);
    tracing::debug!(
        fields = tree.node(root).children.len(),
        "schema inference complete"
    );
    Ok(tree)
}

/// Pre-order list of the object-like descriptors, one per emitted record
pub fn flatten(tree: &SchemaTree) -> Vec<NodeId> {
    let mut records = Vec::new();
    push_records(tree, tree.root(), &mut records);
    records
}

fn push_records(tree: &SchemaTree, id: NodeId, records: &mut Vec<NodeId>) {
    let node = tree.node(id);
    // A record with no fields still gets a declaration
    if node.group.is_object_like() {
        records.push(id);
    }
    for &child in &node.children {
        push_records(tree, child, records);
    }
}
