//! Bucket merging
//!
//! Reduces each per-key occurrence list into one finalized descriptor.
//! Shape conflicts degrade to the dynamic type instead of failing: real
//! documents routinely mix shapes across array elements, and the engine must
//! still emit usable output.

use super::types::{Descriptor, NodeId, SchemaTree};
use crate::types::{Group, ScalarType};

/// Finalize every bucket in the tree, starting from the root
pub(crate) fn merge_tree(tree: &mut SchemaTree) {
    merge_children(tree, tree.root());
}

fn merge_children(tree: &mut SchemaTree, parent: NodeId) {
    let bucket_count = tree.node(parent).buckets.len();
    for slot in 0..bucket_count {
        let bucket = tree.node(parent).buckets[slot].clone();
        let merged = merge_bucket(tree, &bucket);
        merge_children(tree, merged);
        tree.node_mut(parent).children.push(merged);
    }
    tree.clear_buckets(parent);
}

/// Reduce one key's occurrence list into a single finalized descriptor,
/// re-bucketing the union of child occurrences for the next level
fn merge_bucket(tree: &mut SchemaTree, bucket: &[NodeId]) -> NodeId {
    let occurrences: Vec<(Group, ScalarType)> = bucket
        .iter()
        .map(|&id| {
            let node = tree.node(id);
            (node.group, node.scalar)
        })
        .collect();
    let (group, scalar) = unify_shape(&occurrences);

    let key = bucket
        .first()
        .map(|&id| tree.node(id).key.clone())
        .unwrap_or_default();
    let comment = bucket
        .iter()
        .map(|&id| &tree.node(id).comment)
        .find(|c| !c.is_empty())
        .cloned()
        .unwrap_or_default();

    let merged = tree.alloc(Descriptor::new(&key, group, scalar, &comment));
    // A shape conflict degrades to a childless dynamic field; dropping the
    // collected children keeps their records out of the output
    if group.is_object_like() {
        for &id in bucket {
            let child_buckets = tree.node(id).buckets.clone();
            for child_bucket in child_buckets {
                for child in child_bucket {
                    tree.push_occurrence(merged, child);
                }
            }
        }
    }
    merged
}

/// Unify the structural groups of one bucket, resolving placeholders
fn unify_shape(occurrences: &[(Group, ScalarType)]) -> (Group, ScalarType) {
    let has = |group: Group| occurrences.iter().any(|&(g, _)| g == group);

    let scalar = has(Group::Scalar);
    let scalar_array = has(Group::ScalarArray);
    let scalar_matrix = has(Group::ScalarMatrix);
    let object = has(Group::Object);
    let object_array = has(Group::ObjectArray);
    let object_matrix = has(Group::ObjectMatrix);
    let empty_array = has(Group::EmptyArray);
    let empty_matrix = has(Group::EmptyMatrix);

    let real_groups = [
        scalar,
        scalar_array,
        scalar_matrix,
        object,
        object_array,
        object_matrix,
    ]
    .iter()
    .filter(|&&present| present)
    .count();

    // Incompatible shapes cannot form one record type
    if real_groups > 1 || (empty_array && empty_matrix) {
        return (Group::Scalar, ScalarType::Any);
    }
    // A placeholder only absorbs into a real group of the same dimension
    if empty_array && (scalar || scalar_matrix || object || object_matrix) {
        return (Group::Scalar, ScalarType::Any);
    }
    if empty_matrix && (scalar || scalar_array || object || object_array) {
        return (Group::Scalar, ScalarType::Any);
    }
    // Every occurrence is a placeholder: array of dynamic-any at the
    // matching dimension
    if real_groups == 0 {
        return if empty_array {
            (Group::ScalarArray, ScalarType::Any)
        } else {
            (Group::ScalarMatrix, ScalarType::Any)
        };
    }

    let group = if scalar {
        Group::Scalar
    } else if scalar_array {
        Group::ScalarArray
    } else if scalar_matrix {
        Group::ScalarMatrix
    } else if object {
        Group::Object
    } else if object_array {
        Group::ObjectArray
    } else {
        Group::ObjectMatrix
    };

    if group.is_object_like() {
        (group, ScalarType::Any)
    } else {
        let types: Vec<ScalarType> = occurrences.iter().map(|&(_, t)| t).collect();
        (group, unify_scalars(&types, false))
    }
}

/// Unify scalar types by family precedence.
///
/// With `keep_null`, a null-only list stays `Null` so a later cross-occurrence
/// merge can still absorb it; at finalization a lone null carries no type
/// signal and degrades to `Any`.
pub(crate) fn unify_scalars(types: &[ScalarType], keep_null: bool) -> ScalarType {
    let has = |t: ScalarType| types.iter().any(|&candidate| candidate == t);

    if has(ScalarType::Any) {
        return ScalarType::Any;
    }

    let string = has(ScalarType::String);
    let boolean = has(ScalarType::Bool);
    let numeric = has(ScalarType::Float) || has(ScalarType::Int64) || has(ScalarType::Int);

    let families = usize::from(string) + usize::from(boolean) + usize::from(numeric);
    if families > 1 {
        return ScalarType::Any;
    }

    if string {
        ScalarType::String
    } else if boolean {
        ScalarType::Bool
    } else if has(ScalarType::Float) {
        // The widest representation present always wins
        ScalarType::Float
    } else if has(ScalarType::Int64) {
        ScalarType::Int64
    } else if has(ScalarType::Int) {
        ScalarType::Int
    } else if has(ScalarType::Null) && keep_null {
        ScalarType::Null
    } else {
        ScalarType::Any
    }
}
