//! Field collection
//!
//! Walks an object's members in source order and appends one occurrence
//! descriptor per member into the parent's per-key bucket. Object-like
//! members are recursed once per array element, in element order; calling
//! this repeatedly against one parent (one call per sibling array element)
//! is what captures cross-element type variability.

use super::classify::{classify, scalar_type};
use super::merge::unify_scalars;
use super::types::{Descriptor, NodeId, SchemaTree};
use crate::source::{Member, RawValue};
use crate::types::{Group, ScalarType};

pub(crate) fn collect(tree: &mut SchemaTree, parent: NodeId, members: &[Member]) {
    for member in members {
        let group = classify(&member.value);
        match group {
            Group::Scalar => {
                let scalar = scalar_type(&member.value);
                let node = tree.alloc(Descriptor::new(&member.key, group, scalar, &member.comment));
                tree.push_occurrence(parent, node);
            }
            Group::ScalarArray | Group::ScalarMatrix => {
                let depth = if group == Group::ScalarArray { 1 } else { 2 };
                let (scalar, element_comment) = array_scalar_type(&member.value, depth);
                let comment = pick_comment(&member.comment, &element_comment);
                let node = tree.alloc(Descriptor::new(&member.key, group, scalar, comment));
                tree.push_occurrence(parent, node);
            }
            Group::Object => {
                let node = tree.alloc(Descriptor::new(
                    &member.key,
                    group,
                    ScalarType::Any,
                    &member.comment,
                ));
                tree.push_occurrence(parent, node);
                if let RawValue::Object(children) = &member.value {
                    collect(tree, node, children);
                }
            }
            Group::ObjectArray | Group::ObjectMatrix => {
                let depth = if group == Group::ObjectArray { 1 } else { 2 };
                let (objects, element_comment) = array_objects(&member.value, depth);
                let comment = pick_comment(&member.comment, &element_comment);
                let node =
                    tree.alloc(Descriptor::new(&member.key, group, ScalarType::Any, comment));
                tree.push_occurrence(parent, node);
                for object in objects {
                    collect(tree, node, object);
                }
            }
            Group::EmptyArray | Group::EmptyMatrix => {
                // Unresolved placeholder; reconciled against sibling
                // occurrences during merge
                let node = tree.alloc(Descriptor::new(&member.key, group, ScalarType::Null, ""));
                tree.push_occurrence(parent, node);
            }
        }
    }
}

/// The member's own comment wins over a comment extracted from the array's
/// outer-layer elements
fn pick_comment<'a>(member_comment: &'a str, element_comment: &'a str) -> &'a str {
    if member_comment.is_empty() {
        element_comment
    } else {
        member_comment
    }
}

/// Unify the scalar types of every element at `depth`, and extract the first
/// non-empty comment from the outer layer
fn array_scalar_type(value: &RawValue, depth: usize) -> (ScalarType, String) {
    let mut types = Vec::new();
    let mut comment = String::new();
    for element in value.as_array().unwrap_or_default() {
        if comment.is_empty() && !element.comment.is_empty() {
            comment = element.comment.clone();
        }
        if depth == 1 {
            types.push(scalar_type(&element.value));
        } else if let RawValue::Array(inner) = &element.value {
            for nested in inner {
                types.push(scalar_type(&nested.value));
            }
        }
    }
    (unify_scalars(&types, true), comment)
}

/// Gather every object element at `depth`, and extract the first non-empty
/// comment from the outer layer
fn array_objects(value: &RawValue, depth: usize) -> (Vec<&[Member]>, String) {
    let mut objects = Vec::new();
    let mut comment = String::new();
    for element in value.as_array().unwrap_or_default() {
        if comment.is_empty() && !element.comment.is_empty() {
            comment = element.comment.clone();
        }
        if depth == 1 {
            push_object(&mut objects, &element.value);
        } else if let RawValue::Array(inner) = &element.value {
            for nested in inner {
                push_object(&mut objects, &nested.value);
            }
        }
    }
    (objects, comment)
}

fn push_object<'a>(objects: &mut Vec<&'a [Member]>, value: &'a RawValue) {
    if let RawValue::Object(members) = value {
        objects.push(members.as_slice());
    }
}
