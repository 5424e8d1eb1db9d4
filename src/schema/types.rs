//! Descriptor arena
//!
//! The accumulation tree is an arena of descriptors referenced by index.
//! Parent/child edges and merge buckets are index references; the tree is
//! acyclic and built in one pass.

use crate::types::{Group, ScalarType};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Index of a descriptor in its [`SchemaTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// One field, or the synthetic document root
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Raw key exactly as written in the document
    pub key: String,
    /// Structural group
    pub group: Group,
    /// Scalar type; meaningful only for scalar-like groups
    pub scalar: ScalarType,
    /// First non-empty source comment among merged occurrences
    pub comment: String,
    /// Finalized ordered children, populated by merge
    pub children: Vec<NodeId>,
    /// Formatted identifier, assigned once during the emission pass
    pub ident: String,
    /// Per-key occurrence lists awaiting merge, in first-seen key order
    pub(crate) buckets: Vec<Vec<NodeId>>,
    /// Raw key -> index into `buckets`
    pub(crate) bucket_slots: HashMap<String, usize>,
}

impl Descriptor {
    pub(crate) fn new(key: &str, group: Group, scalar: ScalarType, comment: &str) -> Self {
        Self {
            key: key.to_string(),
            group,
            scalar,
            comment: comment.to_string(),
            children: Vec::new(),
            ident: String::new(),
            buckets: Vec::new(),
            bucket_slots: HashMap::new(),
        }
    }
}

/// Arena holding every descriptor of one inference run
#[derive(Debug, Clone)]
pub struct SchemaTree {
    nodes: Vec<Descriptor>,
    root: NodeId,
}

impl SchemaTree {
    /// Create a tree holding only the synthetic root
    pub(crate) fn with_root(root_name: &str) -> Self {
        let root = Descriptor::new(root_name, Group::Object, ScalarType::Any, "");
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// The synthetic document root
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a descriptor
    pub fn node(&self, id: NodeId) -> &Descriptor {
        &self.nodes[id.0]
    }

    /// Borrow a descriptor mutably
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Descriptor {
        &mut self.nodes[id.0]
    }

    /// Add a descriptor to the arena
    pub(crate) fn alloc(&mut self, descriptor: Descriptor) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(descriptor);
        id
    }

    /// Append one occurrence of `child` to the parent's bucket for the
    /// child's raw key, preserving first-seen key order
    pub(crate) fn push_occurrence(&mut self, parent: NodeId, child: NodeId) {
        let key = self.node(child).key.clone();
        let slots = &mut self.nodes[parent.0];
        if let Some(&slot) = slots.bucket_slots.get(&key) {
            slots.buckets[slot].push(child);
        } else {
            let slot = slots.buckets.len();
            slots.buckets.push(vec![child]);
            slots.bucket_slots.insert(key, slot);
        }
    }

    /// Drop the consumed merge buckets of a finalized descriptor
    pub(crate) fn clear_buckets(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        node.buckets.clear();
        node.bucket_slots.clear();
    }

    /// JSON view of the finalized tree, for the schema dump
    pub fn to_json(&self) -> Value {
        self.node_json(self.root)
    }

    fn node_json(&self, id: NodeId) -> Value {
        let node = self.node(id);
        let mut map = serde_json::Map::new();
        map.insert("key".to_string(), json!(node.key));
        if !node.ident.is_empty() {
            map.insert("ident".to_string(), json!(node.ident));
        }
        map.insert(
            "group".to_string(),
            serde_json::to_value(node.group).unwrap_or_default(),
        );
        if node.group.is_scalar_like() {
            map.insert(
                "type".to_string(),
                serde_json::to_value(node.scalar).unwrap_or_default(),
            );
        }
        if !node.comment.is_empty() {
            map.insert("comment".to_string(), json!(node.comment));
        }
        if node.group.is_object_like() {
            let children: Vec<Value> = node
                .children
                .iter()
                .map(|&child| self.node_json(child))
                .collect();
            map.insert("children".to_string(), Value::Array(children));
        }
        Value::Object(map)
    }
}
