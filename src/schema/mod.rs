//! Schema inference engine
//!
//! Walks a parsed document, buckets every occurrence of a key across
//! repeated sibling array elements, and reduces each bucket into one
//! finalized descriptor. Shape and type conflicts never fail; they degrade
//! deterministically to the dynamic type.

mod assemble;
mod classify;
mod collect;
mod merge;
mod types;

pub use assemble::{build, flatten};
pub use types::{Descriptor, NodeId, SchemaTree};
