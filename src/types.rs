//! Common types used throughout json2go
//!
//! The structural group and scalar type of a field are closed enums rather
//! than string tags so the merge precedence logic can match exhaustively.

use serde::{Deserialize, Serialize};

// ============================================================================
// Structural Group
// ============================================================================

/// Structural classification of a value.
///
/// The two `Empty*` variants are unresolved placeholders produced for empty
/// arrays; they never survive merge finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    /// A scalar value
    Scalar,
    /// An array of scalars
    ScalarArray,
    /// An array of arrays of scalars
    ScalarMatrix,
    /// An object
    Object,
    /// An array of objects
    ObjectArray,
    /// An array of arrays of objects
    ObjectMatrix,
    /// An empty array whose element shape is still unknown
    EmptyArray,
    /// An array whose only elements are empty arrays
    EmptyMatrix,
}

impl Group {
    /// Groups that carry children and render as struct types
    pub fn is_object_like(self) -> bool {
        matches!(self, Group::Object | Group::ObjectArray | Group::ObjectMatrix)
    }

    /// Groups whose scalar type is meaningful
    pub fn is_scalar_like(self) -> bool {
        matches!(self, Group::Scalar | Group::ScalarArray | Group::ScalarMatrix)
    }

    /// Unresolved empty-array placeholders
    pub fn is_placeholder(self) -> bool {
        matches!(self, Group::EmptyArray | Group::EmptyMatrix)
    }
}

// ============================================================================
// Scalar Type
// ============================================================================

/// Primitive type of a scalar value.
///
/// `Null` is transient: a field seen only as null degrades to `Any` when its
/// bucket is finalized. `Any` is the dynamic fallback for mixed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    String,
    Bool,
    /// Integer literal within the 32-bit signed range
    Int,
    /// Integer literal outside the 32-bit signed range
    Int64,
    Float,
    Null,
    Any,
}

impl ScalarType {
    /// The Go spelling of this type
    pub fn go_name(self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Bool => "bool",
            ScalarType::Int => "int",
            ScalarType::Int64 => "int64",
            ScalarType::Float => "float64",
            // Null never survives finalization; render it as the dynamic type
            ScalarType::Null | ScalarType::Any => "interface{}",
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.go_name())
    }
}

// ============================================================================
// Comment Mode
// ============================================================================

/// How source comments are carried into the generated declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentMode {
    /// Drop comments
    #[default]
    Off,
    /// Emit the comment on its own line above the field
    Line,
    /// Emit the comment at the end of the field line
    Trailing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_predicates() {
        assert!(Group::Object.is_object_like());
        assert!(Group::ObjectMatrix.is_object_like());
        assert!(!Group::ScalarArray.is_object_like());

        assert!(Group::Scalar.is_scalar_like());
        assert!(Group::ScalarMatrix.is_scalar_like());
        assert!(!Group::Object.is_scalar_like());

        assert!(Group::EmptyArray.is_placeholder());
        assert!(Group::EmptyMatrix.is_placeholder());
        assert!(!Group::Scalar.is_placeholder());
    }

    #[test]
    fn test_go_names() {
        assert_eq!(ScalarType::String.go_name(), "string");
        assert_eq!(ScalarType::Int.go_name(), "int");
        assert_eq!(ScalarType::Int64.go_name(), "int64");
        assert_eq!(ScalarType::Float.go_name(), "float64");
        assert_eq!(ScalarType::Any.go_name(), "interface{}");
        assert_eq!(ScalarType::Null.go_name(), "interface{}");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Group::ObjectArray).unwrap();
        assert_eq!(json, "\"object_array\"");

        let t: ScalarType = serde_json::from_str("\"int64\"").unwrap();
        assert_eq!(t, ScalarType::Int64);

        let mode: CommentMode = serde_json::from_str("\"trailing\"").unwrap();
        assert_eq!(mode, CommentMode::Trailing);
    }
}
