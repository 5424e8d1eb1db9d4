//! Value classification
//!
//! Arrays are grouped by lookahead: the first decisive element fixes the
//! group, and an array-of-array gets exactly one more level of the same
//! lookahead. The scan never goes past the first decisive element, so an
//! object appearing after leading scalars does not change the group.

use crate::source::{Element, RawValue};
use crate::types::{Group, ScalarType};

/// Classify one raw value into its structural group
pub(crate) fn classify(value: &RawValue) -> Group {
    match value {
        RawValue::Object(_) => Group::Object,
        RawValue::Array(elements) => classify_array(elements),
        _ => Group::Scalar,
    }
}

fn classify_array(elements: &[Element]) -> Group {
    let mut group = Group::EmptyArray;
    for element in elements {
        match &element.value {
            RawValue::Object(_) => return Group::ObjectArray,
            RawValue::Array(inner) => match inner.first() {
                Some(first) => {
                    return if matches!(first.value, RawValue::Object(_)) {
                        Group::ObjectMatrix
                    } else {
                        Group::ScalarMatrix
                    }
                }
                // An empty inner array is not decisive; keep scanning
                None => group = Group::EmptyMatrix,
            },
            _ => return Group::ScalarArray,
        }
    }
    group
}

/// Primitive type of a scalar value
pub(crate) fn scalar_type(value: &RawValue) -> ScalarType {
    match value {
        RawValue::String(_) => ScalarType::String,
        RawValue::Bool(_) => ScalarType::Bool,
        RawValue::Null => ScalarType::Null,
        RawValue::Number(literal) => number_type(literal),
        // Arrays and objects inside a scalar-classified array are untypable
        RawValue::Array(_) | RawValue::Object(_) => ScalarType::Any,
    }
}

/// Refine a numeric literal by its written form
fn number_type(literal: &str) -> ScalarType {
    if literal.contains(['.', 'e', 'E']) {
        return ScalarType::Float;
    }
    match literal.parse::<i64>() {
        Ok(n) if n >= i64::from(i32::MIN) && n <= i64::from(i32::MAX) => ScalarType::Int,
        _ => ScalarType::Int64,
    }
}
