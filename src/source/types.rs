//! Document model types

/// Kind of a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Bool,
    Null,
    Array,
    Object,
}

/// One parsed value.
///
/// Numbers keep their literal text: the classifier distinguishes `int`,
/// `int64` and `float64` by literal form, not by a parsed representation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(String),
    String(String),
    Array(Vec<Element>),
    Object(Vec<Member>),
}

/// One object member, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Raw key exactly as written
    pub key: String,
    /// Member value
    pub value: RawValue,
    /// Source comment attached to this member, verbatim ("" when absent)
    pub comment: String,
}

/// One array element, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element value
    pub value: RawValue,
    /// Source comment attached to this element, verbatim ("" when absent)
    pub comment: String,
}

impl RawValue {
    /// Kind of this value
    pub fn kind(&self) -> Kind {
        match self {
            RawValue::Null => Kind::Null,
            RawValue::Bool(_) => Kind::Bool,
            RawValue::Number(_) => Kind::Number,
            RawValue::String(_) => Kind::String,
            RawValue::Array(_) => Kind::Array,
            RawValue::Object(_) => Kind::Object,
        }
    }

    /// Ordered members when this value is an object
    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            RawValue::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Ordered elements when this value is an array
    pub fn as_array(&self) -> Option<&[Element]> {
        match self {
            RawValue::Array(elements) => Some(elements),
            _ => None,
        }
    }
}
