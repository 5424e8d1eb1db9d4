//! Document source module
//!
//! Supplies the raw values the schema engine walks: ordered object members
//! and array elements, each with an optional source comment. The parser
//! accepts standard JSON plus `//` and `/* */` comments and trailing commas.

mod parser;
mod types;

pub use parser::parse_str;
pub use types::{Element, Kind, Member, RawValue};
