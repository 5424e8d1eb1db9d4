//! Struct, tag and accessor writers

use super::assign_identifiers;
use crate::config::Config;
use crate::naming::NameTable;
use crate::schema::{flatten, Descriptor, NodeId, SchemaTree};
use crate::types::{CommentMode, Group};

/// Render the tree as Go source text
pub fn render(tree: &mut SchemaTree, config: &Config) -> String {
    let mut names = NameTable::new();
    assign_identifiers(tree, &mut names);

    let mut out = String::new();
    if config.nested {
        render_nested(tree, config, &mut out);
    } else {
        render_flat(tree, config, &mut out);
    }
    if config.accessors {
        render_accessors(tree, config, &mut out);
    }
    out
}

// ============================================================================
// Flat mode: one named declaration per record
// ============================================================================

fn render_flat(tree: &SchemaTree, config: &Config, out: &mut String) {
    for (i, &record) in flatten(tree).iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let node = tree.node(record);
        out.push_str("type ");
        out.push_str(&node.ident);
        out.push_str(" struct {\n");
        for &child_id in &node.children {
            let child = tree.node(child_id);
            write_field(child, &field_type(&child.ident, child, config), config, 1, out);
        }
        out.push_str("}\n");
    }
}

// ============================================================================
// Nested mode: one root declaration with inline anonymous structs
// ============================================================================

fn render_nested(tree: &SchemaTree, config: &Config, out: &mut String) {
    let root = tree.root();
    out.push_str("type ");
    out.push_str(&tree.node(root).ident);
    out.push(' ');
    write_struct_literal(tree, root, config, 0, out);
    out.push('\n');
}

fn write_struct_literal(
    tree: &SchemaTree,
    id: NodeId,
    config: &Config,
    indent: usize,
    out: &mut String,
) {
    let node = tree.node(id);
    if node.children.is_empty() {
        out.push_str("struct{}");
        return;
    }
    out.push_str("struct {\n");
    for &child_id in &node.children {
        let child = tree.node(child_id);
        let type_name = if child.group.is_object_like() {
            let mut literal = String::new();
            write_struct_literal(tree, child_id, config, indent + 1, &mut literal);
            literal
        } else {
            child.ident.clone()
        };
        write_field(child, &field_type(&type_name, child, config), config, indent + 1, out);
    }
    for _ in 0..indent {
        out.push('\t');
    }
    out.push('}');
}

// ============================================================================
// Fields, types, tags
// ============================================================================

fn write_field(child: &Descriptor, type_text: &str, config: &Config, indent: usize, out: &mut String) {
    let tabs = "\t".repeat(indent);
    if config.comments == CommentMode::Line && !child.comment.is_empty() {
        out.push_str(&tabs);
        out.push_str(&child.comment);
        out.push('\n');
    }
    out.push_str(&tabs);
    out.push_str(&child.ident);
    out.push(' ');
    out.push_str(type_text);
    out.push(' ');
    out.push_str(&format_tag(&child.key, &config.tags));
    if config.comments == CommentMode::Trailing && !child.comment.is_empty() {
        out.push(' ');
        out.push_str(&child.comment);
    }
    out.push('\n');
}

/// Full Go type of a field. `type_name` is the formatted identifier in flat
/// mode and the inline struct literal in nested mode.
fn field_type(type_name: &str, node: &Descriptor, config: &Config) -> String {
    let pointer = if config.pointers { "*" } else { "" };
    match node.group {
        Group::Object => format!("{pointer}{type_name}"),
        Group::ObjectArray => format!("[]{pointer}{type_name}"),
        Group::ObjectMatrix => format!("[][]{pointer}{type_name}"),
        Group::ScalarArray => format!("[]{}", node.scalar.go_name()),
        Group::ScalarMatrix => format!("[][]{}", node.scalar.go_name()),
        Group::Scalar | Group::EmptyArray | Group::EmptyMatrix => node.scalar.go_name().to_string(),
    }
}

fn format_tag(key: &str, tags: &[String]) -> String {
    let parts: Vec<String> = tags.iter().map(|tag| format!("{tag}:\"{key}\"")).collect();
    format!("`{}`", parts.join(" "))
}

// ============================================================================
// Accessors
// ============================================================================

fn render_accessors(tree: &SchemaTree, config: &Config, out: &mut String) {
    // Nested mode declares only the root type, so only the root is
    // addressable
    let records = if config.nested {
        vec![tree.root()]
    } else {
        flatten(tree)
    };
    for &record in &records {
        let node = tree.node(record);
        out.push('\n');
        out.push_str(&format!(
            "func (n *{}) GetField(fieldName string) interface{{}} {{\n",
            node.ident
        ));
        out.push_str("\tswitch fieldName {\n");
        for &child_id in &node.children {
            let ident = &tree.node(child_id).ident;
            out.push_str(&format!("\tcase \"{ident}\":\n\t\treturn n.{ident}\n"));
        }
        out.push_str("\tdefault:\n\t\treturn nil\n\t}\n}\n");
    }
}
