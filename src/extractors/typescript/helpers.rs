//! Helper functions for the TypeScript/JavaScript front end
//!
//! Node inspection shared by class, field and method extraction: modifiers,
//! decorators and parameter names.

use crate::extractors::base::{BaseExtractor, Decorator};
use tree_sitter::Node;

/// Check if a node has a modifier child of the given kind
///
/// Useful for checking for 'static', 'abstract', 'readonly', etc.
pub(super) fn has_modifier(node: Node, modifier_kind: &str) -> bool {
    node.children(&mut node.walk())
        .any(|child| child.kind() == modifier_kind)
}

/// Collect decorators from child `decorator` nodes.
///
/// Works for class declarations, export statements and field definitions,
/// where the grammar keeps decorators as children.
pub(super) fn extract_decorators(base: &BaseExtractor, node: Node) -> Vec<Decorator> {
    let mut decorators = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "decorator" {
            if let Some(decorator) = parse_decorator(base, child) {
                decorators.push(decorator);
            }
        }
    }
    decorators
}

/// Collect decorators from preceding sibling nodes.
///
/// Member decorators can end up as siblings of the member inside
/// `class_body`. Walks backwards until the first non-decorator, non-comment.
pub(super) fn extract_preceding_decorators(base: &BaseExtractor, node: Node) -> Vec<Decorator> {
    let mut decorators = Vec::new();
    let mut sibling = node.prev_sibling();
    while let Some(sib) = sibling {
        if sib.kind() == "decorator" {
            if let Some(decorator) = parse_decorator(base, sib) {
                decorators.insert(0, decorator); // prepend to maintain order
            }
        } else if sib.kind() != "comment" {
            break;
        }
        sibling = sib.prev_sibling();
    }
    decorators
}

/// Parse a single decorator node.
///
/// Handles `@foo`, `@ns.foo`, `@foo(args)` and `@ns.foo(args)`.
fn parse_decorator(base: &BaseExtractor, decorator_node: Node) -> Option<Decorator> {
    let text = base.get_node_text(&decorator_node);
    let mut cursor = decorator_node.walk();
    for child in decorator_node.named_children(&mut cursor) {
        match child.kind() {
            "identifier" | "member_expression" | "parenthesized_expression" => {
                return Some(Decorator {
                    name: last_segment(&base.get_node_text(&child)),
                    arguments: Vec::new(),
                    argument_text: None,
                    text,
                });
            }
            "call_expression" => {
                let function = child.child_by_field_name("function")?;
                let (arguments, argument_text) = match child.child_by_field_name("arguments") {
                    Some(args) => call_arguments(base, args),
                    None => (Vec::new(), None),
                };
                return Some(Decorator {
                    name: last_segment(&base.get_node_text(&function)),
                    arguments,
                    argument_text,
                    text,
                });
            }
            _ => {}
        }
    }
    None
}

fn call_arguments(base: &BaseExtractor, args: Node) -> (Vec<String>, Option<String>) {
    let mut arguments = Vec::new();
    let mut cursor = args.walk();
    for arg in args.named_children(&mut cursor) {
        if arg.kind() != "comment" {
            arguments.push(base.get_node_text(&arg));
        }
    }

    let raw = base.get_node_text(&args);
    let inner = raw
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(&raw)
        .trim()
        .to_string();
    (arguments, Some(inner))
}

fn last_segment(path: &str) -> String {
    path.trim()
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Name bound by one entry of a `formal_parameters` list
pub(super) fn parameter_name(base: &BaseExtractor, node: Node) -> Option<String> {
    match node.kind() {
        "comment" => None,
        "required_parameter" | "optional_parameter" => node
            .child_by_field_name("pattern")
            .map(|p| base.get_node_text(&p)),
        "assignment_pattern" => node
            .child_by_field_name("left")
            .map(|p| base.get_node_text(&p)),
        _ => Some(base.get_node_text(&node)),
    }
}
