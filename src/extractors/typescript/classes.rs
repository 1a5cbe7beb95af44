//! Class extraction
//!
//! Builds a `ClassDeclaration` from `class_declaration`,
//! `abstract_class_declaration` and class expression nodes, including the
//! superclass clause, decorators, fields and methods.

use super::helpers;
use crate::extractors::base::{
    ClassDeclaration, FieldDeclaration, MethodDeclaration, SourceSpan, Visibility,
    string_literal_value,
};
use crate::extractors::typescript::TypeScriptExtractor;
use tracing::debug;
use tree_sitter::Node;

/// Extract a class declaration or class expression
pub(super) fn extract_class(extractor: &TypeScriptExtractor, node: Node) -> Option<ClassDeclaration> {
    let base = extractor.base();

    let name = node
        .child_by_field_name("name")
        .map(|n| base.get_node_text(&n))
        .filter(|n| !n.is_empty());
    if name.is_none() && node.kind() != "class" {
        debug!(
            "Skipping unnamed {} at {}:{}",
            node.kind(),
            base.file_path,
            node.start_position().row + 1
        );
        return None;
    }

    let body = node.child_by_field_name("body")?;

    // Decorators written before `export` hang off the export statement
    let mut decorators = Vec::new();
    if let Some(parent) = node.parent() {
        if parent.kind() == "export_statement" {
            decorators.extend(helpers::extract_decorators(base, parent));
        }
    }
    decorators.extend(helpers::extract_decorators(base, node));

    let mut fields = Vec::new();
    let mut methods = Vec::new();
    let mut cursor = body.walk();
    for member in body.children(&mut cursor) {
        match member.kind() {
            "public_field_definition" | "field_definition" => {
                if let Some(field) = extract_field(extractor, member) {
                    fields.push(field);
                }
            }
            "method_definition" => {
                if let Some(method) = extract_method(extractor, member) {
                    methods.push(method);
                }
            }
            _ => {}
        }
    }

    Some(ClassDeclaration {
        name,
        superclass: extract_superclass(extractor, node),
        decorators,
        fields,
        methods,
        text: base.get_node_text(&node),
        file_path: base.file_path.clone(),
        span: SourceSpan::from_node(&node),
    })
}

/// Text of the `extends` clause, without the keyword
fn extract_superclass(extractor: &TypeScriptExtractor, node: Node) -> Option<String> {
    let heritage = node
        .children(&mut node.walk())
        .find(|child| child.kind() == "class_heritage")?;

    // TypeScript wraps the clause in `extends_clause`; JavaScript does not
    let clause = heritage
        .children(&mut heritage.walk())
        .find(|child| child.kind() == "extends_clause")
        .unwrap_or(heritage);

    let text = extractor.base().get_node_text(&clause);
    let superclass = text.trim().strip_prefix("extends")?.trim();
    if superclass.is_empty() {
        None
    } else {
        Some(superclass.to_string())
    }
}

fn extract_field(extractor: &TypeScriptExtractor, node: Node) -> Option<FieldDeclaration> {
    let base = extractor.base();
    let name_node = node
        .child_by_field_name("name")
        .or_else(|| node.child_by_field_name("property"))?;

    let raw_name = base.get_node_text(&name_node);
    let name = if name_node.kind() == "string" {
        string_literal_value(&raw_name).unwrap_or(raw_name)
    } else {
        raw_name
    };

    let visibility = if name_node.kind() == "private_property_identifier" {
        Some(Visibility::Private)
    } else {
        base.extract_visibility(&node)
    };

    let mut decorators = helpers::extract_preceding_decorators(base, node);
    decorators.extend(helpers::extract_decorators(base, node));

    let declared_type = node.child_by_field_name("type").map(|t| {
        base.get_node_text(&t)
            .trim_start_matches(':')
            .trim()
            .to_string()
    });
    let initializer = node
        .child_by_field_name("value")
        .map(|v| base.get_node_text(&v));

    Some(FieldDeclaration {
        name,
        visibility,
        is_static: helpers::has_modifier(node, "static"),
        declared_type,
        initializer,
        decorators,
        text: base.get_node_text(&node),
        span: SourceSpan::from_node(&node),
    })
}

fn extract_method(extractor: &TypeScriptExtractor, node: Node) -> Option<MethodDeclaration> {
    let base = extractor.base();
    let name_node = node.child_by_field_name("name")?;
    let name = base.get_node_text(&name_node);

    let mut parameters = Vec::new();
    if let Some(params) = node.child_by_field_name("parameters") {
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            if let Some(param_name) = helpers::parameter_name(base, param) {
                parameters.push(param_name);
            }
        }
    }

    let visibility = if name_node.kind() == "private_property_identifier" {
        Some(Visibility::Private)
    } else {
        base.extract_visibility(&node)
    };

    Some(MethodDeclaration {
        name,
        parameters,
        is_static: helpers::has_modifier(node, "static"),
        visibility,
        span: SourceSpan::from_node(&node),
    })
}
