//! Class discovery
//!
//! Walks the whole syntax tree and routes every class node to the class
//! extractor. Nested classes (inside functions or other classes) are found too.

use super::classes;
use crate::extractors::base::ClassDeclaration;
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::{Node, Tree};

/// Extract all class declarations from the syntax tree, in source order
pub(super) fn extract_classes(extractor: &TypeScriptExtractor, tree: &Tree) -> Vec<ClassDeclaration> {
    let mut classes = Vec::new();
    visit_node(extractor, tree.root_node(), &mut classes);
    classes
}

fn visit_node(extractor: &TypeScriptExtractor, node: Node, classes: &mut Vec<ClassDeclaration>) {
    if matches!(
        node.kind(),
        "class_declaration" | "abstract_class_declaration" | "class"
    ) {
        if let Some(class) = classes::extract_class(extractor, node) {
            classes.push(class);
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit_node(extractor, child, classes);
    }
}
