//! TypeScript/JavaScript class front end
//!
//! Materializes the source model (`ClassDeclaration` and friends) from a
//! tree-sitter syntax tree. The same code handles the TypeScript, TSX and
//! JavaScript grammars; where their node shapes differ the extractors accept
//! both.
//!
//! - **declarations**: tree traversal, finds every class node
//! - **classes**: class, field and method extraction
//! - **helpers**: decorators, modifiers and parameter names

mod classes;
mod declarations;
mod helpers;

use crate::extractors::base::{BaseExtractor, ClassDeclaration};
use tree_sitter::Tree;

/// Class extractor for one TypeScript or JavaScript file
pub struct TypeScriptExtractor {
    base: BaseExtractor,
}

impl TypeScriptExtractor {
    /// Create a new extractor over the file's content
    pub fn new(language: String, file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(language, file_path, content),
        }
    }

    /// Extract every class declaration and class expression in the tree
    pub fn extract_classes(&self, tree: &Tree) -> Vec<ClassDeclaration> {
        declarations::extract_classes(self, tree)
    }

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}
