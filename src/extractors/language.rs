//! Language detection and tree-sitter language configuration
//!
//! Lit components are written in TypeScript or JavaScript, so only those
//! grammars are wired up here.

use crate::error::{LitError, Result};
use std::path::Path;

/// Detect the source language from a file extension
pub fn detect_language_from_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("tsx"),
        "js" | "mjs" | "cjs" | "jsx" => Some("javascript"),
        _ => None,
    }
}

/// Detect the source language of a path
pub fn detect_language(path: &Path) -> Result<&'static str> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    detect_language_from_extension(ext)
        .ok_or_else(|| LitError::UnsupportedLanguage(path.display().to_string()))
}

/// Get the tree-sitter grammar for a language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        "javascript" => Ok(tree_sitter_javascript::LANGUAGE.into()),
        other => Err(LitError::UnsupportedLanguage(other.to_string())),
    }
}
