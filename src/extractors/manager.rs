//! ExtractorManager - parses source files into the class source model
//!
//! Handles language detection and tree-sitter parsing, then delegates to the
//! TypeScript/JavaScript front end. Everything that can go wrong here is a
//! host-level failure for one file; callers decide whether to skip it.

use crate::error::{LitError, Result};
use crate::extractors::base::ParsedFile;
use crate::extractors::language::{detect_language, get_tree_sitter_language};
use crate::extractors::typescript::TypeScriptExtractor;
use std::path::Path;
use tree_sitter::Parser;

/// Stateless manager; safe to share across threads
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtractorManager;

impl ExtractorManager {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a file, refusing files larger than `max_file_size` bytes
    pub fn parse_file(&self, path: &Path, max_file_size: u64) -> Result<ParsedFile> {
        let metadata = std::fs::metadata(path).map_err(|e| LitError::io(path, e))?;
        if metadata.len() > max_file_size {
            return Err(LitError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: max_file_size,
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| LitError::io(path, e))?;
        self.parse_source(path, &content)
    }

    /// Parse in-memory source; the language is chosen from the path's extension
    pub fn parse_source(&self, path: &Path, content: &str) -> Result<ParsedFile> {
        let language = detect_language(path)?;

        let mut parser = Parser::new();
        parser.set_language(&get_tree_sitter_language(language)?)?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| LitError::Parse(path.to_path_buf()))?;

        if tree.root_node().has_error() {
            // tree-sitter recovers; classes outside the broken region are still usable
            tracing::debug!("Syntax errors in {}, extracting what parsed", path.display());
        }

        let extractor = TypeScriptExtractor::new(
            language.to_string(),
            path.to_string_lossy().to_string(),
            content.to_string(),
        );
        let classes = extractor.extract_classes(&tree);

        tracing::debug!(
            "Extracted {} classes from {} file: {}",
            classes.len(),
            language,
            path.display()
        );

        Ok(ParsedFile {
            path: path.to_path_buf(),
            language: language.to_string(),
            classes,
        })
    }
}
