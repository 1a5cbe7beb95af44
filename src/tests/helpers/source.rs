/// Test helpers for parsing inline sources
use crate::extractors::ExtractorManager;
use crate::extractors::base::{ClassDeclaration, ParsedFile};
use std::path::Path;

/// Parse TypeScript source as `test.ts`
pub fn parse(code: &str) -> ParsedFile {
    parse_as("test.ts", code)
}

/// Parse source under a given file name; the extension selects the grammar
pub fn parse_as(file_name: &str, code: &str) -> ParsedFile {
    ExtractorManager::new()
        .parse_source(Path::new(file_name), code)
        .expect("source should parse")
}

/// Parse TypeScript source that declares exactly one class
pub fn parse_class(code: &str) -> ClassDeclaration {
    let mut file = parse(code);
    assert_eq!(file.classes.len(), 1, "expected exactly one class");
    file.classes.remove(0)
}

pub fn class_named<'a>(file: &'a ParsedFile, name: &str) -> &'a ClassDeclaration {
    file.classes
        .iter()
        .find(|c| c.name.as_deref() == Some(name))
        .unwrap_or_else(|| panic!("class {} not found", name))
}
