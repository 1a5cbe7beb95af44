// Litlens source front end
//
// Tree-sitter based parsing of TypeScript and JavaScript files into the class
// source model consumed by the component extractor.

pub mod base;
pub mod language;
pub mod manager;
pub mod typescript;

pub use base::{
    BaseExtractor, ClassDeclaration, Decorator, FieldDeclaration, MethodDeclaration, ParsedFile,
    SourceSpan, Visibility,
};
pub use manager::ExtractorManager;
