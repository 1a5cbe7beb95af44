// Source model for Litlens
//
// These types are the capability surface the component extractor needs from a
// front end: classes, their decorators, fields and methods, plus the raw text
// used by the pattern-based routines. The tree-sitter front end in
// `extractors::typescript` builds them; any other parser can build them too.

use serde::Serialize;
use std::path::PathBuf;
use tree_sitter::Node;

/// Location of a declaration in its file
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct SourceSpan {
    /// Start line number (1-based)
    pub start_line: u32,
    /// End line number (1-based)
    pub end_line: u32,
    pub start_byte: u32,
    pub end_byte: u32,
}

impl SourceSpan {
    pub fn from_node(node: &Node) -> Self {
        Self {
            start_line: (node.start_position().row + 1) as u32,
            end_line: (node.end_position().row + 1) as u32,
            start_byte: node.start_byte() as u32,
            end_byte: node.end_byte() as u32,
        }
    }

    /// Whether a byte offset falls inside this span
    pub fn contains(&self, offset: usize) -> bool {
        (self.start_byte as usize) <= offset && offset < (self.end_byte as usize)
    }
}

/// Explicit member visibility
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

/// A decorator (`@name` or `@name(args)`) attached to a class or member
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Decorator {
    /// Invoked identifier; for `@decorators.property()` this is `property`
    pub name: String,
    /// Text of each call argument, in order
    pub arguments: Vec<String>,
    /// Raw text between the call parentheses, `None` for bare `@name`
    pub argument_text: Option<String>,
    /// Full decorator text including `@`
    #[serde(skip)]
    pub text: String,
}

impl Decorator {
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

/// A field (class property) declaration
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FieldDeclaration {
    pub name: String,
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    /// Type annotation text without the leading colon
    pub declared_type: Option<String>,
    /// Initializer expression text without the leading `=`
    pub initializer: Option<String>,
    pub decorators: Vec<Decorator>,
    #[serde(skip)]
    pub text: String,
    pub span: SourceSpan,
}

impl FieldDeclaration {
    pub fn has_decorator(&self, name: &str) -> bool {
        self.decorators.iter().any(|d| d.is_named(name))
    }

    pub fn decorator(&self, name: &str) -> Option<&Decorator> {
        self.decorators.iter().find(|d| d.is_named(name))
    }
}

/// A method declaration
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MethodDeclaration {
    pub name: String,
    pub parameters: Vec<String>,
    pub is_static: bool,
    pub visibility: Option<Visibility>,
    pub span: SourceSpan,
}

/// A class declaration or class expression
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ClassDeclaration {
    /// `None` for anonymous class expressions
    pub name: Option<String>,
    /// Text of the immediate superclass clause (without `extends`)
    pub superclass: Option<String>,
    pub decorators: Vec<Decorator>,
    pub fields: Vec<FieldDeclaration>,
    pub methods: Vec<MethodDeclaration>,
    /// Full source text of the class, decorators included when they are part of the node
    #[serde(skip)]
    pub text: String,
    pub file_path: String,
    pub span: SourceSpan,
}

impl ClassDeclaration {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(anonymous)")
    }

    pub fn field(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn static_field(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields.iter().find(|f| f.is_static && f.name == name)
    }
}

/// All class declarations of one parsed source file, in source order
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub language: String,
    pub classes: Vec<ClassDeclaration>,
}

/// Shared text utilities for tree-sitter based front ends
pub struct BaseExtractor {
    pub language: String,
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(language: String, file_path: String, content: String) -> Self {
        Self {
            language,
            file_path,
            content,
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Extract visibility from explicit modifier tokens
    pub fn extract_visibility(&self, node: &Node) -> Option<Visibility> {
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                match child.kind() {
                    "accessibility_modifier" => {
                        return match self.get_node_text(&child).trim() {
                            "public" => Some(Visibility::Public),
                            "private" => Some(Visibility::Private),
                            "protected" => Some(Visibility::Protected),
                            _ => None,
                        };
                    }
                    "public" => return Some(Visibility::Public),
                    "private" => return Some(Visibility::Private),
                    "protected" => return Some(Visibility::Protected),
                    _ => continue,
                }
            }
        }
        None
    }
}

/// Strip matching quotes from a string literal.
///
/// Accepts `'x'`, `"x"` and backtick templates without interpolation. Returns
/// `None` for anything that is not a plain literal.
pub fn string_literal_value(text: &str) -> Option<String> {
    let text = text.trim();
    let mut chars = text.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if !matches!(first, '\'' | '"' | '`') || first != last {
        return None;
    }
    let inner = &text[1..text.len() - 1];
    if first == '`' && inner.contains("${") {
        return None;
    }
    Some(inner.to_string())
}
