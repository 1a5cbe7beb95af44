// Litlens - Lit web component intelligence
//!
//! Litlens recognises Lit-style web components in TypeScript and JavaScript
//! sources, extracts their structure (tag name, reactive properties, internal
//! state, methods, dispatched events, styles) and resolves custom-element tag
//! names back to their declaring classes across a project.
//!
//! The extraction core (`component`, `index`) is synchronous and pure over
//! already-parsed class declarations. `extractors` and `workspace` are the host
//! side: tree-sitter parsing and project scanning. `tools` builds outline,
//! completion, navigation and status views on top of the core.

pub mod cli;
pub mod component;
pub mod error;
pub mod extractors;
pub mod index;
pub mod tools;
pub mod workspace;

#[cfg(test)]
pub mod tests;

// Re-export common types
pub use component::{Component, ComponentExtractor, ExtractionObserver, PropertyDescriptor};
pub use error::{LitError, Result};
pub use extractors::base::{ClassDeclaration, FieldDeclaration, MethodDeclaration, ParsedFile};
pub use index::{SourceUnit, TagIndex, TagResolver};
pub use workspace::LitWorkspace;
pub use workspace::config::LitConfig;
