//! Structure outline for one file
//!
//! One node per class. Component classes get grouped sections; a section is
//! only emitted when it has children, except `CSS`, which always reports
//! whether styles are defined.
//!
//! ```text
//! MyElement
//!   Properties (2)
//!     name: string = 'World'
//!     count: number = 0
//!   Methods (1)
//!     render()
//!   CSS (1)
//!     styles defined
//! ```

use crate::component::{Component, PropertyDescriptor};
use crate::extractors::base::{MethodDeclaration, ParsedFile, SourceSpan};
use crate::index::TagResolver;
use serde::Serialize;
use std::fmt;

/// A node of the outline tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineNode {
    pub label: String,
    /// Source location for navigable nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<SourceSpan>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    fn leaf(label: impl Into<String>, span: Option<SourceSpan>) -> Self {
        Self {
            label: label.into(),
            span,
            children: Vec::new(),
        }
    }

    fn section(title: &str, children: Vec<OutlineNode>) -> Self {
        Self {
            label: format!("{} ({})", title, children.len()),
            span: None,
            children,
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.label, indent = depth * 2)?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for OutlineNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Outline of every class in `file`, in source order
pub fn outline_file(resolver: &TagResolver, file: &ParsedFile) -> Vec<OutlineNode> {
    file.classes
        .iter()
        .map(|class| OutlineNode {
            label: class.display_name().to_string(),
            span: Some(class.span),
            children: resolver
                .extractor()
                .try_build_component(class)
                .map(|component| component_sections(&component))
                .unwrap_or_default(),
        })
        .collect()
}

/// Grouped sections for one component
pub fn component_sections(component: &Component<'_>) -> Vec<OutlineNode> {
    let mut sections = Vec::new();

    if !component.properties.is_empty() {
        sections.push(OutlineNode::section(
            "Properties",
            component.properties.iter().map(property_node).collect(),
        ));
    }
    if !component.state.is_empty() {
        sections.push(OutlineNode::section(
            "State",
            component.state.iter().map(property_node).collect(),
        ));
    }
    if !component.private_fields.is_empty() {
        sections.push(OutlineNode::section(
            "Private",
            component
                .private_fields
                .iter()
                .map(|f| OutlineNode::leaf(f.name.clone(), Some(f.span)))
                .collect(),
        ));
    }
    if !component.methods.is_empty() {
        sections.push(OutlineNode::section(
            "Methods",
            component
                .methods
                .iter()
                .map(|m| OutlineNode::leaf(method_label(m), Some(m.span)))
                .collect(),
        ));
    }
    if !component.events.is_empty() {
        sections.push(OutlineNode::section(
            "Events",
            component
                .events
                .iter()
                .map(|e| OutlineNode::leaf(e.clone(), None))
                .collect(),
        ));
    }

    let styles = if component.has_styles {
        "styles defined"
    } else {
        "no styles"
    };
    sections.push(OutlineNode::section(
        "CSS",
        vec![OutlineNode::leaf(styles, None)],
    ));

    sections
}

/// `name: type = default`, with `any` for an unknown type
pub fn property_label(property: &PropertyDescriptor<'_>) -> String {
    let mut label = format!(
        "{}: {}",
        property.name,
        property.declared_type.as_deref().unwrap_or("any")
    );
    if let Some(default) = &property.default_value_text {
        label.push_str(" = ");
        label.push_str(default);
    }
    label
}

pub fn method_label(method: &MethodDeclaration) -> String {
    format!("{}({})", method.name, method.parameters.join(", "))
}

fn property_node(property: &PropertyDescriptor<'_>) -> OutlineNode {
    OutlineNode::leaf(property_label(property), Some(property.field.span))
}
