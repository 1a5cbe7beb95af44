//! Attribute and event completions for a custom-element tag
//!
//! The tag is resolved across the file set (first declaring file wins) and its
//! component yields one item per reactive property and one `@event` item per
//! dispatched event. State and private fields are never offered.

use crate::extractors::base::ClassDeclaration;
use crate::index::{SourceUnit, TagResolver};
use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Attribute,
    Event,
}

/// One completion suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// Text inserted into the markup
    pub label: String,
    pub kind: CompletionKind,
    pub type_text: String,
    /// ` = default` for attributes with a default value
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tail_text: String,
}

impl fmt::Display for CompletionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}  [{}]", self.label, self.tail_text, self.type_text)
    }
}

/// Completions for `tag`; empty when the tag is not declared in `files`
pub fn complete_for_tag<'a, U, I>(resolver: &TagResolver, tag: &str, files: I) -> Vec<CompletionItem>
where
    U: SourceUnit + 'a + ?Sized,
    I: IntoIterator<Item = &'a U>,
{
    let Some(class) = resolver.resolve(tag, files) else {
        debug!("No component found for tag <{}>", tag);
        return Vec::new();
    };
    let items = completions_for_class(resolver, class);
    debug!("Providing {} completions for <{}>", items.len(), tag);
    items
}

/// Completions offered by one component class
pub fn completions_for_class(resolver: &TagResolver, class: &ClassDeclaration) -> Vec<CompletionItem> {
    let Some(component) = resolver.extractor().try_build_component(class) else {
        return Vec::new();
    };

    let attributes = component.properties.iter().map(|property| CompletionItem {
        label: property
            .attribute_name
            .clone()
            .unwrap_or_else(|| property.name.clone()),
        kind: CompletionKind::Attribute,
        type_text: property
            .declared_type
            .clone()
            .unwrap_or_else(|| "any".to_string()),
        tail_text: property
            .default_value_text
            .as_ref()
            .map(|default| format!(" = {}", default))
            .unwrap_or_default(),
    });

    let events = component.events.iter().map(|event| CompletionItem {
        label: format!("@{}", event),
        kind: CompletionKind::Event,
        type_text: "event".to_string(),
        tail_text: String::new(),
    });

    attributes.chain(events).collect()
}
