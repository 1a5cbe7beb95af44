//! Field classification
//!
//! Splits a class's fields into reactive properties, internal state and
//! private fields, then adds properties declared through a
//! `static properties = { ... }` map. Property names are unique; the first
//! declaration wins, so decorated fields take precedence over map entries.

use super::patterns::{attribute_option, object_literal_keys};
use super::{ComponentExtractor, PropertyDescriptor};
use crate::extractors::base::{ClassDeclaration, FieldDeclaration, Visibility};

/// Result of `classify_fields`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassifiedFields<'a> {
    pub properties: Vec<PropertyDescriptor<'a>>,
    pub state: Vec<PropertyDescriptor<'a>>,
    pub private_fields: Vec<&'a FieldDeclaration>,
}

impl ComponentExtractor {
    pub fn classify_fields<'a>(&self, class: &'a ClassDeclaration) -> ClassifiedFields<'a> {
        let config = self.config();
        let mut classified = ClassifiedFields::default();

        for field in &class.fields {
            if field.name.trim().is_empty() {
                self.notify(|o| o.member_skipped(class, &field.text, "field has no name"));
                continue;
            }

            if field.has_decorator(&config.property_decorator) {
                if contains_name(&classified.properties, &field.name) {
                    self.notify(|o| o.member_skipped(class, &field.name, "duplicate property"));
                    continue;
                }
                let attribute_name = self.attribute_name(class, field);
                classified.properties.push(PropertyDescriptor {
                    name: field.name.clone(),
                    attribute_name: Some(attribute_name),
                    declared_type: field.declared_type.clone(),
                    default_value_text: field.initializer.clone(),
                    field,
                });
            } else if field.has_decorator(&config.state_decorator) {
                if contains_name(&classified.state, &field.name) {
                    self.notify(|o| o.member_skipped(class, &field.name, "duplicate state field"));
                    continue;
                }
                classified.state.push(PropertyDescriptor {
                    name: field.name.clone(),
                    attribute_name: None,
                    declared_type: field.declared_type.clone(),
                    default_value_text: field.initializer.clone(),
                    field,
                });
            } else if is_private(field) {
                classified.private_fields.push(field);
            }
        }

        self.add_static_properties(class, &mut classified.properties);
        classified
    }

    /// `attribute: '...'` from the property decorator options, else the field name
    fn attribute_name(&self, class: &ClassDeclaration, field: &FieldDeclaration) -> String {
        let options = field
            .decorator(&self.config().property_decorator)
            .and_then(|d| d.argument_text.as_deref())
            .unwrap_or_default();

        match attribute_option(options) {
            Some(attribute) => attribute,
            None => {
                if options.contains("attribute") {
                    self.notify(|o| {
                        o.member_skipped(class, &field.name, "attribute option is not a string literal")
                    });
                }
                field.name.clone()
            }
        }
    }

    fn add_static_properties<'a>(
        &self,
        class: &'a ClassDeclaration,
        properties: &mut Vec<PropertyDescriptor<'a>>,
    ) {
        let Some(map_field) = class.static_field("properties") else {
            return;
        };
        let Some(keys) = map_field.initializer.as_deref().and_then(object_literal_keys) else {
            self.notify(|o| {
                o.member_skipped(class, &map_field.name, "initializer is not an object literal")
            });
            return;
        };

        for key in keys {
            if contains_name(properties, &key) {
                continue;
            }
            properties.push(PropertyDescriptor {
                attribute_name: Some(key.clone()),
                name: key,
                declared_type: None,
                default_value_text: None,
                field: map_field,
            });
        }
    }
}

fn contains_name(descriptors: &[PropertyDescriptor<'_>], name: &str) -> bool {
    descriptors.iter().any(|d| d.name == name)
}

fn is_private(field: &FieldDeclaration) -> bool {
    field.visibility == Some(Visibility::Private)
        || field.name.starts_with('_')
        || field.name.starts_with('#')
}
