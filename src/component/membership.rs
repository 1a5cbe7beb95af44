//! Component membership test
//!
//! A class is a component when its superclass clause names a base component
//! class, or when it looks like one: a reactive property or state field, or a
//! `render` method. Spurious matches are cheap; missed components are not.

use super::ComponentExtractor;
use crate::extractors::base::ClassDeclaration;

impl ComponentExtractor {
    pub fn is_component_class(&self, class: &ClassDeclaration) -> bool {
        self.extends_base_component(class)
            || self.has_reactive_fields(class)
            || self.has_render_method(class)
    }

    /// Only the immediate superclass clause is inspected
    fn extends_base_component(&self, class: &ClassDeclaration) -> bool {
        let Some(superclass) = class.superclass.as_deref() else {
            return false;
        };
        self.config()
            .base_classes
            .iter()
            .filter(|base| !base.is_empty())
            .any(|base| superclass.contains(base.as_str()))
    }

    fn has_reactive_fields(&self, class: &ClassDeclaration) -> bool {
        let config = self.config();
        class.fields.iter().any(|field| {
            field.has_decorator(&config.property_decorator)
                || field.has_decorator(&config.state_decorator)
        })
    }

    fn has_render_method(&self, class: &ClassDeclaration) -> bool {
        class
            .methods
            .iter()
            .any(|m| m.name == self.config().render_method)
    }
}
