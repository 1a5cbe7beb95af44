//! Component extraction
//!
//! Turns one `ClassDeclaration` into a `Component`: the tag name, reactive
//! properties, internal state, private fields, methods, dispatched events and
//! whether styles are defined. Extraction is a pure function of the class;
//! every call builds a fresh `Component`, and a class either yields a complete
//! component or nothing.
//!
//! - **membership**: is this class a component at all
//! - **tag_name**: ordered tag-name strategies
//! - **fields**: properties / state / private fields, static properties map
//! - **patterns**: textual event, style and option matching
//! - **observer**: optional diagnostics hooks

pub mod fields;
mod membership;
pub mod observer;
pub mod patterns;
pub mod tag_name;

pub use fields::ClassifiedFields;
pub use observer::{ExtractionObserver, Rejection, TracingObserver};
pub use tag_name::to_kebab_case;

use crate::error::Result;
use crate::extractors::base::{ClassDeclaration, FieldDeclaration, MethodDeclaration};
use crate::workspace::config::DetectionConfig;
use patterns::Patterns;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::{Arc, LazyLock};

static DEFAULT_EXTRACTOR: LazyLock<ComponentExtractor> = LazyLock::new(|| {
    ComponentExtractor::new(DetectionConfig::default())
        .expect("default detection patterns are valid regexes")
});

/// A reactive property or state field of a component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor<'a> {
    pub name: String,
    /// Externally visible attribute; always `None` for state
    pub attribute_name: Option<String>,
    pub declared_type: Option<String>,
    pub default_value_text: Option<String>,
    /// Field the descriptor came from (the `properties` map field for map entries)
    #[serde(skip)]
    pub field: &'a FieldDeclaration,
}

/// Structural model of one component class
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component<'a> {
    pub tag_name: String,
    #[serde(rename = "class", serialize_with = "serialize_class_ref")]
    pub class: &'a ClassDeclaration,
    pub properties: Vec<PropertyDescriptor<'a>>,
    pub state: Vec<PropertyDescriptor<'a>>,
    pub private_fields: Vec<&'a FieldDeclaration>,
    pub methods: Vec<&'a MethodDeclaration>,
    /// Distinct event names in first-seen order
    pub events: Vec<String>,
    pub has_styles: bool,
}

impl<'a> Component<'a> {
    pub fn class_name(&self) -> Option<&'a str> {
        self.class.name.as_deref()
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor<'a>> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Attribute names as written in markup
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.properties
            .iter()
            .map(|p| p.attribute_name.as_deref().unwrap_or(&p.name))
    }
}

impl fmt::Display for Component<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}> {} ({}:{})",
            self.tag_name,
            self.class.display_name(),
            self.class.file_path,
            self.class.span.start_line
        )
    }
}

#[derive(Serialize)]
struct ClassRef<'a> {
    name: Option<&'a str>,
    file: &'a str,
    line: u32,
}

fn serialize_class_ref<S: Serializer>(
    class: &&ClassDeclaration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    ClassRef {
        name: class.name.as_deref(),
        file: &class.file_path,
        line: class.span.start_line,
    }
    .serialize(serializer)
}

/// Builds `Component`s according to a `DetectionConfig`
#[derive(Clone)]
pub struct ComponentExtractor {
    config: DetectionConfig,
    patterns: Patterns,
    observer: Option<Arc<dyn ExtractionObserver>>,
}

impl fmt::Debug for ComponentExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentExtractor")
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for ComponentExtractor {
    fn default() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }
}

impl ComponentExtractor {
    pub fn new(config: DetectionConfig) -> Result<Self> {
        let patterns = Patterns::compile(&config)?;
        Ok(Self {
            config,
            patterns,
            observer: None,
        })
    }

    /// Attach diagnostics hooks
    pub fn with_observer(mut self, observer: Arc<dyn ExtractionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub(crate) fn notify(&self, report: impl FnOnce(&dyn ExtractionObserver)) {
        if let Some(observer) = &self.observer {
            report(observer.as_ref());
        }
    }

    /// Build the component for a class, or `None` if it is not a component
    /// or has no resolvable tag name
    pub fn try_build_component<'a>(&self, class: &'a ClassDeclaration) -> Option<Component<'a>> {
        if !self.is_component_class(class) {
            self.notify(|o| o.class_rejected(class, Rejection::NotAComponent));
            return None;
        }
        let Some(tag_name) = self.tag_name_of(class) else {
            self.notify(|o| o.class_rejected(class, Rejection::NoTagName));
            return None;
        };

        let ClassifiedFields {
            properties,
            state,
            private_fields,
        } = self.classify_fields(class);

        let component = Component {
            tag_name,
            class,
            properties,
            state,
            private_fields,
            methods: self.methods_of(class),
            events: self.events_of(class),
            has_styles: self.has_styles(class),
        };
        self.notify(|o| o.component_built(&component));
        Some(component)
    }

    pub fn methods_of<'a>(&self, class: &'a ClassDeclaration) -> Vec<&'a MethodDeclaration> {
        class.methods.iter().collect()
    }

    /// Event names passed as literals to dispatched event constructors
    pub fn events_of(&self, class: &ClassDeclaration) -> Vec<String> {
        self.patterns.events_in(&class.text)
    }

    /// A `styles` field or a styling tagged template anywhere in the class
    pub fn has_styles(&self, class: &ClassDeclaration) -> bool {
        class.fields.iter().any(|f| f.name == self.config.styles_field)
            || self.patterns.has_style_template(&class.text)
    }
}

/// Process-wide extractor with the default configuration
pub fn default_extractor() -> &'static ComponentExtractor {
    &DEFAULT_EXTRACTOR
}

pub fn is_component_class(class: &ClassDeclaration) -> bool {
    default_extractor().is_component_class(class)
}

pub fn tag_name_of(class: &ClassDeclaration) -> Option<String> {
    default_extractor().tag_name_of(class)
}

pub fn classify_fields(class: &ClassDeclaration) -> ClassifiedFields<'_> {
    default_extractor().classify_fields(class)
}

pub fn events_of(class: &ClassDeclaration) -> Vec<String> {
    default_extractor().events_of(class)
}

pub fn has_styles(class: &ClassDeclaration) -> bool {
    default_extractor().has_styles(class)
}

pub fn try_build_component(class: &ClassDeclaration) -> Option<Component<'_>> {
    default_extractor().try_build_component(class)
}
