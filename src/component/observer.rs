//! Optional extraction diagnostics
//!
//! The extractor reports what it decided through this trait instead of
//! logging directly. Nothing is reported unless an observer is attached.

use super::Component;
use crate::extractors::base::ClassDeclaration;
use std::fmt;

/// Why a class yielded no component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Neither a component base class nor any component marker
    NotAComponent,
    /// Every tag-name strategy failed
    NoTagName,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotAComponent => write!(f, "not a component"),
            Rejection::NoTagName => write!(f, "no tag name"),
        }
    }
}

/// Hooks called during extraction. All default to no-ops.
pub trait ExtractionObserver: Send + Sync {
    fn component_built(&self, _component: &Component<'_>) {}

    fn class_rejected(&self, _class: &ClassDeclaration, _reason: Rejection) {}

    fn tag_derived(&self, _class: &ClassDeclaration, _tag: &str, _strategy: &str) {}

    /// A member or annotation that did not match any expected shape
    fn member_skipped(&self, _class: &ClassDeclaration, _member: &str, _reason: &str) {}
}

/// Forwards extraction events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ExtractionObserver for TracingObserver {
    fn component_built(&self, component: &Component<'_>) {
        tracing::info!(
            "Found component <{}> with {} properties, {} state fields, {} events",
            component.tag_name,
            component.properties.len(),
            component.state.len(),
            component.events.len()
        );
    }

    fn class_rejected(&self, class: &ClassDeclaration, reason: Rejection) {
        tracing::debug!("Class {} skipped: {}", class.display_name(), reason);
    }

    fn tag_derived(&self, class: &ClassDeclaration, tag: &str, strategy: &str) {
        tracing::debug!(
            "Tag name '{}' for class {} from {}",
            tag,
            class.display_name(),
            strategy
        );
    }

    fn member_skipped(&self, class: &ClassDeclaration, member: &str, reason: &str) {
        tracing::debug!("{}.{} ignored: {}", class.display_name(), member, reason);
    }
}
