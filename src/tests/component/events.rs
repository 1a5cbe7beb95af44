// Event discovery tests

use crate::component::{ComponentExtractor, events_of};
use crate::tests::helpers::parse_class;
use crate::workspace::config::DetectionConfig;

#[cfg(test)]
mod event_discovery_tests {
    use super::*;

    #[test]
    fn test_events_are_distinct_in_first_seen_order() {
        let class = parse_class(
            r#"
class A extends LitElement {
  connectedCallback() {
    this.dispatchEvent(new CustomEvent('open'));
    this.dispatchEvent(new CustomEvent("close"));
    this.dispatchEvent(new CustomEvent('open'));
  }
}
"#,
        );
        assert_eq!(events_of(&class), vec!["open".to_string(), "close".to_string()]);
    }

    #[test]
    fn test_event_options_and_generics() {
        let class = parse_class(
            r#"
class A extends LitElement {
  select(id: string) {
    this.dispatchEvent(new CustomEvent<{ id: string }>('item-selected', {
      detail: { id },
      bubbles: true,
      composed: true,
    }));
    this.dispatchEvent( new Event( `reset` ) );
  }
}
"#,
        );
        assert_eq!(
            events_of(&class),
            vec!["item-selected".to_string(), "reset".to_string()]
        );
    }

    #[test]
    fn test_dynamic_event_names_are_not_discovered() {
        let class = parse_class(
            r#"
class A extends LitElement {
  fire(name: string) {
    this.dispatchEvent(new CustomEvent(name));
    this.dispatchEvent(new CustomEvent('prefix-' + name));
    this.dispatchEvent(new CustomEvent(`${name}-changed`));
  }
}
"#,
        );
        // 'prefix-' is a literal first argument and is reported as written
        assert_eq!(events_of(&class), vec!["prefix-".to_string()]);
    }

    #[test]
    fn test_unrelated_constructors_are_ignored() {
        let class = parse_class(
            "class A extends LitElement {\n  go() {\n    this.dispatchEvent(new KeyboardEvent('keydown'));\n    emit(new CustomEvent('elsewhere'));\n  }\n}\n",
        );
        assert!(events_of(&class).is_empty());
    }

    #[test]
    fn test_configured_event_constructors() {
        let config = DetectionConfig {
            event_constructors: vec!["KeyboardEvent".to_string()],
            ..DetectionConfig::default()
        };
        let extractor = ComponentExtractor::new(config).unwrap();
        let class = parse_class(
            "class A extends LitElement {\n  go() {\n    this.dispatchEvent(new KeyboardEvent('keydown'));\n    this.dispatchEvent(new CustomEvent('open'));\n  }\n}\n",
        );
        assert_eq!(extractor.events_of(&class), vec!["keydown".to_string()]);
    }
}
