// try_build_component contract tests

use crate::component::{ComponentExtractor, default_extractor, try_build_component};
use crate::tests::helpers::parse_class;
use crate::workspace::config::DetectionConfig;

const FULL_COMPONENT: &str = r#"
@customElement('user-card')
export class UserCard extends LitElement {
  static styles = css`:host { display: block; }`;

  @property({ type: String }) name = 'Anonymous';
  @property({ type: Boolean, attribute: 'is-admin' }) isAdmin = false;
  @state() private _expanded = false;
  private _clicks = 0;

  render() {
    return html`<div @click=${this._toggle}>${this.name}</div>`;
  }

  private _toggle() {
    this._expanded = !this._expanded;
    this.dispatchEvent(new CustomEvent('toggle', { detail: this._expanded }));
  }

  remove(reason: string, silent = false) {
    this.dispatchEvent(new CustomEvent('removed'));
  }
}
"#;

#[cfg(test)]
mod build_component_tests {
    use super::*;

    #[test]
    fn test_full_component() {
        let class = parse_class(FULL_COMPONENT);
        let component = try_build_component(&class).expect("component");

        assert_eq!(component.tag_name, "user-card");
        assert_eq!(component.class_name(), Some("UserCard"));
        assert!(std::ptr::eq(component.class, &class));

        let attributes: Vec<&str> = component.attribute_names().collect();
        assert_eq!(attributes, vec!["name", "is-admin"]);
        assert_eq!(component.state.len(), 1);
        assert_eq!(component.private_fields.len(), 1);
        assert_eq!(component.private_fields[0].name, "_clicks");

        let methods: Vec<&str> = component.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, vec!["render", "_toggle", "remove"]);
        assert_eq!(component.methods[2].parameters, vec!["reason".to_string(), "silent".to_string()]);

        assert_eq!(component.events, vec!["toggle".to_string(), "removed".to_string()]);
        assert!(component.has_styles);
    }

    #[test]
    fn test_build_is_idempotent() {
        let class = parse_class(FULL_COMPONENT);
        let first = try_build_component(&class);
        let second = try_build_component(&class);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_not_a_component_yields_none() {
        let class = parse_class("class Helper {\n  compute() { return 1; }\n}\n");
        assert_eq!(try_build_component(&class), None);
    }

    #[test]
    fn test_duck_typed_component() {
        // No base class; the render method is enough
        let class = parse_class("class StatusBadge {\n  render() { return 'ok'; }\n}\n");
        let component = try_build_component(&class).expect("component");
        assert_eq!(component.tag_name, "status-badge");
        assert!(component.properties.is_empty());
        assert!(!component.has_styles);
    }

    #[test]
    fn test_registered_component_with_any_class_name() {
        let class = parse_class("@customElement('x-y')\nclass Q extends LitElement {}\n");
        assert_eq!(try_build_component(&class).map(|c| c.tag_name), Some("x-y".to_string()));
    }

    #[test]
    fn test_serialized_shape() {
        let class = parse_class(FULL_COMPONENT);
        let component = try_build_component(&class).unwrap();
        let json = serde_json::to_value(&component).unwrap();

        assert_eq!(json["tagName"], "user-card");
        assert_eq!(json["class"]["name"], "UserCard");
        assert_eq!(json["class"]["file"], "test.ts");
        // `export class` starts on the line after the decorator
        assert_eq!(json["class"]["line"], 3);
        assert_eq!(json["properties"][1]["attributeName"], "is-admin");
        assert_eq!(json["state"][0]["attributeName"], serde_json::Value::Null);
        assert_eq!(json["events"][0], "toggle");
        assert_eq!(json["hasStyles"], true);
    }

    #[test]
    fn test_display() {
        let class = parse_class(FULL_COMPONENT);
        let component = try_build_component(&class).unwrap();
        assert_eq!(component.to_string(), "<user-card> UserCard (test.ts:3)");
    }

    #[test]
    fn test_default_extractor_uses_default_config() {
        assert_eq!(default_extractor().config(), &DetectionConfig::default());
        let extractor = ComponentExtractor::default();
        assert_eq!(extractor.config(), &DetectionConfig::default());
    }

    #[test]
    fn test_constructor_names_are_escaped() {
        let config = DetectionConfig {
            event_constructors: vec!["Custom(Event".to_string()],
            ..DetectionConfig::default()
        };
        assert!(ComponentExtractor::new(config).is_ok());
    }
}
