// Component membership tests

use crate::component::{ComponentExtractor, is_component_class, try_build_component};
use crate::tests::helpers::parse_class;
use crate::workspace::config::DetectionConfig;

#[cfg(test)]
mod membership_tests {
    use super::*;

    #[test]
    fn test_extends_lit_element() {
        let class = parse_class("class Plain extends LitElement {}\n");
        assert!(is_component_class(&class));
    }

    #[test]
    fn test_extends_reactive_element() {
        let class = parse_class("class Low extends ReactiveElement {}\n");
        assert!(is_component_class(&class));
    }

    #[test]
    fn test_superclass_reference_is_textual() {
        // Mixins and qualified names still mention the base class
        let class = parse_class("class Mixed extends Focusable(lit.LitElement) {}\n");
        assert!(is_component_class(&class));
    }

    #[test]
    fn test_property_decorator_marks_component() {
        let class = parse_class("class Widget extends Base {\n  @property() label = '';\n}\n");
        assert!(is_component_class(&class));
    }

    #[test]
    fn test_state_decorator_marks_component() {
        let class = parse_class("class Widget {\n  @state() private _busy = false;\n}\n");
        assert!(is_component_class(&class));
    }

    #[test]
    fn test_render_method_marks_component() {
        let class = parse_class("class Widget {\n  render() { return null; }\n}\n");
        assert!(is_component_class(&class));
    }

    #[test]
    fn test_plain_class_is_not_a_component() {
        let class = parse_class(
            "class UserService extends BaseService {\n  private cache = new Map();\n  @inject() api = null;\n  fetch(id: string) {}\n}\n",
        );
        assert!(!is_component_class(&class));
        assert_eq!(try_build_component(&class), None);
    }

    #[test]
    fn test_render_prefix_is_not_render() {
        let class = parse_class("class Report {\n  renderRows() {}\n}\n");
        assert!(!is_component_class(&class));
    }

    #[test]
    fn test_custom_base_classes() {
        let config = DetectionConfig {
            base_classes: vec!["FASTElement".to_string()],
            ..DetectionConfig::default()
        };
        let extractor = ComponentExtractor::new(config).unwrap();

        let fast = parse_class("class Fast extends FASTElement {}\n");
        let lit = parse_class("class Lit extends LitElement {}\n");
        assert!(extractor.is_component_class(&fast));
        assert!(!extractor.is_component_class(&lit));
    }
}
