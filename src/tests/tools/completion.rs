// Completion tool tests

use crate::index::TagResolver;
use crate::tests::helpers::parse_as;
use crate::tools::completion::{CompletionItem, CompletionKind, complete_for_tag};

#[cfg(test)]
mod completion_tests {
    use super::*;

    #[test]
    fn test_attribute_and_event_completions() {
        let files = vec![
            parse_as("other.ts", "class Unrelated extends LitElement {}\n"),
            parse_as(
                "picker.ts",
                r#"
@customElement('color-picker')
class ColorPicker extends LitElement {
  @property({ attribute: 'selected-color' }) selectedColor: string = '#fff';
  @property({ type: Boolean }) disabled;
  @state() private _open = false;

  pick(color: string) {
    this.dispatchEvent(new CustomEvent('color-change', { detail: color }));
  }
}
"#,
            ),
        ];

        let items = complete_for_tag(&TagResolver::default(), "color-picker", &files);
        assert_eq!(
            items,
            vec![
                CompletionItem {
                    label: "selected-color".to_string(),
                    kind: CompletionKind::Attribute,
                    type_text: "string".to_string(),
                    tail_text: " = '#fff'".to_string(),
                },
                CompletionItem {
                    label: "disabled".to_string(),
                    kind: CompletionKind::Attribute,
                    type_text: "any".to_string(),
                    tail_text: String::new(),
                },
                CompletionItem {
                    label: "@color-change".to_string(),
                    kind: CompletionKind::Event,
                    type_text: "event".to_string(),
                    tail_text: String::new(),
                },
            ]
        );
        assert_eq!(items[0].to_string(), "selected-color = '#fff'  [string]");
    }

    #[test]
    fn test_unknown_tag_has_no_completions() {
        let files = vec![parse_as("a.ts", "class SomeThing extends LitElement {}\n")];
        assert!(complete_for_tag(&TagResolver::default(), "no-such-tag", &files).is_empty());
    }

    #[test]
    fn test_serialized_item() {
        let item = CompletionItem {
            label: "@open".to_string(),
            kind: CompletionKind::Event,
            type_text: "event".to_string(),
            tail_text: String::new(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "event");
        assert_eq!(json["typeText"], "event");
        assert!(json.get("tailText").is_none());
    }
}
