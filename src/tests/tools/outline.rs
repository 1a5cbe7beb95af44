// Outline tool tests

use crate::index::TagResolver;
use crate::tests::helpers::parse;
use crate::tools::outline::outline_file;

#[cfg(test)]
mod outline_tests {
    use super::*;

    #[test]
    fn test_component_sections() {
        let file = parse(
            r#"
@customElement('todo-item')
export class TodoItem extends LitElement {
  @property({ type: String }) label: string = 'Untitled';
  @property() done;
  @state() private _editing = false;
  private _draft = '';

  render() { return html``; }
  toggle(force?: boolean) {
    this.dispatchEvent(new CustomEvent('toggled'));
  }
}
"#,
        );
        let outline = outline_file(&TagResolver::default(), &file);
        assert_eq!(outline.len(), 1);

        let node = &outline[0];
        assert_eq!(node.label, "TodoItem");
        let sections: Vec<&str> = node.children.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            sections,
            vec!["Properties (2)", "State (1)", "Private (1)", "Methods (2)", "Events (1)", "CSS (1)"]
        );

        let properties: Vec<&str> = node.children[0].children.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(properties, vec!["label: string = 'Untitled'", "done: any"]);
        assert_eq!(node.children[1].children[0].label, "_editing: any = false");
        assert_eq!(node.children[2].children[0].label, "_draft");

        let methods: Vec<&str> = node.children[3].children.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(methods, vec!["render()", "toggle(force)"]);
        assert_eq!(node.children[4].children[0].label, "toggled");
        assert_eq!(node.children[5].children[0].label, "no styles");
    }

    #[test]
    fn test_empty_sections_are_omitted_but_css_is_not() {
        let file = parse("class BareElement extends LitElement {\n  static styles = css`p {}`;\n}\n");
        let outline = outline_file(&TagResolver::default(), &file);
        let node = &outline[0];
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].label, "CSS (1)");
        assert_eq!(node.children[0].children[0].label, "styles defined");
    }

    #[test]
    fn test_non_components_have_no_sections() {
        let file = parse("class Helper {}\nconst Anon = class {};\n");
        let outline = outline_file(&TagResolver::default(), &file);
        let labels: Vec<&str> = outline.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Helper", "(anonymous)"]);
        assert!(outline.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_display_indents_children() {
        let file = parse("class BareElement extends LitElement {}\n");
        let outline = outline_file(&TagResolver::default(), &file);
        assert_eq!(
            outline[0].to_string(),
            "BareElement\n  CSS (1)\n    no styles\n"
        );
    }
}
