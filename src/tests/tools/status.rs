// Status report tests

use crate::index::TagResolver;
use crate::tests::helpers::{unique_temp_dir, write_file};
use crate::tools::status::WorkspaceStatus;
use crate::workspace::LitWorkspace;
use crate::workspace::config::LitConfig;

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn test_status_summarizes_components_and_duplicates() {
        let dir = unique_temp_dir("status_report");
        let root = dir.path();
        write_file(
            root,
            "a.ts",
            "@customElement('app-shell')\nexport class AppShell extends LitElement {\n  @property() page = 'home';\n  go() { this.dispatchEvent(new CustomEvent('navigate')); }\n}\n",
        );
        write_file(root, "b.ts", "@customElement('app-shell')\nexport class OldShell extends LitElement {}\n");
        write_file(root, "c.ts", "export const notAComponent = 1;\n");

        let workspace = LitWorkspace::scan(root, LitConfig::default()).unwrap();
        let status = WorkspaceStatus::collect(&workspace, &TagResolver::default());

        assert!(status.enabled);
        assert_eq!(status.files_scanned, 3);
        assert!(status.failures.is_empty());
        assert_eq!(status.components.len(), 2);
        assert_eq!(status.components[0].class_name.as_deref(), Some("AppShell"));
        assert_eq!(status.components[0].properties, vec!["page: any = 'home'"]);
        assert_eq!(status.components[0].methods, 1);
        assert_eq!(status.components[0].events, vec!["navigate"]);
        assert_eq!(status.duplicate_tags, vec!["app-shell"]);

        let text = status.to_string();
        assert!(text.contains("Status: ACTIVE ✓"));
        assert!(text.contains("Found 2 Lit component(s):"));
        assert!(text.contains("Component: <app-shell>"));
        assert!(text.contains("    - navigate"));
        assert!(text.contains("Duplicate tags (first declaration wins):"));
    }

    #[test]
    fn test_status_empty_workspace() {
        let dir = unique_temp_dir("status_empty");
        let workspace = LitWorkspace::scan(dir.path(), LitConfig::default()).unwrap();
        let status = WorkspaceStatus::collect(&workspace, &TagResolver::default());

        assert_eq!(status.files_scanned, 0);
        assert!(status.to_string().contains("No Lit components found."));
    }
}
