//! Workspace status report

use crate::index::TagResolver;
use crate::tools::outline::property_label;
use crate::workspace::LitWorkspace;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Summary of one component for the status report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub tag: String,
    pub class_name: Option<String>,
    pub file: String,
    pub line: u32,
    pub properties: Vec<String>,
    pub state: Vec<String>,
    pub methods: usize,
    pub events: Vec<String>,
    pub has_styles: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceStatus {
    pub version: String,
    pub root: String,
    pub enabled: bool,
    pub files_scanned: usize,
    pub failures: Vec<String>,
    pub components: Vec<ComponentSummary>,
    /// Tags declared by more than one class; the first declaration is used
    pub duplicate_tags: Vec<String>,
}

impl WorkspaceStatus {
    pub fn collect(workspace: &LitWorkspace, resolver: &TagResolver) -> Self {
        let components: Vec<ComponentSummary> = resolver
            .components(workspace.files())
            .into_iter()
            .map(|component| ComponentSummary {
                tag: component.tag_name.clone(),
                class_name: component.class_name().map(str::to_string),
                file: component.class.file_path.clone(),
                line: component.class.span.start_line,
                properties: component.properties.iter().map(property_label).collect(),
                state: component.state.iter().map(property_label).collect(),
                methods: component.methods.len(),
                events: component.events.clone(),
                has_styles: component.has_styles,
            })
            .collect();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut duplicate_tags = Vec::new();
        for summary in &components {
            let count = counts.entry(summary.tag.as_str()).or_default();
            *count += 1;
            if *count == 2 {
                duplicate_tags.push(summary.tag.clone());
            }
        }

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            root: workspace.root().display().to_string(),
            enabled: workspace.config().enabled,
            files_scanned: workspace.files().len(),
            failures: workspace.failures().map(|e| e.to_string()).collect(),
            components,
            duplicate_tags,
        }
    }
}

impl fmt::Display for WorkspaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Litlens v{} ===", self.version)?;
        writeln!(f)?;
        if self.enabled {
            writeln!(f, "Status: ACTIVE ✓")?;
        } else {
            writeln!(f, "Status: DISABLED")?;
        }
        writeln!(f, "Root: {}", self.root)?;
        writeln!(f, "Files scanned: {}", self.files_scanned)?;
        if !self.failures.is_empty() {
            writeln!(f, "Failures: {}", self.failures.len())?;
            for failure in &self.failures {
                writeln!(f, "  ⚠️  {}", failure)?;
            }
        }
        writeln!(f)?;

        if self.components.is_empty() {
            return writeln!(f, "No Lit components found.");
        }

        writeln!(f, "Found {} Lit component(s):", self.components.len())?;
        writeln!(f)?;
        for component in &self.components {
            writeln!(f, "Component: <{}>", component.tag)?;
            writeln!(
                f,
                "  Class: {}",
                component.class_name.as_deref().unwrap_or("(anonymous)")
            )?;
            writeln!(f, "  File: {}:{}", component.file, component.line)?;
            writeln!(f, "  Properties: {}", component.properties.len())?;
            for property in &component.properties {
                writeln!(f, "    - {}", property)?;
            }
            writeln!(f, "  State: {}", component.state.len())?;
            for state in &component.state {
                writeln!(f, "    - {}", state)?;
            }
            writeln!(f, "  Methods: {}", component.methods)?;
            writeln!(f, "  Events: {}", component.events.len())?;
            for event in &component.events {
                writeln!(f, "    - {}", event)?;
            }
            writeln!(f, "  Has Styles: {}", component.has_styles)?;
            writeln!(f)?;
        }

        if !self.duplicate_tags.is_empty() {
            writeln!(f, "Duplicate tags (first declaration wins):")?;
            for tag in &self.duplicate_tags {
                writeln!(f, "  - <{}>", tag)?;
            }
        }
        Ok(())
    }
}
