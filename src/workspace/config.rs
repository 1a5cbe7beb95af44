//! Project configuration (`.litlens.toml`)
//!
//! Every field has a default, so a partial file only overrides what it names.

use crate::error::{LitError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".litlens.toml";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LitConfig {
    /// Disabling a project makes the scan return no files
    pub enabled: bool,
    pub detection: DetectionConfig,
    pub scan: ScanConfig,
}

impl Default for LitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            detection: DetectionConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

/// Names that mark a class as a component and drive the textual patterns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Superclass names that mark a component
    pub base_classes: Vec<String>,
    /// Class decorator registering the custom element
    pub register_decorator: String,
    /// Field decorator for reactive properties
    pub property_decorator: String,
    /// Field decorator for internal state
    pub state_decorator: String,
    pub render_method: String,
    pub dispatch_method: String,
    /// Constructors recognised in `dispatchEvent(new X('name'))`
    pub event_constructors: Vec<String>,
    /// Tag of the styling template literal (`css\`...\``)
    pub style_tag: String,
    pub styles_field: String,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            base_classes: vec!["LitElement".to_string(), "ReactiveElement".to_string()],
            register_decorator: "customElement".to_string(),
            property_decorator: "property".to_string(),
            state_decorator: "state".to_string(),
            render_method: "render".to_string(),
            dispatch_method: "dispatchEvent".to_string(),
            event_constructors: vec!["CustomEvent".to_string(), "Event".to_string()],
            style_tag: "css".to_string(),
            styles_field: "styles".to_string(),
        }
    }
}

/// File discovery settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    pub extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    /// Maximum file size to parse (in bytes)
    pub max_file_size: u64,
    /// Stop enumerating after this many files
    pub max_files: Option<usize>,
    /// Parser threads (defaults to CPU count)
    pub threads: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: ["ts", "js", "tsx", "jsx", "mjs"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            ignore_patterns: vec![
                "**/node_modules/**".to_string(),
                "**/dist/**".to_string(),
                "**/build/**".to_string(),
                "**/.git/**".to_string(),
                "**/*.min.js".to_string(),
                "**/*.d.ts".to_string(),
            ],
            max_file_size: 1024 * 1024, // 1MB default
            max_files: None,
            threads: None,
        }
    }
}

impl LitConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| LitError::io(path, e))?;
        let config: LitConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Find `.litlens.toml` in `start` or any parent directory and load it
    ///
    /// Returns the defaults when no file exists.
    pub fn discover(start: &Path) -> Result<Self> {
        match Self::find_config_file(start) {
            Some(path) => Self::load(&path),
            None => {
                debug!("No {} found above {}, using defaults", CONFIG_FILE_NAME, start.display());
                Ok(Self::default())
            }
        }
    }

    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        let mut current = Some(start);
        while let Some(dir) = current {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            current = dir.parent();
        }
        None
    }

    fn validate(&self) -> Result<()> {
        let detection = &self.detection;
        let required = [
            ("detection.register_decorator", &detection.register_decorator),
            ("detection.property_decorator", &detection.property_decorator),
            ("detection.state_decorator", &detection.state_decorator),
            ("detection.dispatch_method", &detection.dispatch_method),
            ("detection.style_tag", &detection.style_tag),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(LitError::Config(format!("{} must not be empty", key)));
            }
        }
        if detection.event_constructors.iter().all(|c| c.trim().is_empty()) {
            return Err(LitError::Config(
                "detection.event_constructors must name at least one constructor".to_string(),
            ));
        }
        if self.scan.max_files == Some(0) {
            return Err(LitError::Config("scan.max_files must be positive".to_string()));
        }
        Ok(())
    }
}
