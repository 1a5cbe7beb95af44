//! Project scanning
//!
//! A `LitWorkspace` is a snapshot of every supported source file under a root
//! directory, parsed into the class source model. Files are enumerated in
//! sorted path order so tag resolution is deterministic, and parsed in
//! parallel. A file that cannot be read or parsed is kept as an error entry
//! and contributes no components.

pub mod config;

use crate::error::{LitError, Result};
use crate::extractors::base::ParsedFile;
use crate::extractors::manager::ExtractorManager;
use config::LitConfig;
use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub use config::{DetectionConfig, ScanConfig};

/// Result of parsing one file of the workspace
pub type FileResult = Result<ParsedFile>;

#[derive(Debug)]
pub struct LitWorkspace {
    root: PathBuf,
    config: LitConfig,
    files: Vec<FileResult>,
}

impl LitWorkspace {
    /// Scan `root` with the configuration found in or above it
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = LitConfig::discover(&root)?;
        Self::scan(root, config)
    }

    /// Scan `root` with an explicit configuration
    pub fn scan(root: impl Into<PathBuf>, config: LitConfig) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(LitError::Config(format!(
                "workspace root is not a directory: {}",
                root.display()
            )));
        }

        if !config.enabled {
            info!("Litlens disabled for {}", root.display());
            return Ok(Self {
                root,
                config,
                files: Vec::new(),
            });
        }

        let paths = discover_files(&root, &config.scan)?;
        info!("📁 Found {} files to scan under {}", paths.len(), root.display());

        let files = parse_files(&paths, &config.scan)?;
        let failed = files.iter().filter(|f| f.is_err()).count();
        if failed > 0 {
            warn!("{} of {} files could not be parsed", failed, files.len());
        }

        Ok(Self {
            root,
            config,
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &LitConfig {
        &self.config
    }

    /// Every file in enumeration order, failures included
    pub fn files(&self) -> &[FileResult] {
        &self.files
    }

    pub fn parsed_files(&self) -> impl Iterator<Item = &ParsedFile> + '_ {
        self.files.iter().filter_map(|f| f.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &LitError> + '_ {
        self.files.iter().filter_map(|f| f.as_ref().err())
    }

    /// The parsed file at `path` (absolute or relative to the root)
    pub fn file(&self, path: &Path) -> Option<&ParsedFile> {
        let wanted = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        self.parsed_files().find(|f| f.path == wanted)
    }
}

/// Enumerate supported files under `root`, sorted, honouring ignores and `max_files`
pub fn discover_files(root: &Path, scan: &ScanConfig) -> Result<Vec<PathBuf>> {
    let ignores = build_ignore_set(&scan.ignore_patterns)?;

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // match relative paths so the root's own location never triggers an ignore
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            !ignores.is_match(relative)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let supported = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| scan.extensions.iter().any(|e| e == ext));
        if !supported {
            continue;
        }

        if scan.max_files.is_some_and(|max| files.len() >= max) {
            warn!(
                "File budget of {} reached, remaining files under {} are not scanned",
                files.len(),
                root.display()
            );
            break;
        }
        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Parse files in parallel; output order matches `paths`
fn parse_files(paths: &[PathBuf], scan: &ScanConfig) -> Result<Vec<FileResult>> {
    let manager = ExtractorManager::new();
    let parse = |path: &PathBuf| {
        let result = manager.parse_file(path, scan.max_file_size);
        match &result {
            Ok(file) => debug!("Parsed {} ({} classes)", path.display(), file.classes.len()),
            Err(e) => warn!("⚠️  Skipping {}: {}", path.display(), e),
        }
        result
    };

    let threads = scan.threads.unwrap_or_else(num_cpus::get).max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| LitError::Config(format!("Failed to build thread pool: {}", e)))?;

    Ok(pool.install(|| paths.par_iter().map(parse).collect()))
}
