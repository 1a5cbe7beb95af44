//! Tag index and resolver
//!
//! Maps custom-element tag names to the classes that declare them, per file or
//! across a project's file set. Indexes are ephemeral: build one, query it,
//! rebuild after edits. When two classes declare the same tag, the first one in
//! enumeration order is kept.
//!
//! File sets may contain parse failures (`Result<ParsedFile, E>`); a failed
//! file contributes nothing and never stops a scan.

use crate::component::{Component, ComponentExtractor};
use crate::extractors::base::{ClassDeclaration, ParsedFile};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::LazyLock;

static DEFAULT_RESOLVER: LazyLock<TagResolver> = LazyLock::new(TagResolver::default);

/// One entry of a file set
pub trait SourceUnit {
    /// The parsed file, or `None` when the host failed to parse it
    fn parsed(&self) -> Option<&ParsedFile>;
}

impl SourceUnit for ParsedFile {
    fn parsed(&self) -> Option<&ParsedFile> {
        Some(self)
    }
}

impl<E> SourceUnit for Result<ParsedFile, E> {
    fn parsed(&self) -> Option<&ParsedFile> {
        self.as_ref().ok()
    }
}

impl<T: SourceUnit + ?Sized> SourceUnit for &T {
    fn parsed(&self) -> Option<&ParsedFile> {
        (**self).parsed()
    }
}

/// Insertion-ordered `tag -> class` map; the first insert of a tag wins
#[derive(Debug, Clone, Default)]
pub struct TagIndex<'a> {
    entries: Vec<(String, &'a ClassDeclaration)>,
    positions: HashMap<String, usize>,
}

impl<'a> TagIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the tag is already present; returns whether it was inserted
    pub fn insert(&mut self, tag: String, class: &'a ClassDeclaration) -> bool {
        if self.positions.contains_key(&tag) {
            return false;
        }
        self.positions.insert(tag.clone(), self.entries.len());
        self.entries.push((tag, class));
        true
    }

    pub fn get(&self, tag: &str) -> Option<&'a ClassDeclaration> {
        self.positions.get(tag).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.positions.contains_key(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a ClassDeclaration)> + '_ {
        self.entries.iter().map(|(tag, class)| (tag.as_str(), *class))
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(tag, _)| tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge `other` after `self`; existing tags keep their class
    pub fn extend_first_wins(&mut self, other: TagIndex<'a>) {
        for (tag, class) in other.entries {
            self.insert(tag, class);
        }
    }
}

/// Resolves tags over files using one `ComponentExtractor`
#[derive(Debug, Clone, Default)]
pub struct TagResolver {
    extractor: ComponentExtractor,
}

impl TagResolver {
    pub fn new(extractor: ComponentExtractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &ComponentExtractor {
        &self.extractor
    }

    /// Every component-qualifying class in one file, keyed by tag
    pub fn find_candidates<'a>(&self, file: &'a ParsedFile) -> TagIndex<'a> {
        let mut index = TagIndex::new();
        for class in &file.classes {
            if let Some(component) = self.extractor.try_build_component(class) {
                if !index.insert(component.tag_name, class) {
                    tracing::debug!(
                        "Duplicate tag in {}: keeping first declaration, ignoring {}",
                        file.path.display(),
                        class.display_name()
                    );
                }
            }
        }
        index
    }

    /// First declaring class in enumeration order; stops at the first hit
    pub fn resolve<'a, U, I>(&self, tag: &str, files: I) -> Option<&'a ClassDeclaration>
    where
        U: SourceUnit + 'a + ?Sized,
        I: IntoIterator<Item = &'a U>,
    {
        files
            .into_iter()
            .filter_map(|unit| unit.parsed())
            .find_map(|file| self.find_candidates(file).get(tag))
    }

    /// Every declaring class, one per file, in enumeration order
    pub fn all_candidates<'a, U, I>(&self, tag: &str, files: I) -> Vec<&'a ClassDeclaration>
    where
        U: SourceUnit + 'a + ?Sized,
        I: IntoIterator<Item = &'a U>,
    {
        files
            .into_iter()
            .filter_map(|unit| unit.parsed())
            .filter_map(|file| self.find_candidates(file).get(tag))
            .collect()
    }

    /// Project-wide index; the first file declaring a tag wins
    pub fn build_index<'a, U, I>(&self, files: I) -> TagIndex<'a>
    where
        U: SourceUnit + 'a + ?Sized,
        I: IntoIterator<Item = &'a U>,
    {
        let mut index = TagIndex::new();
        for file in files.into_iter().filter_map(|unit| unit.parsed()) {
            index.extend_first_wins(self.find_candidates(file));
        }
        index
    }

    /// Same result as `build_index`, with per-file work on the rayon pool
    pub fn build_index_parallel<'a, U>(&self, files: &'a [U]) -> TagIndex<'a>
    where
        U: SourceUnit + Sync,
    {
        let per_file: Vec<TagIndex<'a>> = files
            .par_iter()
            .filter_map(|unit| unit.parsed())
            .map(|file| self.find_candidates(file))
            .collect();

        let mut index = TagIndex::new();
        for file_index in per_file {
            index.extend_first_wins(file_index);
        }
        index
    }

    /// Every component of every file, in enumeration order
    pub fn components<'a, U, I>(&self, files: I) -> Vec<Component<'a>>
    where
        U: SourceUnit + 'a + ?Sized,
        I: IntoIterator<Item = &'a U>,
    {
        files
            .into_iter()
            .filter_map(|unit| unit.parsed())
            .flat_map(|file| file.classes.iter())
            .filter_map(|class| self.extractor.try_build_component(class))
            .collect()
    }
}

/// Process-wide resolver with the default configuration
pub fn default_resolver() -> &'static TagResolver {
    &DEFAULT_RESOLVER
}

pub fn find_candidates(file: &ParsedFile) -> TagIndex<'_> {
    default_resolver().find_candidates(file)
}

pub fn resolve<'a, U, I>(tag: &str, files: I) -> Option<&'a ClassDeclaration>
where
    U: SourceUnit + 'a + ?Sized,
    I: IntoIterator<Item = &'a U>,
{
    default_resolver().resolve(tag, files)
}

pub fn all_candidates<'a, U, I>(tag: &str, files: I) -> Vec<&'a ClassDeclaration>
where
    U: SourceUnit + 'a + ?Sized,
    I: IntoIterator<Item = &'a U>,
{
    default_resolver().all_candidates(tag, files)
}
