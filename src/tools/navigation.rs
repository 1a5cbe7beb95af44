//! Tag navigation
//!
//! Finds custom-element tag mentions (`<x-y ...>`, `</x-y>`) in markup or
//! template text and resolves a mention to the class that declares it.
//! Only hyphenated lowercase names are considered; plain HTML tags never match.

use crate::extractors::base::ClassDeclaration;
use crate::index::{SourceUnit, TagResolver};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static TAG_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?([a-z][a-z0-9._]*-[a-z0-9._\-]*)").unwrap());

/// A tag name occurrence; `start..end` covers the name only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagMention {
    pub tag: String,
    pub start: usize,
    pub end: usize,
}

/// Where a class is declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub class_name: Option<String>,
}

impl Location {
    pub fn of(class: &ClassDeclaration) -> Self {
        Self {
            file: class.file_path.clone(),
            line: class.span.start_line,
            class_name: class.name.clone(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if let Some(name) = &self.class_name {
            write!(f, " ({})", name)?;
        }
        Ok(())
    }
}

/// Resolution of one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub tag: String,
    /// First declaring class in enumeration order
    pub location: Location,
    /// Class names of every declaring class, for disambiguation
    pub variants: Vec<String>,
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> -> {}", self.tag, self.location)?;
        if self.variants.len() > 1 {
            write!(f, " [candidates: {}]", self.variants.join(", "))?;
        }
        Ok(())
    }
}

/// Every custom-element tag mention in `text`, in order
pub fn tag_mentions(text: &str) -> Vec<TagMention> {
    TAG_MENTION_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| TagMention {
            tag: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// The mention whose tag name (or its opening `<`) covers `offset`
pub fn tag_at_offset(text: &str, offset: usize) -> Option<TagMention> {
    tag_mentions(text)
        .into_iter()
        .find(|m| m.start.saturating_sub(1) <= offset && offset <= m.end)
}

/// Resolve `tag` across `files`; `None` when no component declares it
pub fn goto_definition<'a, U, I>(resolver: &TagResolver, tag: &str, files: I) -> Option<Definition>
where
    U: SourceUnit + 'a + ?Sized,
    I: IntoIterator<Item = &'a U>,
{
    let candidates = resolver.all_candidates(tag, files);
    let first = candidates.first()?;

    Some(Definition {
        tag: tag.to_string(),
        location: Location::of(first),
        variants: candidates
            .iter()
            .filter_map(|class| class.name.clone())
            .collect(),
    })
}
