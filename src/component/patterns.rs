//! Textual pattern matching over class source
//!
//! Event discovery, style-template detection, decorator option parsing and
//! static-properties-map key scanning work on plain text rather than the
//! syntax tree. Each routine is self-contained so a tree-based version can
//! replace it without touching the rest of the extractor.
//!
//! Known limitation: event names built dynamically (concatenation, variables,
//! interpolated templates) are not discovered.

use crate::error::Result;
use crate::workspace::config::DetectionConfig;
use regex::Regex;
use std::sync::LazyLock;

static ATTRIBUTE_OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{[^}]*\battribute\s*:\s*['"`]([A-Za-z0-9_:.\-]+)['"`]"#).unwrap()
});

/// Regexes compiled from a `DetectionConfig`
#[derive(Debug, Clone)]
pub struct Patterns {
    events: Regex,
    style_template: Regex,
}

impl Patterns {
    pub fn compile(config: &DetectionConfig) -> Result<Self> {
        let constructors = config
            .event_constructors
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        // dispatchEvent(new CustomEvent<Detail>('name'
        let events = Regex::new(&format!(
            r#"\b{}\s*\(\s*new\s+(?:{})\s*(?:<[^>()]*>)?\s*\(\s*(?:'([^'\\\r\n]+)'|"([^"\\\r\n]+)"|`([^`\\$]+)`)"#,
            regex::escape(config.dispatch_method.trim()),
            constructors
        ))?;

        let style_template = Regex::new(&format!(
            r"\b{}\s*`",
            regex::escape(config.style_tag.trim())
        ))?;

        Ok(Self {
            events,
            style_template,
        })
    }

    /// Distinct event names dispatched in `source`, in first-seen order
    pub fn events_in(&self, source: &str) -> Vec<String> {
        let mut events: Vec<String> = Vec::new();
        for captures in self.events.captures_iter(source) {
            let name = captures
                .get(1)
                .or_else(|| captures.get(2))
                .or_else(|| captures.get(3))
                .map(|m| m.as_str().trim());
            if let Some(name) = name {
                if !name.is_empty() && !events.iter().any(|e| e == name) {
                    events.push(name.to_string());
                }
            }
        }
        events
    }

    pub fn has_style_template(&self, source: &str) -> bool {
        self.style_template.is_match(source)
    }
}

/// Explicit `attribute: 'name'` option inside a decorator's argument text
pub fn attribute_option(argument_text: &str) -> Option<String> {
    ATTRIBUTE_OPTION_RE
        .captures(argument_text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Top-level keys of an object literal, in order, without duplicates.
///
/// Returns `None` when `text` is not an object literal. Keys of nested
/// objects (`{ foo: { type: String } }` yields only `foo`), string contents
/// and comments are skipped. Shorthand and spread entries are not keys.
pub fn object_literal_keys(text: &str) -> Option<Vec<String>> {
    let chars: Vec<char> = text.trim().chars().collect();
    if chars.first() != Some(&'{') {
        return None;
    }

    let mut keys: Vec<String> = Vec::new();
    let mut depth = 0usize;
    let mut expecting_key = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' | '`' => {
                let (literal, next) = read_string(&chars, i);
                if depth == 1 && expecting_key && next_significant(&chars, next) == Some(':') {
                    push_unique(&mut keys, literal);
                }
                expecting_key = false;
                i = next;
                continue;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                continue;
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    i += 1;
                }
                i += 2;
                continue;
            }
            '{' | '[' | '(' => {
                depth += 1;
                expecting_key = depth == 1;
            }
            '}' | ']' | ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            ',' if depth == 1 => expecting_key = true,
            c if c.is_whitespace() => {}
            c if depth == 1 && expecting_key && is_identifier_start(c) => {
                let start = i;
                while i < chars.len() && is_identifier_part(chars[i]) {
                    i += 1;
                }
                if next_significant(&chars, i) == Some(':') {
                    push_unique(&mut keys, chars[start..i].iter().collect());
                }
                expecting_key = false;
                continue;
            }
            _ => {
                if depth == 1 {
                    expecting_key = false;
                }
            }
        }
        i += 1;
    }

    Some(keys)
}

/// Read a quoted string starting at `start`; returns its content and the index after it
fn read_string(chars: &[char], start: usize) -> (String, usize) {
    let quote = chars[start];
    let mut content = String::new();
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                if let Some(&escaped) = chars.get(i + 1) {
                    content.push(escaped);
                }
                i += 2;
            }
            c if c == quote => return (content, i + 1),
            c => {
                content.push(c);
                i += 1;
            }
        }
    }
    (content, i)
}

fn next_significant(chars: &[char], from: usize) -> Option<char> {
    chars[from.min(chars.len())..]
        .iter()
        .copied()
        .find(|c| !c.is_whitespace())
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn push_unique(keys: &mut Vec<String>, key: String) {
    if !key.is_empty() && !keys.contains(&key) {
        keys.push(key);
    }
}
