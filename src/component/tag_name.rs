//! Tag name derivation
//!
//! An ordered chain of strategies; the first one that yields a name wins.

use super::ComponentExtractor;
use crate::extractors::base::{ClassDeclaration, string_literal_value};
use regex::Regex;
use std::sync::LazyLock;

static LOWER_UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static UPPER_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").unwrap());

type TagStrategy = fn(&ComponentExtractor, &ClassDeclaration) -> Option<String>;

/// Strategies in priority order
pub(crate) const TAG_NAME_STRATEGIES: &[(&str, TagStrategy)] = &[
    ("registration decorator", ComponentExtractor::registered_tag),
    ("static tagName", ComponentExtractor::static_tag_name),
    ("class name", ComponentExtractor::derived_tag),
];

/// `MyWidget` -> `my-widget`, `HTMLParser` -> `html-parser`
pub fn to_kebab_case(name: &str) -> String {
    let hyphenated = LOWER_UPPER_RE.replace_all(name, "$1-$2");
    let hyphenated = UPPER_RUN_RE.replace_all(&hyphenated, "$1-$2");
    hyphenated.to_lowercase()
}

impl ComponentExtractor {
    /// Public tag name of the class, or `None` when no strategy applies
    pub fn tag_name_of(&self, class: &ClassDeclaration) -> Option<String> {
        TAG_NAME_STRATEGIES.iter().find_map(|(strategy, derive)| {
            let tag = derive(self, class)?;
            self.notify(|o| o.tag_derived(class, &tag, strategy));
            Some(tag)
        })
    }

    /// `@customElement('x-y')` with a single string literal argument
    fn registered_tag(&self, class: &ClassDeclaration) -> Option<String> {
        let decorator = class
            .decorators
            .iter()
            .find(|d| d.is_named(&self.config().register_decorator))?;

        let tag = match decorator.arguments.as_slice() {
            [only] => string_literal_value(only),
            _ => None,
        };
        match tag {
            Some(tag) if !tag.trim().is_empty() => Some(tag),
            _ => {
                self.notify(|o| {
                    o.member_skipped(
                        class,
                        &decorator.text,
                        "registration argument is not a single string literal",
                    )
                });
                None
            }
        }
    }

    /// `static tagName = 'x-y'`
    fn static_tag_name(&self, class: &ClassDeclaration) -> Option<String> {
        let field = class.static_field("tagName")?;
        field
            .initializer
            .as_deref()
            .and_then(string_literal_value)
            .filter(|tag| !tag.trim().is_empty())
    }

    /// Hyphenated form of the class name; only accepted when it contains a hyphen
    fn derived_tag(&self, class: &ClassDeclaration) -> Option<String> {
        let name = class.name.as_deref()?;
        if name.chars().count() <= 1 {
            return None;
        }
        let kebab = to_kebab_case(name);
        kebab.contains('-').then_some(kebab)
    }
}
