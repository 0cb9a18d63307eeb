//! Minimal CSS selector matching for the in-memory page.
//!
//! Supports descendant chains of compound selectors built from a tag name,
//! `#id`, `.class` and `[attr]` parts. That covers every selector in the page
//! contract; anything else is rejected as [`Error::Selector`].

use crate::error::{Error, Result};
use crate::memory::MemoryElement;

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<String>,
}

impl Compound {
    fn matches(&self, element: &MemoryElement) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.attribute("id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| element.has_class(c)) && self.attrs.iter().all(|a| element.attribute(a).is_some())
    }
}

/// A parsed descendant-combinator selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selector {
    chain: Vec<Compound>,
}

impl Selector {
    pub(crate) fn parse(raw: &str) -> Result<Self> {
        let chain = raw.split_ascii_whitespace().map(|part| parse_compound(raw, part)).collect::<Result<Vec<_>>>()?;
        if chain.is_empty() {
            return Err(invalid(raw, "empty selector"));
        }
        Ok(Self { chain })
    }

    /// True when `element` matches the last compound and each earlier compound
    /// matches some ancestor, in order.
    pub(crate) fn matches(&self, element: &MemoryElement) -> bool {
        let Some((last, ancestors)) = self.chain.split_last() else {
            return false;
        };
        if !last.matches(element) {
            return false;
        }
        let mut cursor = element.parent();
        for compound in ancestors.iter().rev() {
            loop {
                let Some(candidate) = cursor else {
                    return false;
                };
                cursor = candidate.parent();
                if compound.matches(&candidate) {
                    break;
                }
            }
        }
        true
    }
}

fn invalid(raw: &str, reason: &str) -> Error {
    Error::Selector { selector: raw.to_owned(), reason: reason.to_owned() }
}

fn valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

const PART_MARKERS: [char; 3] = ['.', '#', '['];

fn parse_compound(raw: &str, part: &str) -> Result<Compound> {
    let mut compound = Compound::default();

    let tag_end = part.find(PART_MARKERS).unwrap_or(part.len());
    let tag = &part[..tag_end];
    if !tag.is_empty() && tag != "*" {
        if !valid_name(tag) {
            return Err(invalid(raw, "unsupported tag selector"));
        }
        compound.tag = Some(tag.to_ascii_lowercase());
    }

    let mut rest = &part[tag_end..];
    while let Some(marker) = rest.chars().next() {
        rest = &rest[marker.len_utf8()..];
        if marker == '[' {
            let Some(close) = rest.find(']') else {
                return Err(invalid(raw, "unclosed attribute selector"));
            };
            let name = &rest[..close];
            if !valid_name(name) {
                return Err(invalid(raw, "only presence attribute selectors are supported"));
            }
            compound.attrs.push(name.to_owned());
            rest = &rest[close + 1..];
            continue;
        }

        let end = rest.find(PART_MARKERS).unwrap_or(rest.len());
        let name = &rest[..end];
        if !valid_name(name) {
            return Err(invalid(raw, "unsupported selector syntax"));
        }
        match marker {
            '.' => compound.classes.push(name.to_owned()),
            '#' => compound.id = Some(name.to_owned()),
            _ => return Err(invalid(raw, "unsupported selector syntax")),
        }
        rest = &rest[end..];
    }
    Ok(compound)
}
