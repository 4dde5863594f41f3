//! Tag-driven codec between record field tables and RPSL text.
//!
//! # Wire format
//! UTF-8 text, one attribute per line: `key: value`, lines separated by
//! `\n`.  Whitespace around the key and immediately after the first `:` is
//! insignificant.  An attribute may repeat across lines (multi-valued and
//! multiline attributes).  Lines without a colon are ignored.  There is no
//! escaping mechanism: a value containing a strategy's own separator does
//! not round-trip.
//!
//! # Strategies
//! Each field carries one of four value strategies:
//!
//! | Strategy | Join | Split |
//! |----------|------|-------|
//! | `Scalar` | natural text form, one line | raw text |
//! | `Multiline` | one `key: segment` line per element | append each matched line |
//! | `Comma` | elements joined with `,` on one line | split matched value on `,` |
//! | `CommaSpace` | elements joined with `, ` on one line | split matched value on `, ` |
//!
//! A field whose value type implements [`crate::AttributeValue`] bypasses
//! the strategy table entirely and renders/parses itself.

use std::num::ParseIntError;

use thiserror::Error;

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

use crate::record::ValueError;

// ── Value strategies ─────────────────────────────────────────────────────────

/// How a field's value maps onto attribute lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One `key: value` line carrying the value's natural text form.
    #[default]
    Scalar,
    /// One `key: segment` line per element or line-broken segment.
    Multiline,
    /// Elements joined with `,` on a single line.
    Comma,
    /// Elements joined with `, ` on a single line.
    CommaSpace,
}

impl Strategy {
    /// The element separator for the multi-valued strategies.
    pub fn separator(self) -> Option<&'static str> {
        match self {
            Strategy::Scalar => None,
            Strategy::Multiline => Some("\n"),
            Strategy::Comma => Some(","),
            Strategy::CommaSpace => Some(", "),
        }
    }
}

// ── Field descriptors ────────────────────────────────────────────────────────

/// Normalized form of one field's declarative metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Attribute key; `-` for the extension bag.
    pub key: &'static str,
    /// Skip the field entirely when its value is the type's zero value.
    pub omit_empty: bool,
    /// This field is the extension bag, not a named attribute.
    pub is_bag: bool,
    pub strategy: Strategy,
}

impl FieldDescriptor {
    /// Resolve a tag string (`key`, `key,omitempty`, or the bag marker `-`)
    /// and a strategy annotation into a descriptor.
    ///
    /// An empty attribute key (e.g. the tag `",omitempty"`) is an error.
    pub fn resolve(tag: &'static str, strategy: Strategy) -> Result<Self, InvalidTagError> {
        if tag == "-" {
            return Ok(FieldDescriptor { key: "-", omit_empty: false, is_bag: true, strategy });
        }
        let mut parts = tag.split(',');
        let key = parts.next().unwrap_or("");
        if key.is_empty() {
            return Err(InvalidTagError(tag.to_string()));
        }
        let omit_empty = parts.any(|p| p == "omitempty");
        Ok(FieldDescriptor { key, omit_empty, is_bag: false, strategy })
    }
}

// ── Errors ───────────────────────────────────────────────────────────────────

/// A declared field resolves to an empty attribute key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field '{0}' has an invalid rpsl tag")]
pub struct InvalidTagError(pub String);

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error(transparent)]
    InvalidTag(#[from] InvalidTagError),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    InvalidTag(#[from] InvalidTagError),
    /// An unsigned field's matched text is not a decimal number.
    #[error("{key}: value '{text}' could not be parsed as u32")]
    NumericParse {
        key: String,
        text: String,
        #[source]
        source: ParseIntError,
    },
    /// A custom value's merge hook failed.
    #[error("{key}: failed to decode value")]
    Value {
        key: String,
        #[source]
        source: ValueError,
    },
}

// ── Line formatters ──────────────────────────────────────────────────────────

/// Append one `key: value` line.
pub(crate) fn push_line(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push_str(": ");
    out.push_str(value);
    out.push('\n');
}

/// One line per non-blank, trimmed segment of a line-broken string.
pub(crate) fn push_multiline_text(out: &mut String, key: &str, text: &str) {
    for segment in text.split('\n') {
        let segment = segment.trim();
        if !segment.is_empty() {
            push_line(out, key, segment);
        }
    }
}

/// One line per non-blank, trimmed list element.
pub(crate) fn push_multiline_list(out: &mut String, key: &str, items: &[String]) {
    for item in items {
        let item = item.trim();
        if !item.is_empty() {
            push_line(out, key, item);
        }
    }
}

/// Elements joined with `sep` on a single line; embedded newlines are
/// flattened to spaces.
pub(crate) fn push_joined_list(out: &mut String, key: &str, items: &[String], sep: &str) {
    let joined = items.join(sep).replace('\n', " ");
    push_line(out, key, joined.trim());
}

/// Merge a matched raw value into an accumulated string: both sides are
/// split on `sep`, blank parts dropped, parts trimmed, and the result
/// re-joined with `sep`.
pub(crate) fn merge_text(current: &str, raw: &str, sep: &str) -> String {
    current
        .split(sep)
        .chain(raw.split(sep))
        .filter(|part| !part.is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_plain_key() {
        let d = FieldDescriptor::resolve("origin", Strategy::Scalar).unwrap();
        assert_eq!(d.key, "origin");
        assert!(!d.omit_empty);
        assert!(!d.is_bag);
    }

    #[test]
    fn resolve_omitempty() {
        let d = FieldDescriptor::resolve("descr,omitempty", Strategy::Multiline).unwrap();
        assert_eq!(d.key, "descr");
        assert!(d.omit_empty);
        assert_eq!(d.strategy, Strategy::Multiline);
    }

    #[test]
    fn resolve_bag_marker() {
        let d = FieldDescriptor::resolve("-", Strategy::Scalar).unwrap();
        assert!(d.is_bag);
    }

    #[test]
    fn resolve_empty_key_is_an_error() {
        assert!(FieldDescriptor::resolve("", Strategy::Scalar).is_err());
        assert!(FieldDescriptor::resolve(",omitempty", Strategy::Scalar).is_err());
    }

    #[test]
    fn merge_text_accumulates() {
        let once = merge_text("", "Line 1", "\n");
        assert_eq!(once, "Line 1");
        let twice = merge_text(&once, "Line 2", "\n");
        assert_eq!(twice, "Line 1\nLine 2");
    }

    #[test]
    fn joined_list_flattens_newlines() {
        let mut out = String::new();
        push_joined_list(&mut out, "members", &["a\nb".to_string(), "c".to_string()], ", ");
        assert_eq!(out, "members: a b, c\n");
    }
}
