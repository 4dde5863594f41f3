//! Record field tables: the integration contract between the codec and the
//! object types it serializes.
//!
//! A record type declares its RPSL shape as an ordered table of fields, each
//! binding a tag string (attribute key, optionally suffixed with
//! `,omitempty`) and a value strategy to a borrowed view of the field's
//! value.  The table is explicit — there is no runtime reflection — so a
//! malformed declaration surfaces as an error the first time the type is
//! encoded or decoded, and everything else is checked at compile time.
//!
//! The literal tag `-` marks a field as the extension bag ([`crate::Extra`])
//! rather than a named attribute.

use std::error::Error;

use crate::codec::Strategy;
use crate::extra::Extra;

/// Error surfaced by [`AttributeValue::merge`].
pub type ValueError = Box<dyn Error + Send + Sync + 'static>;

/// Per-type override of the generic rendering/parsing behavior for a single
/// field.
///
/// A value implementing this trait defines its own textual shape; the
/// encoder and decoder defer to it instead of the generic formatters.  This
/// is how a field can be a nested sub-record (e.g. a multiline
/// [`crate::Description`]) or a domain scalar with its own syntax (e.g. an
/// [`crate::Asn`] rendered as `AS65000`).
pub trait AttributeValue {
    /// Render the value as complete `key: value` attribute line(s),
    /// newline-joined, without a trailing newline.  The encoder uses the
    /// output verbatim.
    fn render(&self, key: &str) -> String;

    /// Parse one matched raw value and fold it into the current value.
    ///
    /// Called once per matching line, so a multi-line attribute accumulates
    /// across calls.  Errors are wrapped with the attribute key by the
    /// decoder and abort the decode.
    fn merge(&mut self, raw: &str) -> Result<(), ValueError>;

    /// Whether this is the type's zero value (drives `omitempty`).
    fn is_empty(&self) -> bool;
}

/// Borrowed view of a field's value.
#[derive(Clone, Copy)]
pub enum ValueRef<'a> {
    Text(&'a str),
    Unsigned(&'a u32),
    List(&'a [String]),
    Custom(&'a dyn AttributeValue),
    Bag(&'a Extra),
}

impl ValueRef<'_> {
    /// Zero-value check used by `omitempty`.
    pub fn is_empty(&self) -> bool {
        match self {
            ValueRef::Text(s) => s.is_empty(),
            ValueRef::Unsigned(n) => **n == 0,
            ValueRef::List(items) => items.is_empty(),
            ValueRef::Custom(v) => v.is_empty(),
            ValueRef::Bag(extra) => extra.is_empty(),
        }
    }
}

/// Mutable view of a field's value.
pub enum ValueMut<'a> {
    Text(&'a mut String),
    Unsigned(&'a mut u32),
    List(&'a mut Vec<String>),
    Custom(&'a mut dyn AttributeValue),
    Bag(&'a mut Extra),
}

/// One declared field: tag metadata plus a read-only value view.
pub struct Field<'a> {
    pub tag: &'static str,
    pub strategy: Strategy,
    pub value: ValueRef<'a>,
}

impl<'a> Field<'a> {
    /// A scalar string attribute.
    pub fn text(tag: &'static str, value: &'a str) -> Self {
        Self { tag, strategy: Strategy::Scalar, value: ValueRef::Text(value) }
    }

    /// A string attribute whose line-broken segments each become their own
    /// `key: segment` line.
    pub fn multiline(tag: &'static str, value: &'a str) -> Self {
        Self { tag, strategy: Strategy::Multiline, value: ValueRef::Text(value) }
    }

    /// An unsigned scalar attribute, rendered as decimal digits.
    pub fn unsigned(tag: &'static str, value: &'a u32) -> Self {
        Self { tag, strategy: Strategy::Scalar, value: ValueRef::Unsigned(value) }
    }

    /// A multi-valued attribute serialized with the given strategy.
    pub fn list(tag: &'static str, strategy: Strategy, value: &'a [String]) -> Self {
        Self { tag, strategy, value: ValueRef::List(value) }
    }

    /// A field with its own render/merge behavior.
    pub fn custom(tag: &'static str, value: &'a dyn AttributeValue) -> Self {
        Self { tag, strategy: Strategy::Scalar, value: ValueRef::Custom(value) }
    }

    /// The extension bag. At most one per record.
    pub fn bag(value: &'a Extra) -> Self {
        Self { tag: "-", strategy: Strategy::Scalar, value: ValueRef::Bag(value) }
    }
}

/// One declared field: tag metadata plus a mutable value view.
pub struct FieldMut<'a> {
    pub tag: &'static str,
    pub strategy: Strategy,
    pub value: ValueMut<'a>,
}

impl<'a> FieldMut<'a> {
    pub fn text(tag: &'static str, value: &'a mut String) -> Self {
        Self { tag, strategy: Strategy::Scalar, value: ValueMut::Text(value) }
    }

    pub fn multiline(tag: &'static str, value: &'a mut String) -> Self {
        Self { tag, strategy: Strategy::Multiline, value: ValueMut::Text(value) }
    }

    pub fn unsigned(tag: &'static str, value: &'a mut u32) -> Self {
        Self { tag, strategy: Strategy::Scalar, value: ValueMut::Unsigned(value) }
    }

    pub fn list(tag: &'static str, strategy: Strategy, value: &'a mut Vec<String>) -> Self {
        Self { tag, strategy, value: ValueMut::List(value) }
    }

    pub fn custom(tag: &'static str, value: &'a mut dyn AttributeValue) -> Self {
        Self { tag, strategy: Strategy::Scalar, value: ValueMut::Custom(value) }
    }

    pub fn bag(value: &'a mut Extra) -> Self {
        Self { tag: "-", strategy: Strategy::Scalar, value: ValueMut::Bag(value) }
    }
}

/// A structured RPSL object.
///
/// The two tables must describe the same fields in the same order; that
/// order defines attribute emission order on encode.
pub trait Record {
    fn fields(&self) -> Vec<Field<'_>>;
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}
