//! Decoder: RPSL text → record field table, in place.

use std::collections::HashSet;

use crate::record::{Record, ValueMut};

use super::{DecodeError, FieldDescriptor};

/// Decode RPSL text into a record.
///
/// The target is mutated in place and never reset: repeated decodes into
/// the same record accumulate, with multi-valued fields appending matched
/// elements to whatever is already there.  Scalar fields take the last
/// matching line.  Lines without a colon are silently skipped.  Parsed
/// pairs whose key matches no declared field land in the extension bag,
/// when the record declares one.
///
/// # Errors
/// Fatal and immediate; fields populated before the failing field remain
/// set (no rollback).
/// - [`DecodeError::InvalidTag`] — a declared field has an empty key.
/// - [`DecodeError::NumericParse`] — an unsigned field matched non-decimal
///   text.
/// - [`DecodeError::Value`] — a custom value's merge hook failed; the
///   original error is preserved as the source.
pub fn decode<R: Record>(input: &str, record: &mut R) -> Result<(), DecodeError> {
    let pairs = tokenize(input);
    let mut fields = record.fields_mut();

    // Resolve every descriptor up front so a malformed tag fails before any
    // field is touched, and so the bag knows which keys are spoken for.
    let descriptors = fields
        .iter()
        .map(|f| FieldDescriptor::resolve(f.tag, f.strategy))
        .collect::<Result<Vec<_>, _>>()?;
    let named: HashSet<&str> = descriptors
        .iter()
        .filter(|d| !d.is_bag)
        .map(|d| d.key)
        .collect();

    for (field, desc) in fields.iter_mut().zip(descriptors.iter()) {
        if desc.is_bag {
            if let ValueMut::Bag(extra) = &mut field.value {
                for (key, value) in &pairs {
                    if !named.contains(key) {
                        extra.insert(*key, *value);
                    }
                }
            }
            continue;
        }
        for (key, raw) in &pairs {
            if *key != desc.key {
                continue;
            }
            apply(&mut field.value, desc, raw)?;
        }
    }
    Ok(())
}

/// Fold one matched raw value into a field.
fn apply(value: &mut ValueMut<'_>, desc: &FieldDescriptor, raw: &str) -> Result<(), DecodeError> {
    match value {
        ValueMut::Custom(v) => v.merge(raw).map_err(|source| DecodeError::Value {
            key: desc.key.to_string(),
            source,
        })?,
        ValueMut::Text(text) => match desc.strategy.separator() {
            None => **text = raw.to_string(),
            Some(sep) => {
                let merged = super::merge_text(text.as_str(), raw, sep);
                **text = merged;
            }
        },
        ValueMut::Unsigned(n) => {
            **n = raw.parse().map_err(|source| DecodeError::NumericParse {
                key: desc.key.to_string(),
                text: raw.to_string(),
                source,
            })?;
        }
        ValueMut::List(items) => match desc.strategy.separator() {
            Some(sep) => items.extend(raw.split(sep).map(str::to_string)),
            None => items.push(raw.to_string()),
        },
        // Named bag fields cannot be declared; nothing to do.
        ValueMut::Bag(_) => {}
    }
    Ok(())
}

/// Split input into ordered `(key, value)` pairs.
///
/// Leading/trailing newlines are trimmed, each line is split on its first
/// `:` (later colons stay in the value), and both sides are trimmed of
/// surrounding whitespace.  Colon-less lines produce no pair.
fn tokenize(input: &str) -> Vec<(&str, &str)> {
    input
        .trim_matches('\n')
        .split('\n')
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            Some((key.trim(), value.trim()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn tokenize_preserves_colons_in_values() {
        let pairs = tokenize("remarks: see: https://example.com");
        assert_eq!(pairs, vec![("remarks", "see: https://example.com")]);
    }

    #[test]
    fn tokenize_skips_colonless_lines() {
        let pairs = tokenize("\nkey: value\nnot a pair\n");
        assert_eq!(pairs, vec![("key", "value")]);
    }
}
