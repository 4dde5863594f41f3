//! Encoder: record field table → RPSL text.

use crate::record::{Record, ValueRef};

use super::{EncodeError, FieldDescriptor, Strategy};

/// Encode a record as RPSL text.
///
/// Fields are emitted in declaration order.  A field marked `omitempty`
/// whose value is the type's zero value contributes no lines.  The
/// extension bag emits one line per non-empty key/value entry, in
/// insertion order.  The output carries no trailing newline.
///
/// # Errors
/// [`EncodeError::InvalidTag`] if any declared field resolves to an empty
/// attribute key.
pub fn encode<R: Record>(record: &R) -> Result<String, EncodeError> {
    let mut out = String::new();
    for field in record.fields() {
        let desc = FieldDescriptor::resolve(field.tag, field.strategy)?;
        if desc.is_bag {
            if let ValueRef::Bag(extra) = field.value {
                for (key, value) in extra.iter() {
                    if !key.is_empty() && !value.is_empty() {
                        super::push_line(&mut out, key, value);
                    }
                }
            }
            continue;
        }
        if desc.omit_empty && field.value.is_empty() {
            continue;
        }
        match (field.value, desc.strategy) {
            // Custom values render their own complete lines, used verbatim.
            (ValueRef::Custom(value), _) => {
                out.push_str(&value.render(desc.key));
                out.push('\n');
            }
            (ValueRef::Text(text), Strategy::Multiline) => {
                super::push_multiline_text(&mut out, desc.key, text);
            }
            (ValueRef::Text(text), _) => super::push_line(&mut out, desc.key, text),
            (ValueRef::Unsigned(n), _) => super::push_line(&mut out, desc.key, &n.to_string()),
            (ValueRef::List(items), Strategy::Multiline) => {
                super::push_multiline_list(&mut out, desc.key, items);
            }
            (ValueRef::List(items), Strategy::CommaSpace) => {
                super::push_joined_list(&mut out, desc.key, items, ", ");
            }
            (ValueRef::List(items), _) => super::push_joined_list(&mut out, desc.key, items, ","),
            // Bags are handled above; a second bag field emits nothing.
            (ValueRef::Bag(_), _) => {}
        }
    }
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}
