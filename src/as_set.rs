use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::codec::Strategy;
use crate::description::Description;
use crate::extra::Extra;
use crate::record::{Field, FieldMut, Record};

static STARTS_WITH_AS_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[AaSs]{2}-").unwrap());
static STARTS_WITH_AS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[AaSs]{2}").unwrap());

/// Normalize an as-set name, e.g. `AS-ACME` or `AS65000`.
///
/// An existing `AS` / `AS-` prefix (any case) is stripped before the
/// canonical `AS-` prefix is applied.
pub fn as_set_name(name: &str) -> String {
    let rest = if STARTS_WITH_AS_DASH.is_match(name) {
        &name[3..]
    } else if STARTS_WITH_AS.is_match(name) {
        &name[2..]
    } else {
        name
    };
    format!("AS-{rest}")
}

/// Build a members list for an as-set object.
///
/// ```
/// let members = rpsl::as_set_members(["AS65000", "AS-65001"]);
/// assert_eq!(members, vec!["AS65000", "AS-65001"]);
/// ```
pub fn as_set_members<I, S>(vals: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    vals.into_iter().map(Into::into).collect()
}

/// An RPSL `as-set` class object: a set of ASNs, aut-num objects, or other
/// as-set objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AsSet {
    /// Name of the as-set object.  *Required*.
    pub as_set: String,
    /// Description for the as-set object.
    pub description: Description,
    /// Admin Point of Contact handle.
    pub admin_poc: String,
    /// Technical Point of Contact handle.
    pub tech_poc: String,
    /// Maintainer object in the format MNT-OrgID, e.g. MNT-EXAMPLECORP.
    pub mnt_by: String,
    /// Any additional information the creator of the object wants to
    /// provide.
    pub remarks: String,
    /// Members of the set; ASNs, aut-num object names, or other as-set
    /// names are accepted.  Use [`as_set_members`], [`crate::asn_name`]
    /// and [`as_set_name`] to ensure proper formatting.
    pub members: Vec<String>,
    /// Container for extra attributes.
    pub extra: Extra,
    /// Registry source.  Most registries require this field.
    pub source: String,
}

impl Record for AsSet {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("as-set", &self.as_set),
            Field::custom("descr,omitempty", &self.description),
            Field::text("admin-c,omitempty", &self.admin_poc),
            Field::text("tech-c,omitempty", &self.tech_poc),
            Field::text("mnt-by,omitempty", &self.mnt_by),
            Field::text("remarks,omitempty", &self.remarks),
            Field::list("members,omitempty", Strategy::Multiline, &self.members),
            Field::bag(&self.extra),
            Field::text("source,omitempty", &self.source),
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::text("as-set", &mut self.as_set),
            FieldMut::custom("descr,omitempty", &mut self.description),
            FieldMut::text("admin-c,omitempty", &mut self.admin_poc),
            FieldMut::text("tech-c,omitempty", &mut self.tech_poc),
            FieldMut::text("mnt-by,omitempty", &mut self.mnt_by),
            FieldMut::text("remarks,omitempty", &mut self.remarks),
            FieldMut::list("members,omitempty", Strategy::Multiline, &mut self.members),
            FieldMut::bag(&mut self.extra),
            FieldMut::text("source,omitempty", &mut self.source),
        ]
    }
}

impl AsSet {
    /// Add an extra pre-formatted attribute to the as-set object.
    pub fn add_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.insert(key, value);
    }
}

impl fmt::Display for AsSet {
    /// The as-set's RPSL name form, e.g. `AS-ACME`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&as_set_name(&self.as_set))
    }
}

#[cfg(test)]
mod tests {
    use super::as_set_name;

    #[test]
    fn name_with_dash_prefix() {
        assert_eq!(as_set_name("AS-ACME"), "AS-ACME");
    }

    #[test]
    fn name_without_dash() {
        assert_eq!(as_set_name("ASACME"), "AS-ACME");
    }

    #[test]
    fn name_without_prefix() {
        assert_eq!(as_set_name("ACME"), "AS-ACME");
    }
}
