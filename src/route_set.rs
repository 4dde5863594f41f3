use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::codec::Strategy;
use crate::extra::Extra;
use crate::record::{Field, FieldMut, Record};

static STARTS_WITH_RS_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[RrSs]{2}-").unwrap());
static STARTS_WITH_RS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[RrSs]{2}").unwrap());

/// Normalize a route-set name, e.g. `RS-ACME`.
///
/// An existing `RS` / `RS-` prefix (any case) is stripped before the
/// canonical `RS-` prefix is applied.
pub fn rs_name(name: &str) -> String {
    let rest = if STARTS_WITH_RS_DASH.is_match(name) {
        &name[3..]
    } else if STARTS_WITH_RS.is_match(name) {
        &name[2..]
    } else {
        name
    };
    format!("RS-{rest}")
}

/// Build a members list for a route-set object.  Prefix text should
/// already be in its canonical lowercase form.
///
/// ```
/// let members = rpsl::rs_members(["192.0.2.0/24", "RS-CORP"]);
/// assert_eq!(members, vec!["192.0.2.0/24", "RS-CORP"]);
/// ```
pub fn rs_members<I, S>(vals: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    vals.into_iter().map(Into::into).collect()
}

/// An RPSL `route-set` class object.  RFC 2622 specifies that "the
/// route-set class is a set of route prefixes, not of RPSL route objects";
/// because some registries accept either prefixes or other route-set
/// objects, both are accepted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSet {
    /// Name of the route-set.  Begins with RS-, or with an AS managed by
    /// the organization followed by a colon and RS- (for example,
    /// `AS65536:RS-ARIZ-SE-5`).  *Required*.
    pub route_set: String,
    /// Description for the route-set object.
    pub description: String,
    /// Admin Point of Contact handle.
    pub admin_poc: String,
    /// Technical Point of Contact handle.
    pub tech_poc: String,
    /// Maintainer object in the format MNT-OrgID, e.g. MNT-EXAMPLECORP.
    pub mnt_by: String,
    /// Any additional information the creator of the object wants to
    /// provide.
    pub remarks: String,
    /// Members of the set; IPv4 prefixes or other route-set names.
    pub members: Vec<String>,
    /// Members of the set; IPv4 prefixes, IPv6 prefixes, or other
    /// route-set names.
    pub mp_members: Vec<String>,
    /// Container for extra attributes.
    pub extra: Extra,
    /// Registry source.  Most registries require this field.
    pub source: String,
}

impl Record for RouteSet {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("route-set", &self.route_set),
            Field::multiline("descr,omitempty", &self.description),
            Field::text("admin-c,omitempty", &self.admin_poc),
            Field::text("tech-c,omitempty", &self.tech_poc),
            Field::text("mnt-by,omitempty", &self.mnt_by),
            Field::text("remarks,omitempty", &self.remarks),
            Field::list("members,omitempty", Strategy::Comma, &self.members),
            Field::list("mp-members,omitempty", Strategy::Comma, &self.mp_members),
            Field::bag(&self.extra),
            Field::text("source,omitempty", &self.source),
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::text("route-set", &mut self.route_set),
            FieldMut::multiline("descr,omitempty", &mut self.description),
            FieldMut::text("admin-c,omitempty", &mut self.admin_poc),
            FieldMut::text("tech-c,omitempty", &mut self.tech_poc),
            FieldMut::text("mnt-by,omitempty", &mut self.mnt_by),
            FieldMut::text("remarks,omitempty", &mut self.remarks),
            FieldMut::list("members,omitempty", Strategy::Comma, &mut self.members),
            FieldMut::list("mp-members,omitempty", Strategy::Comma, &mut self.mp_members),
            FieldMut::bag(&mut self.extra),
            FieldMut::text("source,omitempty", &mut self.source),
        ]
    }
}

impl RouteSet {
    /// Add an extra pre-formatted attribute to the route-set object.
    pub fn add_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.insert(key, value);
    }
}

impl fmt::Display for RouteSet {
    /// The route-set's RPSL name form, e.g. `RS-ACME`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rs_name(&self.route_set))
    }
}

#[cfg(test)]
mod tests {
    use super::rs_name;

    #[test]
    fn name_with_dash_prefix() {
        assert_eq!(rs_name("RS-ACME"), "RS-ACME");
    }

    #[test]
    fn name_without_dash() {
        assert_eq!(rs_name("RSACME"), "RS-ACME");
    }

    #[test]
    fn name_without_prefix() {
        assert_eq!(rs_name("ACME"), "RS-ACME");
    }
}
