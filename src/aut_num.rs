use std::fmt;

use serde::{Deserialize, Serialize};

use crate::asn::Asn;
use crate::codec::Strategy;
use crate::extra::Extra;
use crate::record::{Field, FieldMut, Record};

/// An RPSL `aut-num` class object.  Routing policies are specified using
/// the aut-num class: the as-name attribute is a symbolic name of the AS,
/// and the import, export and default routing policies of the AS are
/// specified using the import, export and default attributes respectively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutNum {
    /// AS number.  *Required*.
    pub aut_num: Asn,
    /// aut-num object name.  *Required*.
    pub as_name: String,
    /// Description for the aut-num object.
    pub description: String,
    /// Admin Point of Contact handle.  For ARIN, the exact POC Handle as
    /// shown in Whois/RDAP for the Org ID.
    pub admin_poc: String,
    /// Technical Point of Contact handle.
    pub tech_poc: String,
    /// Maintainer object in the format MNT-OrgID, e.g. MNT-EXAMPLECORP.
    pub mnt_by: String,
    /// Import policy expression.  See RFC 2622 section 6.1.
    pub import: String,
    /// Export policy expression.  See RFC 2622 section 6.1.
    pub export: String,
    /// Multi-protocol import policy expression.  See RFC 4012 section 2.5.
    pub mp_import: String,
    /// Multi-protocol export policy expression.  See RFC 4012 section 2.5.
    pub mp_export: String,
    /// Other aut-num or as-set objects this aut-num object is a member of.
    pub member_of: Vec<String>,
    /// Maintainer names, or the keyword ANY.  When present, a set also
    /// includes ASes whose aut-num objects are registered by one of these
    /// maintainers and whose member-of attribute names the set.
    pub members_by_ref: Vec<String>,
    /// Default routing policies.  See RFC 2622 section 6.5.
    pub default: String,
    /// Multi-protocol default routing policies.  See RFC 4012 section 2.5.
    pub mp_default: String,
    /// Container for extra attributes.
    pub extra: Extra,
    /// Registry source.  Most registries require this field.
    pub source: String,
}

impl Record for AutNum {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::custom("aut-num", &self.aut_num),
            Field::text("as-name", &self.as_name),
            Field::multiline("descr,omitempty", &self.description),
            Field::text("admin-c,omitempty", &self.admin_poc),
            Field::text("tech-c,omitempty", &self.tech_poc),
            Field::text("mnt-by,omitempty", &self.mnt_by),
            Field::text("import,omitempty", &self.import),
            Field::text("export,omitempty", &self.export),
            Field::text("mp-import,omitempty", &self.mp_import),
            Field::text("mp-export,omitempty", &self.mp_export),
            Field::list("member-of,omitempty", Strategy::CommaSpace, &self.member_of),
            Field::list("mbrs-by-ref,omitempty", Strategy::CommaSpace, &self.members_by_ref),
            Field::text("default,omitempty", &self.default),
            Field::text("mp-default,omitempty", &self.mp_default),
            Field::bag(&self.extra),
            Field::text("source,omitempty", &self.source),
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::custom("aut-num", &mut self.aut_num),
            FieldMut::text("as-name", &mut self.as_name),
            FieldMut::multiline("descr,omitempty", &mut self.description),
            FieldMut::text("admin-c,omitempty", &mut self.admin_poc),
            FieldMut::text("tech-c,omitempty", &mut self.tech_poc),
            FieldMut::text("mnt-by,omitempty", &mut self.mnt_by),
            FieldMut::text("import,omitempty", &mut self.import),
            FieldMut::text("export,omitempty", &mut self.export),
            FieldMut::text("mp-import,omitempty", &mut self.mp_import),
            FieldMut::text("mp-export,omitempty", &mut self.mp_export),
            FieldMut::list("member-of,omitempty", Strategy::CommaSpace, &mut self.member_of),
            FieldMut::list("mbrs-by-ref,omitempty", Strategy::CommaSpace, &mut self.members_by_ref),
            FieldMut::text("default,omitempty", &mut self.default),
            FieldMut::text("mp-default,omitempty", &mut self.mp_default),
            FieldMut::bag(&mut self.extra),
            FieldMut::text("source,omitempty", &mut self.source),
        ]
    }
}

impl AutNum {
    /// Add an extra pre-formatted attribute to the aut-num object.
    pub fn add_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.insert(key, value);
    }
}

impl fmt::Display for AutNum {
    /// The aut-num's RPSL name form, e.g. `AS65000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.aut_num.fmt(f)
    }
}

/// Build a member-of list for an aut-num object.
///
/// ```
/// let members = rpsl::aut_num_members(["AS65001", "AS-ACME"]);
/// assert_eq!(members, vec!["AS65001", "AS-ACME"]);
/// ```
pub fn aut_num_members<I, S>(vals: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    vals.into_iter().map(Into::into).collect()
}
