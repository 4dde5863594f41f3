use std::fmt;

use serde::{Deserialize, Serialize};

use crate::asn::Asn;
use crate::description::Description;
use crate::extra::Extra;
use crate::record::{Field, FieldMut, Record};

/// An RPSL `route6` class object: the IPv6 equivalent of the route class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route6 {
    /// IPv6 address prefix.  Assumed to be a valid IPv6 prefix; no
    /// validation occurs.  *Required*.
    pub route: String,
    /// The ASN from which the route originates.  *Required*.
    pub origin: Asn,
    /// Description for the route6 object.
    pub description: Description,
    /// Admin Point of Contact handle.
    pub admin_poc: String,
    /// Technical Point of Contact handle.
    pub tech_poc: String,
    /// Maintainer object in the format MNT-OrgID, e.g. MNT-EXAMPLECORP.
    pub mnt_by: String,
    /// Container for extra attributes.
    pub extra: Extra,
    /// Registry source.  Most registries require this field.
    pub source: String,
}

impl Record for Route6 {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("route", &self.route),
            Field::custom("origin", &self.origin),
            Field::custom("descr,omitempty", &self.description),
            Field::text("admin-c,omitempty", &self.admin_poc),
            Field::text("tech-c,omitempty", &self.tech_poc),
            Field::text("mnt-by,omitempty", &self.mnt_by),
            Field::bag(&self.extra),
            Field::text("source,omitempty", &self.source),
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::text("route", &mut self.route),
            FieldMut::custom("origin", &mut self.origin),
            FieldMut::custom("descr,omitempty", &mut self.description),
            FieldMut::text("admin-c,omitempty", &mut self.admin_poc),
            FieldMut::text("tech-c,omitempty", &mut self.tech_poc),
            FieldMut::text("mnt-by,omitempty", &mut self.mnt_by),
            FieldMut::bag(&mut self.extra),
            FieldMut::text("source,omitempty", &mut self.source),
        ]
    }
}

impl Route6 {
    /// Add an extra pre-formatted attribute to the route6 object.
    pub fn add_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.insert(key, value);
    }
}

impl fmt::Display for Route6 {
    /// The route6's RPSL name form, e.g. `2001:db8::/32`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route)
    }
}
