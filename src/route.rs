use std::fmt;

use serde::{Deserialize, Serialize};

use crate::asn::Asn;
use crate::extra::Extra;
use crate::record::{Field, FieldMut, Record};

/// An RPSL `route` class object.  Each interAS route (also referred to as
/// an interdomain route) originated by an AS is specified using a route
/// object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// IPv4 address prefix.  Assumed to be a valid IPv4 prefix; no
    /// validation occurs.  *Required*.
    pub route: String,
    /// The ASN from which the route originates.  *Required*.
    pub origin: Asn,
    /// Description for the route object.
    pub description: String,
    /// Admin Point of Contact handle.  For ARIN, the exact POC Handle as
    /// shown in Whois/RDAP for the Org ID.
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

impl Record for Route {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("route", &self.route),
            Field::custom("origin", &self.origin),
            Field::multiline("descr,omitempty", &self.description),
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
            FieldMut::multiline("descr,omitempty", &mut self.description),
            FieldMut::text("admin-c,omitempty", &mut self.admin_poc),
            FieldMut::text("tech-c,omitempty", &mut self.tech_poc),
            FieldMut::text("mnt-by,omitempty", &mut self.mnt_by),
            FieldMut::bag(&mut self.extra),
            FieldMut::text("source,omitempty", &mut self.source),
        ]
    }
}

impl Route {
    /// Add an extra pre-formatted attribute to the route object.
    pub fn add_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.insert(key, value);
    }
}

impl fmt::Display for Route {
    /// The route's RPSL name form, e.g. `192.0.2.0/24`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route)
    }
}
