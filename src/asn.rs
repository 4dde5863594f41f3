use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{AttributeValue, ValueError};

/// An autonomous system number, 2-byte or 4-byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Asn(pub u32);

#[derive(Error, Debug)]
#[error("value '{text}' could not be parsed as an AS number")]
pub struct ParseAsnError {
    text: String,
    #[source]
    source: ParseIntError,
}

impl fmt::Display for Asn {
    /// RPSL form, e.g. `AS65000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AS{}", self.0)
    }
}

impl FromStr for Asn {
    type Err = ParseAsnError;

    /// Accepts a bare number or the `AS`-prefixed form: `65000`, `AS65000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("AS").unwrap_or(s);
        digits.parse::<u32>().map(Asn).map_err(|source| ParseAsnError {
            text: s.to_string(),
            source,
        })
    }
}

impl From<u32> for Asn {
    fn from(n: u32) -> Self {
        Asn(n)
    }
}

impl AttributeValue for Asn {
    fn render(&self, key: &str) -> String {
        format!("{key}: {self}")
    }

    fn merge(&mut self, raw: &str) -> Result<(), ValueError> {
        *self = raw.parse()?;
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// ASN object name from a bare number, e.g. `AS65000`.
pub fn asn_name(asn: u32) -> String {
    Asn(asn).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_prefix() {
        assert_eq!("AS65000".parse::<Asn>().unwrap(), Asn(65000));
        assert_eq!("65000".parse::<Asn>().unwrap(), Asn(65000));
    }

    #[test]
    fn rejects_garbage() {
        let err = "AS-ACME".parse::<Asn>().unwrap_err();
        assert!(err.to_string().contains("AS-ACME"));
    }

    #[test]
    fn displays_in_rpsl_form() {
        assert_eq!(Asn(65000).to_string(), "AS65000");
        assert_eq!(asn_name(65000), "AS65000");
    }
}
