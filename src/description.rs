use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::{AttributeValue, ValueError};

/// A multiline description value.
///
/// Each line of the inner text is rendered as its own `descr: ...`
/// attribute line; decoding appends each matched line back onto the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(pub String);

impl Description {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AttributeValue for Description {
    fn render(&self, key: &str) -> String {
        self.0
            .split('\n')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| format!("{key}: {segment}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn merge(&mut self, raw: &str) -> Result<(), ValueError> {
        if !self.0.is_empty() {
            self.0.push('\n');
        }
        self.0.push_str(raw);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_segment() {
        let d = Description::from("Line 1\nLine 2");
        assert_eq!(d.render("descr"), "descr: Line 1\ndescr: Line 2");
    }

    #[test]
    fn merge_appends_lines() {
        let mut d = Description::default();
        d.merge("Line 1").unwrap();
        d.merge("Line 2").unwrap();
        assert_eq!(d.0, "Line 1\nLine 2");
    }
}
