//! Core domain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kind of tests the generation service should produce.
///
/// Serialized as `"UI"` / `"API"` both on the wire and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum TestType {
    #[default]
    #[serde(rename = "UI")]
    Ui,
    #[serde(rename = "API")]
    Api,
}

impl TestType {
    /// Every selectable test type, in display order.
    pub const ALL: [TestType; 2] = [TestType::Ui, TestType::Api];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Ui => "UI",
            TestType::Api => "API",
        }
    }

    /// The other test type (there are only two).
    pub fn toggled(self) -> Self {
        match self {
            TestType::Ui => TestType::Api,
            TestType::Api => TestType::Ui,
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = Error;

    /// Accepts exactly `UI` or `API`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("ui") => Ok(TestType::Ui),
            v if v.eq_ignore_ascii_case("api") => Ok(TestType::Api),
            other => Err(Error::invalid_test_type(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ui() {
        assert_eq!(TestType::default(), TestType::Ui);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(TestType::Ui.toggled(), TestType::Api);
        assert_eq!(TestType::Api.toggled(), TestType::Ui);
        assert_eq!(TestType::Ui.toggled().toggled(), TestType::Ui);
    }

    #[test]
    fn test_parse_accepts_both_values() {
        assert_eq!("UI".parse::<TestType>().unwrap(), TestType::Ui);
        assert_eq!("api".parse::<TestType>().unwrap(), TestType::Api);
        assert_eq!(" Api ".parse::<TestType>().unwrap(), TestType::Api);
    }

    #[test]
    fn test_parse_rejects_anything_else() {
        for bad in ["", "E2E", "unit", "UI,API"] {
            let err = bad.parse::<TestType>().unwrap_err();
            assert!(matches!(err, Error::InvalidTestType { .. }), "{bad}");
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&TestType::Ui).unwrap(), "\"UI\"");
        assert_eq!(serde_json::to_string(&TestType::Api).unwrap(), "\"API\"");
        let parsed: TestType = serde_json::from_str("\"API\"").unwrap();
        assert_eq!(parsed, TestType::Api);
        assert!(serde_json::from_str::<TestType>("\"E2E\"").is_err());
    }

    #[test]
    fn test_display_matches_wire_name() {
        for t in TestType::ALL {
            assert_eq!(t.to_string(), t.as_str());
        }
    }
}
