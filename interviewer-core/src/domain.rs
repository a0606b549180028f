//! Interview domains

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InterviewError;

/// Subject area an interview draws its questions from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    DataAnalysis,
    Finance,
    Operations,
}

impl Domain {
    /// Every supported domain, in display order
    pub const ALL: [Domain; 3] = [Domain::DataAnalysis, Domain::Finance, Domain::Operations];

    /// Parse a caller-supplied domain, trimming and case-folding first
    pub fn parse(raw: &str) -> Result<Self, InterviewError> {
        match raw.trim().to_lowercase().as_str() {
            "data-analysis" => Ok(Domain::DataAnalysis),
            "finance" => Ok(Domain::Finance),
            "operations" => Ok(Domain::Operations),
            _ => Err(InterviewError::InvalidDomain(raw.to_string())),
        }
    }

    /// Canonical identifier, as accepted by [`Domain::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::DataAnalysis => "data-analysis",
            Domain::Finance => "finance",
            Domain::Operations => "operations",
        }
    }

    /// Human-readable name used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            Domain::DataAnalysis => "data analysis",
            Domain::Finance => "finance",
            Domain::Operations => "operations",
        }
    }
}

impl FromStr for Domain {
    type Err = InterviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::parse(s)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_names() {
        assert_eq!(Domain::parse("data-analysis").unwrap(), Domain::DataAnalysis);
        assert_eq!(Domain::parse("finance").unwrap(), Domain::Finance);
        assert_eq!(Domain::parse("operations").unwrap(), Domain::Operations);
    }

    #[test]
    fn parse_trims_and_case_folds() {
        assert_eq!(Domain::parse("Finance ").unwrap(), Domain::Finance);
        assert_eq!(Domain::parse("  DATA-Analysis\t").unwrap(), Domain::DataAnalysis);
        assert_eq!(Domain::parse("\nOperations").unwrap(), Domain::Operations);
    }

    #[test]
    fn parse_rejects_unknown_domains() {
        for raw in ["", "  ", "marketing", "data analysis", "operation", "fin ance"] {
            let result = Domain::parse(raw);
            assert!(
                matches!(result, Err(InterviewError::InvalidDomain(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for domain in Domain::ALL {
            assert_eq!(domain.to_string().parse::<Domain>().unwrap(), domain);
        }
    }

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&Domain::DataAnalysis).unwrap();
        assert_eq!(json, "\"data-analysis\"");
    }
}
