//! Referential policy for creating child records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How strictly parent references are checked when a child record is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Parents must exist and agree with the denormalized keys
    #[default]
    Enforce,
    /// Only require that each reference is present
    Trust,
}

impl FromStr for ReferencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enforce" => Ok(ReferencePolicy::Enforce),
            "trust" => Ok(ReferencePolicy::Trust),
            _ => Err(format!(
                "Invalid reference policy: '{}'. Valid policies: enforce, trust",
                s
            )),
        }
    }
}

impl fmt::Display for ReferencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferencePolicy::Enforce => write!(f, "enforce"),
            ReferencePolicy::Trust => write!(f, "trust"),
        }
    }
}
