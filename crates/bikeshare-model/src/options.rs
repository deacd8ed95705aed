//! Options that change how reports are computed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a derived ratio does with a row whose denominator is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioPolicy {
    /// The row's ratio is NaN; grouped means skip it.
    #[default]
    Nan,
    /// The row's ratio is 0.0.
    Zero,
    /// The row is dropped from the derived table.
    Exclude,
    /// The derivation fails with `UndefinedRatio`.
    Reject,
}

impl RatioPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatioPolicy::Nan => "nan",
            RatioPolicy::Zero => "zero",
            RatioPolicy::Exclude => "exclude",
            RatioPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for RatioPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RatioPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nan" => Ok(RatioPolicy::Nan),
            "zero" => Ok(RatioPolicy::Zero),
            "exclude" => Ok(RatioPolicy::Exclude),
            "reject" => Ok(RatioPolicy::Reject),
            other => Err(format!("unknown ratio policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub ratio_policy: RatioPolicy,
}

impl ReportOptions {
    #[must_use]
    pub fn with_ratio_policy(mut self, policy: RatioPolicy) -> Self {
        self.ratio_policy = policy;
        self
    }
}
