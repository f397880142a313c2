use serde::{Deserialize, Serialize};
use std::fmt;

/// Years below this are Junior.
pub const MID_LEVEL_MIN_YEARS: f64 = 2.0;
/// Years above this are Senior.
pub const MID_LEVEL_MAX_YEARS: f64 = 4.0;

/// Seniority band derived from years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Classifies years of experience; both 2 and 4 are Mid.
    pub fn from_years(years: f64) -> Self {
        if years < MID_LEVEL_MIN_YEARS {
            ExperienceLevel::Junior
        } else if years <= MID_LEVEL_MAX_YEARS {
            ExperienceLevel::Mid
        } else {
            ExperienceLevel::Senior
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
