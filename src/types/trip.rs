use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PlannerError, Result};

/// Spending tier for the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    Budget,
    #[serde(rename = "Mid-range")]
    MidRange,
    Luxury,
}

impl Budget {
    /// Label used in prompts and UI, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Budget => "Budget",
            Budget::MidRange => "Mid-range",
            Budget::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Budget {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(Budget::Budget),
            "mid-range" | "midrange" | "mid" => Ok(Budget::MidRange),
            "luxury" => Ok(Budget::Luxury),
            other => Err(PlannerError::InvalidRequest(format!(
                "unknown budget `{}` (expected Budget, Mid-range, or Luxury)",
                other
            ))),
        }
    }
}

/// Trip parameters collected from the user before generation.
///
/// `time_of_year` is optional: the earlier form variant did not collect it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub duration_days: u32,
    pub interests: String,
    pub budget: Budget,
    pub time_of_year: Option<String>,
}

impl TripRequest {
    pub fn new(
        destination: impl Into<String>,
        duration_days: u32,
        interests: impl Into<String>,
        budget: Budget,
    ) -> Self {
        Self {
            destination: destination.into(),
            duration_days,
            interests: interests.into(),
            budget,
            time_of_year: None,
        }
    }

    pub fn with_time_of_year(mut self, time_of_year: impl Into<String>) -> Self {
        self.time_of_year = Some(time_of_year.into());
        self
    }

    /// Check submission constraints: non-empty destination and interests,
    /// positive duration.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(PlannerError::InvalidRequest(
                "destination must not be empty".to_string(),
            ));
        }
        if self.interests.trim().is_empty() {
            return Err(PlannerError::InvalidRequest(
                "interests must not be empty".to_string(),
            ));
        }
        if self.duration_days == 0 {
            return Err(PlannerError::InvalidRequest(
                "duration must be at least 1 day".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_parsing() {
        assert_eq!("Budget".parse::<Budget>().unwrap(), Budget::Budget);
        assert_eq!("mid-range".parse::<Budget>().unwrap(), Budget::MidRange);
        assert_eq!("Luxury".parse::<Budget>().unwrap(), Budget::Luxury);
        assert!("opulent".parse::<Budget>().is_err());
    }

    #[test]
    fn test_budget_serialized_labels() {
        let json = serde_json::to_string(&Budget::MidRange).unwrap();
        assert_eq!(json, "\"Mid-range\"");
        assert_eq!(Budget::MidRange.to_string(), "Mid-range");
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let request = TripRequest::new("", 3, "art", Budget::Budget);
        assert!(request.validate().is_err());

        let request = TripRequest::new("Paris, France", 3, "  ", Budget::Budget);
        assert!(request.validate().is_err());

        let request = TripRequest::new("Paris, France", 0, "art", Budget::Budget);
        assert!(request.validate().is_err());

        let request = TripRequest::new("Paris, France", 3, "art", Budget::Budget);
        assert!(request.validate().is_ok());
    }
}
