use serde::{Deserialize, Serialize};

/// Ordered day-by-day plan returned by the generative service.
///
/// Day numbers are expected to start at 1 and increase monotonically; that is
/// part of the service contract declared in the response schema, not an
/// invariant this crate enforces.
pub type Itinerary = Vec<DailyPlan>;

/// One day of the itinerary with its scheduled activities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    /// 1-based day counter within the itinerary
    pub day: u32,
    /// Short summary or theme for the day
    pub title: String,
    /// Activities for the day in chronological order
    pub activities: Vec<Activity>,
}

/// A single scheduled activity within a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text slot label, e.g. "Morning", "Afternoon", "Evening"
    pub time: String,
    /// Concise description of the activity or dining suggestion
    pub description: String,
    /// Optional longer description with tips, booking info, or context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Populated only for dining activities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Restaurant>,
}

/// Restaurant suggestion attached to a dining activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_optional_fields_default_to_none() {
        let json = r#"{"time": "Morning", "description": "Visit the Louvre"}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert!(activity.details.is_none());
        assert!(activity.restaurant.is_none());
    }

    #[test]
    fn test_dining_activity_carries_restaurant() {
        let json = r#"{
            "time": "Dinner",
            "description": "Classic bistro meal",
            "restaurant": {"name": "Chez Janou", "cuisine": "Provencal"}
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        let restaurant = activity.restaurant.unwrap();
        assert_eq!(restaurant.name, "Chez Janou");
        assert_eq!(restaurant.cuisine, "Provencal");
    }
}
