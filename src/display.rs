//! Terminal rendering of a generated itinerary.

use std::fmt::Write;

use crate::types::{Activity, DailyPlan, Itinerary};

/// Icon category for an activity, keyed off its free-text time label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlotIcon {
    Sun,
    Moon,
    Dining,
    Default,
}

impl TimeSlotIcon {
    pub fn symbol(&self) -> &'static str {
        match self {
            TimeSlotIcon::Sun => "☀",
            TimeSlotIcon::Moon => "☾",
            TimeSlotIcon::Dining => "🍴",
            TimeSlotIcon::Default => "•",
        }
    }
}

/// Classify a free-text time label by case-insensitive substring match.
/// The labels come from the generative service, so this stays deliberately
/// loose.
pub fn icon_for(time_label: &str) -> TimeSlotIcon {
    let time = time_label.to_lowercase();
    if time.contains("morning") || time.contains("afternoon") {
        TimeSlotIcon::Sun
    } else if time.contains("evening") || time.contains("night") {
        TimeSlotIcon::Moon
    } else if time.contains("breakfast") || time.contains("lunch") || time.contains("dinner") {
        TimeSlotIcon::Dining
    } else {
        TimeSlotIcon::Default
    }
}

/// Render the full itinerary as terminal day cards, in the order received.
pub fn render_itinerary(itinerary: &Itinerary) -> String {
    let mut out = String::new();
    out.push_str("Your Personalized Itinerary\n");
    out.push_str("===========================\n\n");

    for day_plan in itinerary {
        render_day_card(&mut out, day_plan);
    }

    out
}

fn render_day_card(out: &mut String, day_plan: &DailyPlan) {
    let _ = writeln!(out, "Day {} — {}", day_plan.day, day_plan.title);
    for activity in &day_plan.activities {
        render_activity(out, activity);
    }
    out.push('\n');
}

fn render_activity(out: &mut String, activity: &Activity) {
    let icon = icon_for(&activity.time);
    let _ = writeln!(
        out,
        "  {} {}: {}",
        icon.symbol(),
        activity.time,
        activity.description
    );
    if let Some(details) = &activity.details {
        let _ = writeln!(out, "      {}", details);
    }
    if let Some(restaurant) = &activity.restaurant {
        let _ = writeln!(out, "      at {} ({})", restaurant.name, restaurant.cuisine);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Restaurant;

    #[test]
    fn test_icon_classification() {
        assert_eq!(icon_for("Morning"), TimeSlotIcon::Sun);
        assert_eq!(icon_for("Late Afternoon"), TimeSlotIcon::Sun);
        assert_eq!(icon_for("Evening"), TimeSlotIcon::Moon);
        assert_eq!(icon_for("night"), TimeSlotIcon::Moon);
        assert_eq!(icon_for("Lunch"), TimeSlotIcon::Dining);
        assert_eq!(icon_for("Breakfast"), TimeSlotIcon::Dining);
        assert_eq!(icon_for("Dinner"), TimeSlotIcon::Dining);
        assert_eq!(icon_for("Siesta"), TimeSlotIcon::Default);
    }

    #[test]
    fn test_render_day_cards_in_order() {
        let itinerary = vec![
            DailyPlan {
                day: 1,
                title: "Arrival".to_string(),
                activities: vec![Activity {
                    time: "Morning".to_string(),
                    description: "Check in".to_string(),
                    details: None,
                    restaurant: None,
                }],
            },
            DailyPlan {
                day: 2,
                title: "Museums".to_string(),
                activities: vec![],
            },
        ];

        let rendered = render_itinerary(&itinerary);
        let day1 = rendered.find("Day 1 — Arrival").unwrap();
        let day2 = rendered.find("Day 2 — Museums").unwrap();
        assert!(day1 < day2);
    }

    #[test]
    fn test_render_dining_activity_with_restaurant() {
        let itinerary = vec![DailyPlan {
            day: 1,
            title: "Food day".to_string(),
            activities: vec![Activity {
                time: "Dinner".to_string(),
                description: "Bistro classics".to_string(),
                details: Some("Book ahead".to_string()),
                restaurant: Some(Restaurant {
                    name: "Chez Janou".to_string(),
                    cuisine: "Provencal".to_string(),
                }),
            }],
        }];

        let rendered = render_itinerary(&itinerary);
        assert!(rendered.contains("🍴 Dinner: Bistro classics"));
        assert!(rendered.contains("Book ahead"));
        assert!(rendered.contains("at Chez Janou (Provencal)"));
    }
}
