pub mod itinerary;
pub mod trip;

pub use itinerary::{Activity, DailyPlan, Itinerary, Restaurant};
pub use trip::{Budget, TripRequest};
