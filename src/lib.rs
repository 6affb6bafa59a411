//! trip-planner-rs: a Gemini-backed day-by-day trip itinerary planner
//!
//! This library turns trip parameters (destination, duration, interests,
//! budget, season) into a prompt plus a declared JSON response schema, issues
//! one call to the Gemini text API, and decodes the reply into a typed
//! [`Itinerary`]. A separate region gate queries an IP geolocation service
//! once per session and fails closed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{Budget, ItineraryGenerator, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = ItineraryGenerator::from_env()?;
//!
//!     let request = TripRequest::new("Paris, France", 3, "art, food", Budget::MidRange)
//!         .with_time_of_year("Spring");
//!
//!     let itinerary = generator.generate(&request).await?;
//!     for day in &itinerary {
//!         println!("Day {}: {}", day.day, day.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod display;
pub mod error;
pub mod gate;
pub mod services;
pub mod session;
pub mod types;

pub use display::{icon_for, render_itinerary, TimeSlotIcon};
pub use error::{PlannerError, Result};
pub use gate::{AccessDecision, AccessGate, GateState, ALLOWED_CONTINENT};
pub use services::{build_prompt, itinerary_schema, parse_itinerary, ItineraryGenerator};
pub use session::{PlannerSession, RequestToken};
pub use types::{Activity, Budget, DailyPlan, Itinerary, Restaurant, TripRequest};

#[cfg(feature = "cli")]
pub mod cli;
