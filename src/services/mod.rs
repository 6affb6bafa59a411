//! Network-facing services: the Gemini text endpoint and the IP lookup.

pub mod gemini;
pub mod generator;
pub mod geoip;

pub use gemini::GeminiClient;
pub use generator::{build_prompt, itinerary_schema, parse_itinerary, ItineraryGenerator};
pub use geoip::GeoIpClient;
