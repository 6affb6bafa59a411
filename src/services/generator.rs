use std::time::Duration;

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::{PlannerError, Result};
use crate::services::gemini::GeminiClient;
use crate::types::{Itinerary, TripRequest};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Generate the natural-language instruction for one trip request.
///
/// The destination, duration, interests, budget, and (when present)
/// time-of-year appear verbatim so the model sees exactly what the user typed.
pub fn build_prompt(request: &TripRequest) -> String {
    let mut prompt = format!(
        "You are an expert travel agent. Create a detailed, day-by-day travel itinerary for a trip.\n\n\
         **Trip Details:**\n\
         - **Destination:** {}\n\
         - **Duration:** {} days\n\
         - **Traveler Interests:** {}\n\
         - **Budget:** {}\n",
        request.destination, request.duration_days, request.interests, request.budget
    );

    if let Some(time_of_year) = &request.time_of_year {
        prompt.push_str(&format!("- **Time of Year:** {}\n", time_of_year));
    }

    prompt.push_str(
        "\nPlease provide a creative and practical itinerary. For each day, include a fun title \
         and a schedule for the morning, afternoon, and evening. Activities should include a mix \
         of sightseeing, dining, and experiences relevant to the interests. For dining, suggest \
         specific restaurants or types of cuisine that fit the specified budget. Include \
         practical details where possible.\n\n\
         Generate the response in a valid JSON format according to the provided schema.",
    );

    prompt
}

/// Declared response schema for the itinerary array.
///
/// Best-effort contract: the service is instructed to conform but may still
/// emit structurally invalid text, which the parser catches.
pub fn itinerary_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "day": {
                    "type": "INTEGER",
                    "description": "The day number of the itinerary, starting from 1."
                },
                "title": {
                    "type": "STRING",
                    "description": "A catchy and descriptive title for the day's plan."
                },
                "activities": {
                    "type": "ARRAY",
                    "description": "A list of activities planned for the day.",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "time": {
                                "type": "STRING",
                                "description": "Time of day for the activity, e.g., \"Morning\", \"Afternoon\", \"Evening\"."
                            },
                            "description": {
                                "type": "STRING",
                                "description": "A concise description of the activity or dining suggestion."
                            },
                            "details": {
                                "type": "STRING",
                                "description": "Optional longer description with tips, booking info, or context."
                            },
                            "restaurant": {
                                "type": "OBJECT",
                                "description": "Restaurant suggestion, only for dining activities.",
                                "properties": {
                                    "name": {"type": "STRING"},
                                    "cuisine": {"type": "STRING"}
                                },
                                "required": ["name", "cuisine"]
                            }
                        },
                        "required": ["time", "description"]
                    }
                }
            },
            "required": ["day", "title", "activities"]
        }
    })
}

/// Decode the service's textual reply into a typed itinerary.
///
/// A cheap bracket-delimiter check runs before the full decode; both failure
/// modes map to the same `Generation` error kind, distinguished only by
/// message.
pub fn parse_itinerary(text: &str) -> Result<Itinerary> {
    let trimmed = text.trim();

    if !trimmed.starts_with('[') || !trimmed.ends_with(']') {
        return Err(PlannerError::Generation(
            "invalid JSON response format: expected a JSON array".to_string(),
        ));
    }

    let mut deserializer = serde_json::Deserializer::from_str(trimmed);
    let itinerary: Itinerary =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            let path = err.path().to_string();
            let location = if path.is_empty() {
                "<root>".to_string()
            } else {
                path
            };
            PlannerError::Generation(format!(
                "failed to decode itinerary at {}: {}",
                location, err
            ))
        })?;

    Ok(itinerary)
}

/// High-level itinerary generation: prompt + schema in, typed itinerary out.
#[derive(Clone, Debug)]
pub struct ItineraryGenerator {
    client: GeminiClient,
    model: String,
    timeout: Duration,
    temperature: f64,
    top_p: f64,
}

impl ItineraryGenerator {
    pub fn new(api_key: String) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            temperature: 0.7,
            top_p: 0.9,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client.set_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| {
                PlannerError::Config(
                    "GEMINI_API_KEY environment variable must be set before creating a generator"
                        .to_string(),
                )
            })?;
        Ok(Self::new(api_key))
    }

    /// Issue exactly one generation call for the request and parse the reply.
    pub async fn generate(&self, request: &TripRequest) -> Result<Itinerary> {
        request.validate()?;

        let prompt = build_prompt(request);
        debug!(destination = %request.destination, days = request.duration_days, "built generation prompt");

        let body = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": itinerary_schema(),
                "temperature": self.temperature,
                "topP": self.top_p,
            }
        });

        let response = self
            .client
            .generate_content(&self.model, &body, self.timeout)
            .await?;

        let text = extract_response_text(&response)?;
        let itinerary = parse_itinerary(text)?;
        info!(days = itinerary.len(), "itinerary generated");

        Ok(itinerary)
    }
}

fn extract_response_text(response: &Value) -> Result<&str> {
    response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.get(0))
        .and_then(|part| part.get("text"))
        .and_then(|text| text.as_str())
        .ok_or_else(|| {
            PlannerError::Generation("response contained no candidate text".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Budget;

    fn sample_request() -> TripRequest {
        TripRequest::new("Paris, France", 3, "art, food", Budget::MidRange)
            .with_time_of_year("Spring")
    }

    #[test]
    fn test_prompt_contains_trip_details() {
        let prompt = build_prompt(&sample_request());

        assert!(prompt.contains("Paris, France"));
        assert!(prompt.contains("3 days"));
        assert!(prompt.contains("art, food"));
        assert!(prompt.contains("Mid-range"));
        assert!(prompt.contains("Spring"));
    }

    #[test]
    fn test_prompt_omits_absent_time_of_year() {
        let mut request = sample_request();
        request.time_of_year = None;
        let prompt = build_prompt(&request);

        assert!(!prompt.contains("Time of Year"));
    }

    #[test]
    fn test_schema_declares_required_fields() {
        let schema = itinerary_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["required"][0], "day");

        let activity = &schema["items"]["properties"]["activities"]["items"];
        assert_eq!(activity["required"], serde_json::json!(["time", "description"]));
        assert_eq!(
            activity["properties"]["restaurant"]["required"],
            serde_json::json!(["name", "cuisine"])
        );
    }

    #[test]
    fn test_parse_empty_array() {
        let itinerary = parse_itinerary("[]").unwrap();
        assert!(itinerary.is_empty());
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let itinerary = parse_itinerary("  []\n").unwrap();
        assert!(itinerary.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array_text() {
        let err = parse_itinerary("The itinerary is: ...").unwrap_err();
        assert_eq!(err.error_code(), "GENERATION_FAILURE");

        let err = parse_itinerary("{\"day\": 1}").unwrap_err();
        assert_eq!(err.error_code(), "GENERATION_FAILURE");
    }

    #[test]
    fn test_parse_rejects_malformed_json_between_brackets() {
        let err = parse_itinerary("[{\"day\": }]").unwrap_err();
        assert_eq!(err.error_code(), "GENERATION_FAILURE");
    }

    #[test]
    fn test_parse_one_day_without_restaurant() {
        let text = r#"[
            {
                "day": 1,
                "title": "Arrival and Old Town",
                "activities": [
                    {"time": "Morning", "description": "Walk the old town"}
                ]
            }
        ]"#;

        let itinerary = parse_itinerary(text).unwrap();
        assert_eq!(itinerary.len(), 1);
        assert_eq!(itinerary[0].day, 1);
        assert!(itinerary[0].activities[0].restaurant.is_none());
        assert!(itinerary[0].activities[0].details.is_none());
    }

    #[test]
    fn test_extract_response_text() {
        let response = json!({
            "candidates": [{
                "content": {"parts": [{"text": "[]"}]}
            }]
        });
        assert_eq!(extract_response_text(&response).unwrap(), "[]");

        let empty = json!({"candidates": []});
        assert!(extract_response_text(&empty).is_err());
    }

    #[test]
    fn test_generate_rejects_invalid_request() {
        let generator = ItineraryGenerator::new("test-key".to_string());
        let request = TripRequest::new("", 3, "art", Budget::Budget);

        let err = tokio_test::block_on(generator.generate(&request)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_REQUEST");
    }
}
