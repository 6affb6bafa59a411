use crate::{
    display::render_itinerary,
    gate::{AccessGate, GateState},
    session::PlannerSession,
    types::{Budget, TripRequest},
    ItineraryGenerator,
};
use clap::{Arg, ArgAction, Command};
use std::env;
use tracing::{error, info};

/// CLI entry point for the trip-planner tool
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-planner")
        .version("0.1.0")
        .about("Generate a day-by-day travel itinerary with Gemini")
        .arg(
            Arg::new("destination")
                .help("Destination city and country, e.g. \"Paris, France\"")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .help("Trip duration in days")
                .default_value("3"),
        )
        .arg(
            Arg::new("interests")
                .short('i')
                .long("interests")
                .value_name("INTERESTS")
                .help("Traveler interests, e.g. \"art, food\"")
                .required(true),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("TIER")
                .help("Budget tier: Budget, Mid-range, or Luxury")
                .default_value("Mid-range"),
        )
        .arg(
            Arg::new("season")
                .short('s')
                .long("season")
                .value_name("SEASON")
                .help("Time of year for the trip, e.g. \"Spring\""),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The Gemini model to use")
                .default_value("gemini-2.5-flash"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Gemini API key (or set GEMINI_API_KEY / API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Gemini base URL (or set GEMINI_BASE_URL env var)"),
        )
        .arg(
            Arg::new("geo-url")
                .long("geo-url")
                .value_name("URL")
                .help("IP geolocation lookup URL"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .default_value("120"),
        )
        .arg(
            Arg::new("skip-region-check")
                .long("skip-region-check")
                .help("Skip the region access check (for testing)")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Get API key from argument or environment
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("GEMINI_API_KEY").ok())
        .or_else(|| env::var("API_KEY").ok())
        .ok_or("Gemini API key is required. Set GEMINI_API_KEY environment variable or use --api-key")?;

    // Region gate runs before anything else; fail-closed
    if !matches.get_flag("skip-region-check") {
        let mut gate = AccessGate::new();
        if let Some(geo_url) = matches.get_one::<String>("geo-url") {
            gate = gate.with_lookup_url(geo_url.clone());
        }

        println!("Checking availability in your region...");
        let decision = gate.check().await;
        if GateState::from_decision(&decision) == GateState::Restricted {
            println!("The trip planner is not available in your region.");
            return Ok(());
        }
        info!("region check passed, planner available");
    }

    let budget: Budget = matches.get_one::<String>("budget").unwrap().parse()?;
    let duration_days: u32 = matches.get_one::<String>("days").unwrap().parse()?;
    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;

    let mut request = TripRequest::new(
        matches.get_one::<String>("destination").unwrap().clone(),
        duration_days,
        matches.get_one::<String>("interests").unwrap().clone(),
        budget,
    );
    if let Some(season) = matches.get_one::<String>("season") {
        request = request.with_time_of_year(season.clone());
    }

    let mut generator = ItineraryGenerator::new(api_key)
        .with_model(matches.get_one::<String>("model").unwrap().as_str())
        .with_timeout(std::time::Duration::from_secs(timeout_seconds));
    if let Some(base_url) = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("GEMINI_BASE_URL").ok())
    {
        generator = generator.with_base_url(base_url);
    }

    info!(
        "Generating itinerary for {} ({} days)",
        request.destination, request.duration_days
    );
    println!("Generating your itinerary, this can take a moment...");

    let session = PlannerSession::new();
    let token = session.begin_request();

    match generator.generate(&request).await {
        Ok(itinerary) => {
            session.accept(token, itinerary);
            if let Some(itinerary) = session.itinerary() {
                println!("\n{}", render_itinerary(&itinerary));
            }
            info!("itinerary generation completed successfully");
        }
        Err(e) => {
            error!("itinerary generation failed: {}", e);
            println!(
                "Failed to generate itinerary. The model may be overloaded or the request was \
                 filtered. Please try again with different inputs."
            );
        }
    }

    Ok(())
}
