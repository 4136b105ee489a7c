use crate::{
    error::{PlannerError, Result},
    knowledge::landmarks_for,
    map::{MapBuilder, NominatimGeocoder},
    render::render_itinerary,
    services::inference::{DEFAULT_MODEL, DEFAULT_TIMEOUT},
    types::{BudgetTier, ItineraryRecord, TripRequest},
    TravelPlanner,
};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::{env, time::Duration};
use tracing::{error, info};

/// CLI entry point for the trip planner
pub async fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a personalized travel itinerary")
        .arg(
            Arg::new("destination")
                .help("Where you are travelling to")
                .required_unless_present("schema")
                .index(1),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("TIER")
                .help("Budget tier: budget, mid-range or luxury")
                .default_value("mid-range"),
        )
        .arg(
            Arg::new("people")
                .short('p')
                .long("people")
                .value_name("COUNT")
                .help("Number of travellers")
                .value_parser(value_parser!(u32))
                .default_value("2"),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("COUNT")
                .help("Trip length in days")
                .value_parser(value_parser!(u32))
                .default_value("3"),
        )
        .arg(
            Arg::new("interests")
                .short('i')
                .long("interests")
                .value_name("LIST")
                .help("Comma-separated interests, e.g. food,history,nature")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .required_unless_present("schema"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Hugging Face API key (or set HUGGING_FACE_API_KEY env var)"),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Hosted text-generation model (or set HF_MODEL env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Inference API base URL (or set HF_API_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .value_parser(value_parser!(u64))
                .default_value("30"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the itinerary as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("map")
                .long("map")
                .value_name("PATH")
                .help("Write an interactive HTML map of the itinerary to PATH"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .help("Print the JSON schema of the itinerary and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    match execute(&matches).await {
        Ok(()) => {
            info!("Trip planning completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Trip planning failed: {}", e);
            if matches.get_flag("json") {
                println!("{}", e.to_error_payload());
            }
            Err(e.into())
        }
    }
}

async fn execute(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("schema") {
        let schema = schemars::schema_for!(ItineraryRecord);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let destination = matches
        .get_one::<String>("destination")
        .ok_or_else(|| PlannerError::Config("A destination is required".to_string()))?;

    let budget: BudgetTier = matches
        .get_one::<String>("budget")
        .map(String::as_str)
        .unwrap_or("mid-range")
        .parse()?;

    let interests: Vec<String> = matches
        .get_many::<String>("interests")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let request = TripRequest::new(destination.as_str())
        .with_budget(budget)
        .with_people(matches.get_one::<u32>("people").copied().unwrap_or(2))
        .with_days(matches.get_one::<u32>("days").copied().unwrap_or(3))
        .with_interests(interests);

    let timeout = matches
        .get_one::<u64>("timeout")
        .map(|secs| Duration::from_secs(*secs))
        .unwrap_or(DEFAULT_TIMEOUT);

    // Get API key from argument or environment
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("HUGGING_FACE_API_KEY").ok())
        .filter(|key| !key.trim().is_empty());

    let planner = match api_key {
        Some(api_key) => {
            let model = matches
                .get_one::<String>("model")
                .cloned()
                .or_else(|| env::var("HF_MODEL").ok())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string());
            info!("Using model: {}", model);

            let mut planner = TravelPlanner::with_api_key(api_key)
                .with_model(model)
                .with_timeout(timeout);
            if let Some(base_url) = matches
                .get_one::<String>("base-url")
                .cloned()
                .or_else(|| env::var("HF_API_BASE_URL").ok())
            {
                info!("Base URL: {}", base_url);
                planner = planner.with_base_url(base_url);
            }
            planner
        }
        None => TravelPlanner::new(),
    };

    if !planner.has_generator() {
        info!("No Hugging Face API key found, using template itineraries");
    }
    info!("Planning a {}-day trip to {}", request.num_days, request.destination);

    let outcome = planner.generate_itinerary(&request).await?;

    for notice in &outcome.notices {
        eprintln!("{}", notice);
    }

    if matches.get_flag("json") {
        println!("{}", outcome.itinerary.to_json_pretty()?);
    } else {
        let landmarks = landmarks_for(&request.destination);
        println!("{}", render_itinerary(&outcome.itinerary, &landmarks));
    }

    if let Some(path) = matches.get_one::<String>("map") {
        let builder = MapBuilder::new(NominatimGeocoder::new());
        let mut rng = rand::thread_rng();
        let map = builder
            .build(&request.destination, &outcome.itinerary, &mut rng)
            .await;
        map.write_html(path).await?;
    }

    Ok(())
}
