use std::process::ExitCode;

use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use truematch::config::{LoggingSettings, Settings};
use truematch::models::{CreateMatchRequest, ErrorResponse, FindMatchesRequest};
use truematch::{Matcher, MatchingService, ProfileStore, ServiceError, SystemClock};

const USAGE: &str = "usage: truematch rank <userId> [limit]\n       truematch score <userId> <targetUserId>";

/// Command line action
#[derive(Debug, PartialEq)]
enum Command {
    Rank { user_id: String, limit: Option<u16> },
    Score { user_id: String, target_user_id: String },
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    match args {
        [cmd, user_id] if cmd == "rank" => Ok(Command::Rank {
            user_id: user_id.clone(),
            limit: None,
        }),
        [cmd, user_id, limit] if cmd == "rank" => {
            let limit = limit
                .parse::<u16>()
                .map_err(|e| format!("invalid limit {:?}: {}", limit, e))?;
            Ok(Command::Rank {
                user_id: user_id.clone(),
                limit: Some(limit),
            })
        }
        [cmd, user_id, target_user_id] if cmd == "score" => Ok(Command::Score {
            user_id: user_id.clone(),
            target_user_id: target_user_id.clone(),
        }),
        _ => Err(USAGE.to_string()),
    }
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout stays machine readable
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: ServiceError) -> ExitCode {
    let kind = match &err {
        ServiceError::Validation(_) | ServiceError::InvalidRequest(_) => "invalid_request",
        ServiceError::NotFound(_) => "not_found",
        ServiceError::Engine(_) => "invalid_profile",
        ServiceError::Source(_) => "source_error",
        ServiceError::InvalidTransition { .. } => "invalid_transition",
    };
    error!("Request failed: {}", err);
    print_json(&ErrorResponse {
        error: kind.to_string(),
        message: err.to_string(),
    });
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    let store = match ProfileStore::load(&settings.data.profiles_path).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load profiles from {}: {}", settings.data.profiles_path, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Loaded {} profiles from {}", store.len(), settings.data.profiles_path);

    let matcher = Matcher::new(settings.weights());
    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let service = MatchingService::new(store, SystemClock, matcher, settings.matching);

    match command {
        Command::Rank { user_id, limit } => {
            let request = FindMatchesRequest { user_id, limit };
            match service.find_potential_matches(&request).await {
                Ok(response) => print_json(&response),
                Err(e) => report(e),
            }
        }
        Command::Score { user_id, target_user_id } => {
            let request = CreateMatchRequest { user_id, target_user_id };
            match service.create_match(&request).await {
                Ok(record) => print_json(&record),
                Err(e) => report(e),
            }
        }
    }
}
