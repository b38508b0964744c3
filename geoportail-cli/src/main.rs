use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use geoportail_lib::error::ApiError;
use geoportail_lib::model::{AddressResult, Coordinates};
use geoportail_lib::{DEFAULT_API_URL, DEFAULT_SEARCH_LIMIT, GeoportailClient};
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(version, about = "Query the geoportail.lu geocoding API")]
struct Cli {
    /// Base URL of the API.
    #[arg(long, env = "GEOPORTAIL_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Where to write the debug log.
    #[arg(long, default_value = "geoportail.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Search addresses
    Address {
        query: String,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
    /// Search localities
    Locality {
        query: String,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
    /// Address at a position
    Reverse {
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
    },
    /// Area and position of a postcode
    Postcode { zip: String },
}

fn format_coordinates(coordinates: &[f64]) -> String {
    match coordinates {
        [lon, lat, ..] => format!("{:.6},{:.6}", lon, lat),
        _ => "-".to_string(),
    }
}

fn print_results(results: &[AddressResult]) {
    if results.is_empty() {
        println!("no results");
    }
    for result in results {
        println!("{}\t{}", result.label, format_coordinates(&result.coordinates));
    }
}

async fn run(client: &GeoportailClient, cmd: Cmd) -> Result<(), ApiError> {
    match cmd {
        Cmd::Address { query, limit } => {
            print_results(&client.search_addresses(&query, limit).await?);
        }
        Cmd::Locality { query, limit } => {
            print_results(&client.search_localities(&query, limit).await?);
        }
        Cmd::Reverse { lon, lat } => match client.reverse_geocode(Coordinates::new(lat, lon)).await? {
            Some(location) => println!(
                "{}\t{}",
                location.address,
                format_coordinates(&location.coordinates)
            ),
            None => println!("no results"),
        },
        Cmd::Postcode { zip } => match client.lookup_postcode(&zip).await? {
            Some(postcode) => println!(
                "{}\t{}",
                postcode.location,
                format_coordinates(&postcode.coordinates)
            ),
            None => println!("no results"),
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; GEOPORTAIL_API_URL may come from the shell.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let client = match GeoportailClient::builder()
        .base_url(cli.api_url)
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&client, cli.cmd).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
