mod render;

use std::path::PathBuf;
use std::time::Duration;

use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use manse_chart::{
    ChartRequest, ChartResult, TimeBasis, ZoneResolver, compute_chart, solar_terms_in_year,
};
use manse_config::{ManseConfig, ProviderKind};
use manse_cycle::{AnnualPillar, Gender, PolarityConvention};
use manse_ephem::SolarEphemeris;
use manse_geo::{
    GeoapifyProvider, GeocodeProvider, Geocoder, NominatimProvider, OpenMeteoProvider,
    TzfZoneResolver,
};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "manse", about = "Four Pillars (사주) calendar calculator")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, default_value = "manse.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars and luck cycle for a birth time and place
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// Latitude in degrees north
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees east
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Place name to geocode instead of --lat/--lon
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        place: Option<String>,
        /// Clock the time was read on: standard or lmt
        #[arg(long)]
        basis: Option<TimeBasis>,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Branch polarity for ten gods: index or functional
        #[arg(long)]
        convention: Option<PolarityConvention>,
        /// Also print the annual pillars of this luck pillar (1-10)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        decade: Option<u8>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// The 24 solar terms of a year
    Terms {
        #[arg(long, allow_hyphen_values = true)]
        year: i32,
        /// Also show times in this IANA zone
        #[arg(long)]
        zone: Option<Tz>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a place name to coordinates
    Geocode {
        text: String,
        #[arg(long)]
        limit: Option<usize>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// IANA time zone at a coordinate
    Zone {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

#[derive(Serialize)]
struct ChartOutput<'a> {
    chart: &'a ChartResult,
    annual: Option<&'a [AnnualPillar]>,
}

fn exit_with(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => exit_with(e),
    }
}

fn build_geocoder(config: &ManseConfig) -> Geocoder {
    let geo = &config.geocoder;
    let timeout = Duration::from_secs(geo.timeout_secs);
    let providers: Vec<Box<dyn GeocodeProvider>> = geo
        .active_providers()
        .into_iter()
        .map(|kind| -> Box<dyn GeocodeProvider> {
            match kind {
                ProviderKind::Geoapify => Box::new(GeoapifyProvider::new(
                    geo.geoapify_api_key.clone().unwrap_or_default(),
                    timeout,
                )),
                ProviderKind::OpenMeteo => Box::new(OpenMeteoProvider::new(timeout)),
                ProviderKind::Nominatim => {
                    Box::new(NominatimProvider::new(geo.user_agent.clone(), timeout))
                }
            }
        })
        .collect();
    Geocoder::new(providers).with_max_attempts(geo.max_attempts)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ManseConfig::load(&cli.config)
        .unwrap_or_else(|e| exit_with(e))
        .with_env(|name| std::env::var(name).ok());
    debug!(path = %cli.config.display(), "config loaded");

    match cli.command {
        Commands::Chart {
            date,
            time,
            lat,
            lon,
            place,
            basis,
            gender,
            convention,
            decade,
            json,
        } => {
            let (latitude, longitude) = match place {
                Some(text) => {
                    let found = build_geocoder(&config)
                        .resolve(&text, 1)
                        .unwrap_or_else(|e| exit_with(e));
                    let Some(first) = found.into_iter().next() else {
                        exit_with(format!("no place found for {text:?}"));
                    };
                    if !json {
                        println!(
                            "Place: {} ({:.4}, {:.4})",
                            first.label, first.latitude, first.longitude
                        );
                    }
                    (first.latitude, first.longitude)
                }
                None => (
                    lat.unwrap_or(config.chart.latitude),
                    lon.unwrap_or(config.chart.longitude),
                ),
            };
            let basis = basis.unwrap_or(config.chart.basis);
            let convention = convention.unwrap_or(config.chart.convention);

            let request = ChartRequest::parse(&date, &time, latitude, longitude, basis, gender)
                .unwrap_or_else(|e| exit_with(e))
                .with_convention(convention);
            let ephemeris = SolarEphemeris::default();
            let zones = TzfZoneResolver::new();
            let result =
                compute_chart(&ephemeris, &zones, &request).unwrap_or_else(|e| exit_with(e));
            let annual = decade.map(|order| {
                (
                    order,
                    result.annual_table(order).unwrap_or_else(|e| exit_with(e)),
                )
            });

            if json {
                print_json(&ChartOutput {
                    chart: &result,
                    annual: annual.as_ref().map(|(_, rows)| rows.as_slice()),
                });
            } else {
                print!("{}", render::chart_text(&result));
                if let Some((order, rows)) = &annual {
                    println!();
                    print!("{}", render::annual_text(*order, rows));
                }
            }
        }

        Commands::Terms { year, zone, json } => {
            let ephemeris = SolarEphemeris::default();
            let events = solar_terms_in_year(&ephemeris, year).unwrap_or_else(|e| exit_with(e));
            if json {
                print_json(&events);
            } else {
                print!("{}", render::terms_text(year, &events, zone));
            }
        }

        Commands::Geocode { text, limit, json } => {
            let limit = limit.unwrap_or(config.geocoder.result_limit);
            let places = build_geocoder(&config)
                .resolve(&text, limit)
                .unwrap_or_else(|e| exit_with(e));
            if json {
                print_json(&places);
            } else if places.is_empty() {
                println!("No places found for {text:?}");
            } else {
                print!("{}", render::places_text(&places));
            }
        }

        Commands::Zone { lat, lon } => match TzfZoneResolver::new().zone_for(lat, lon) {
            Some(name) => println!("{name}"),
            None => exit_with(format!("no time zone found at ({lat}, {lon})")),
        },
    }
}
