use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use quote_cli::remote::{RemoteModifiers, RemoteOverrides, RemoteQuoteRequest};
use quote_cli::render::{render_breakdown, render_candidates, CandidateRow};
use quote_cli::QuoteClient;
use quote_core::{
    compute_quote, demo_fleet, load_fleet, parse_override, rank_candidates, AircraftProfile,
    CandidateFilter, CostOverrides, Gazetteer, MedicalConfig, PricingBreakdown, PricingModifiers,
    RouteRequest,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Air-ambulance quotes and fleet ranking", long_about = None)]
struct Cli {
    /// Quote server URL; evaluate locally when omitted
    #[arg(long, global = true, env = "QUOTE_SERVER_URL")]
    url: Option<String>,

    /// JSON fleet export (local mode); demo fleet when omitted
    #[arg(long, global = true)]
    fleet: Option<PathBuf>,

    /// JSON city list (local mode); builtin gazetteer when omitted
    #[arg(long, global = true)]
    cities: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute an itemized quote
    Quote(QuoteArgs),
    /// Rank dispatchable aircraft by distance to the pickup city
    Rank(RankArgs),
    /// List known cities
    Cities,
}

#[derive(Args, Debug)]
struct QuoteArgs {
    #[arg(long)]
    from: String,
    #[arg(long)]
    to: String,
    /// Aircraft id from the fleet
    #[arg(long)]
    aircraft: String,
    /// Add the emergency surcharge
    #[arg(long)]
    emergency: bool,
    /// Apply an insurance discount (percent, clamped to 5-50 in steps of 5)
    #[arg(long, allow_negative_numbers = true)]
    insurance_discount: Option<i64>,
    #[arg(long)]
    base_cost: Option<String>,
    #[arg(long)]
    positioning_cost: Option<String>,
    #[arg(long)]
    medical_crew_cost: Option<String>,
    #[arg(long)]
    landing_parking_cost: Option<String>,
    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct RankArgs {
    #[arg(long)]
    from: String,
    #[arg(long)]
    aircraft_type: Option<String>,
    #[arg(long)]
    icu: bool,
    #[arg(long)]
    ventilator: bool,
    #[arg(long)]
    doctor: bool,
    #[arg(long)]
    nurse: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let remote = cli.url.as_deref().map(QuoteClient::new);

    match &cli.command {
        Command::Quote(args) => {
            let quote = match &remote {
                Some(client) => client.quote(&remote_request(args))?,
                None => local_quote(&cli, args)?,
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print!("{}", render_breakdown(&quote));
            }
        }
        Command::Rank(args) => {
            let required = MedicalConfig {
                icu: args.icu,
                ventilator: args.ventilator,
                doctor_onboard: args.doctor,
                nurse_onboard: args.nurse,
            };
            let (source_city, rows) = match &remote {
                Some(client) => {
                    let ranked =
                        client.candidates(&args.from, args.aircraft_type.as_deref(), &required)?;
                    let rows: Vec<CandidateRow> = ranked
                        .candidates
                        .into_iter()
                        .map(|c| CandidateRow {
                            id: c.aircraft.id,
                            aircraft_type: c.aircraft.aircraft_type,
                            positioning_distance_km: c.positioning_distance_km,
                        })
                        .collect();
                    (ranked.source_city, rows)
                }
                None => local_rank(&cli, args, required)?,
            };
            print!("{}", render_candidates(&source_city, &rows));
        }
        Command::Cities => {
            let cities = match &remote {
                Some(client) => client.cities()?,
                None => gazetteer(&cli)?.cities().to_vec(),
            };
            for city in cities {
                println!(
                    "{:<16} {:>9.4} {:>9.4}",
                    city.name, city.location.latitude, city.location.longitude
                );
            }
        }
    }

    Ok(())
}

fn gazetteer(cli: &Cli) -> Result<Gazetteer> {
    match &cli.cities {
        Some(path) => Gazetteer::load(path).context("failed to load city list"),
        None => Ok(Gazetteer::builtin()),
    }
}

fn fleet(cli: &Cli) -> Result<Vec<AircraftProfile>> {
    match &cli.fleet {
        Some(path) => load_fleet(path).context("failed to load fleet"),
        None => Ok(demo_fleet()),
    }
}

fn modifiers(args: &QuoteArgs) -> PricingModifiers {
    match args.insurance_discount {
        Some(percent) => PricingModifiers::new(args.emergency, true, percent),
        None => PricingModifiers {
            emergency_surcharge_enabled: args.emergency,
            ..Default::default()
        },
    }
}

fn local_quote(cli: &Cli, args: &QuoteArgs) -> Result<PricingBreakdown> {
    let gazetteer = gazetteer(cli)?;
    let fleet = fleet(cli)?;

    let source = gazetteer
        .find(&args.from)
        .ok_or_else(|| anyhow!("unknown city '{}'", args.from))?;
    let destination = gazetteer
        .find(&args.to)
        .ok_or_else(|| anyhow!("unknown city '{}'", args.to))?;
    let aircraft = fleet
        .iter()
        .find(|aircraft| aircraft.id.eq_ignore_ascii_case(args.aircraft.trim()))
        .ok_or_else(|| anyhow!("unknown aircraft '{}'", args.aircraft))?;

    let overrides = CostOverrides {
        base_cost: args.base_cost.as_deref().and_then(parse_override),
        positioning_cost: args.positioning_cost.as_deref().and_then(parse_override),
        medical_crew_cost: args.medical_crew_cost.as_deref().and_then(parse_override),
        landing_parking_cost: args.landing_parking_cost.as_deref().and_then(parse_override),
    };

    let route = RouteRequest::new(source.clone(), destination.clone());
    compute_quote(&route, Some(aircraft), &modifiers(args), &overrides)
        .ok_or_else(|| anyhow!("route and aircraft must both be selected"))
}

fn local_rank(
    cli: &Cli,
    args: &RankArgs,
    required: MedicalConfig,
) -> Result<(String, Vec<CandidateRow>)> {
    let gazetteer = gazetteer(cli)?;
    let fleet = fleet(cli)?;
    let source = gazetteer
        .find(&args.from)
        .ok_or_else(|| anyhow!("unknown city '{}'", args.from))?;

    let filter = CandidateFilter {
        aircraft_type: args.aircraft_type.clone(),
        required_medical: required,
    };
    let rows = rank_candidates(source.location, &fleet, &filter)
        .into_iter()
        .map(|ranked| CandidateRow {
            id: ranked.aircraft.id.clone(),
            aircraft_type: ranked.aircraft.aircraft_type.clone(),
            positioning_distance_km: ranked.positioning_distance_km,
        })
        .collect();
    Ok((source.name.clone(), rows))
}

fn remote_request(args: &QuoteArgs) -> RemoteQuoteRequest {
    RemoteQuoteRequest {
        source_city: args.from.clone(),
        destination_city: args.to.clone(),
        aircraft_id: args.aircraft.clone(),
        modifiers: RemoteModifiers {
            emergency_surcharge_enabled: args.emergency,
            insurance_discount_enabled: args.insurance_discount.is_some(),
            insurance_discount_percent: args.insurance_discount,
        },
        overrides: RemoteOverrides {
            base_cost: args.base_cost.clone(),
            positioning_cost: args.positioning_cost.clone(),
            medical_crew_cost: args.medical_crew_cost.clone(),
            landing_parking_cost: args.landing_parking_cost.clone(),
        },
    }
}
