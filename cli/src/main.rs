//! `gatectl`: operator CLI for the school gate service.
//!
//! Talks to the same REST endpoints and status socket as the browser
//! front-end. Logs go to stderr; stdout carries results only, as plain text
//! or as JSON with `--json`.

mod client;
mod error;
mod watch;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use gatewire::model::Credentials;
use gatewire::{ChannelScope, PageCursor, TriggerAction};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::client::{ApiClient, ws_base};
use crate::error::CliError;
use crate::watch::{StatusWatcher, send_trigger};

/// Time allowed for a one-shot trigger socket to open.
const TRIGGER_OPEN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser, Debug)]
#[command(name = "gatectl", about = "School gate control CLI")]
struct Cli {
    #[arg(long, env = "GATECTL_SERVER", default_value = "https://localhost")]
    server: String,

    #[arg(long, env = "GATECTL_TOKEN")]
    token: Option<String>,

    /// Temporary access link used instead of a token.
    #[arg(long, env = "GATECTL_TEMP_LINK")]
    link: Option<String>,

    /// Print results as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a token and print it.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Show the signed-in user's profile and permissions.
    Info,
    /// Stream gate states until interrupted.
    Watch,
    /// Send one trigger and exit.
    Trigger { action: TriggerAction },
    #[command(name = "temp-access")]
    TempAccess(TempAccessCommand),
    Plates(PlatesCommand),
    History(HistoryCommand),
    /// Current occupancy and parked vehicles.
    Parking,
}

#[derive(Args, Debug)]
struct TempAccessCommand {
    #[command(subcommand)]
    command: TempAccessSubcommand,
}

#[derive(Subcommand, Debug)]
enum TempAccessSubcommand {
    List,
    Show { link: String },
    Delete { link: String },
}

#[derive(Args, Debug)]
struct PlatesCommand {
    #[command(subcommand)]
    command: PlatesSubcommand,
}

#[derive(Subcommand, Debug)]
enum PlatesSubcommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Add { ecv: String },
    Allow { id: i64 },
    Deny { id: i64 },
    Delete { id: i64 },
}

#[derive(Args, Debug)]
struct HistoryCommand {
    #[command(subcommand)]
    command: HistorySubcommand,
}

#[derive(Subcommand, Debug)]
enum HistorySubcommand {
    Triggers {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    States {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

impl Cli {
    /// Socket scope: the token wins over a temporary link.
    fn scope(&self) -> Result<ChannelScope, CliError> {
        match (&self.token, &self.link) {
            (Some(token), _) => Ok(ChannelScope::Token(token.clone())),
            (None, Some(link)) => Ok(ChannelScope::TempLink(link.clone())),
            (None, None) => Err(CliError::MissingScope),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        tracing::error!(%error, "command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = ApiClient::new(&cli.server, cli.token.clone())?;
    let json = cli.json;

    match &cli.command {
        Command::Login { username, password } => {
            let credentials = Credentials { username: username.clone(), password: password.clone() };
            let token = client.obtain_token(&credentials).await?;
            if json {
                print_json(&serde_json::json!({ "access": token }))?;
            } else {
                println!("{token}");
            }
        }
        Command::Info => {
            let info = client.general_info().await?;
            if json {
                print_json(&info)?;
            } else {
                let permissions = info.permissions();
                let username = info.user.as_ref().map_or("", |user| user.username.as_str());
                println!("user: {username}");
                println!("open vehicle: {}", permissions.open_vehicle);
                println!("open pedestrian: {}", permissions.open_pedestrian);
                println!("close gate: {}", permissions.close_gate);
                println!("admin: {}", permissions.admin);
            }
        }
        Command::Watch => {
            let scope = cli.scope()?;
            let base = ws_base(client.origin())?;
            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("interrupt received, closing status channel");
                }
                let _ = shutdown_tx.send(true);
            });
            StatusWatcher::new(&scope, &base)
                .run(shutdown_rx, |state| {
                    if json {
                        println!("{}", serde_json::json!({ "state": state.tag() }));
                    } else {
                        println!("{}", state.label());
                    }
                })
                .await;
        }
        Command::Trigger { action } => {
            let scope = cli.scope()?;
            let base = ws_base(client.origin())?;
            send_trigger(&scope, &base, *action, TRIGGER_OPEN_TIMEOUT).await?;
            if !json {
                println!("sent {action}");
            }
        }
        Command::TempAccess(command) => run_temp_access(&client, &command.command, json).await?,
        Command::Plates(command) => run_plates(&client, &command.command, json).await?,
        Command::History(command) => run_history(&client, &command.command, json).await?,
        Command::Parking => {
            let stats = client.parking_statistics().await?;
            let vehicles = client.parked_vehicles().await?;
            if json {
                print_json(&serde_json::json!({ "statistics": stats, "vehicles": vehicles }))?;
            } else {
                println!(
                    "parked: {} / {} ({}%)",
                    stats.current_parked,
                    gatewire::model::LOT_CAPACITY,
                    gatewire::model::occupancy_percent(stats.current_parked)
                );
                println!("today: {}", stats.today_visits());
                for (day, count) in &stats.daily_stats {
                    println!("  {day}: {count}");
                }
                for vehicle in &vehicles {
                    println!("{}\t{}", vehicle.ecv, vehicle.entered_at.to_rfc3339());
                }
            }
        }
    }
    Ok(())
}

async fn run_temp_access(client: &ApiClient, command: &TempAccessSubcommand, json: bool) -> Result<(), CliError> {
    match command {
        TempAccessSubcommand::List => {
            let grants = client.temporary_accesses().await?;
            if json {
                return print_json(&grants);
            }
            for grant in &grants {
                println!(
                    "{}\t{}\t{}\t{}\tv:{} p:{} c:{}",
                    grant.link,
                    grant.access_type.label(),
                    grant.ecv.as_deref().unwrap_or("-"),
                    grant.status.label(),
                    grant.open_vehicle.badge(),
                    grant.open_pedestrian.badge(),
                    grant.close_gate.badge(),
                );
            }
        }
        TempAccessSubcommand::Show { link } => {
            let grant = client.temporary_access(link).await?;
            print_json(&grant)?;
        }
        TempAccessSubcommand::Delete { link } => {
            client.delete_temporary_access(link).await?;
            if !json {
                println!("deleted {link}");
            }
        }
    }
    Ok(())
}

async fn run_plates(client: &ApiClient, command: &PlatesSubcommand, json: bool) -> Result<(), CliError> {
    match command {
        PlatesSubcommand::List { page } => {
            let data = client.license_plates(*page).await?;
            if json {
                return print_json(&data);
            }
            for plate in &data.results {
                let state = if plate.is_allowed { "allowed" } else { "denied" };
                println!("{}\t{}\t{state}", plate.id, plate.ecv);
            }
            print_window(&PageCursor::loaded(*page, &data));
        }
        PlatesSubcommand::Add { ecv } => client.add_license_plate(ecv).await?,
        PlatesSubcommand::Allow { id } => client.set_plate_allowed(*id, true).await?,
        PlatesSubcommand::Deny { id } => client.set_plate_allowed(*id, false).await?,
        PlatesSubcommand::Delete { id } => client.delete_license_plate(*id).await?,
    }
    Ok(())
}

async fn run_history(client: &ApiClient, command: &HistorySubcommand, json: bool) -> Result<(), CliError> {
    match command {
        HistorySubcommand::Triggers { page } => {
            let data = client.trigger_history(*page).await?;
            if json {
                return print_json(&data);
            }
            for record in &data.results {
                println!("{}\t{}\t{}", timestamp(record.timestamp.as_ref()), record.trigger_type, record.actor());
            }
            print_window(&PageCursor::loaded(*page, &data));
        }
        HistorySubcommand::States { page } => {
            let data = client.state_history(*page).await?;
            if json {
                return print_json(&data);
            }
            for record in &data.results {
                println!("{}\t{}", timestamp(record.timestamp.as_ref()), record.gate_state.tag());
            }
            print_window(&PageCursor::loaded(*page, &data));
        }
    }
    Ok(())
}

fn timestamp(at: Option<&chrono::DateTime<chrono::Utc>>) -> String {
    at.map_or_else(|| "-".to_owned(), chrono::DateTime::to_rfc3339)
}

fn print_window(cursor: &PageCursor) {
    match cursor.window() {
        Some((first, last)) => eprintln!("rows {first}-{last} of {} (page {})", cursor.count, cursor.page),
        None => eprintln!("no rows"),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
