//! Admin CLI over the signal store and mock screener.
//!
//! Each subcommand maps to one library operation and prints JSON (or a short
//! confirmation) to stdout, the same boundary an HTTP layer would wrap.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use serde_json::json;
use tracing::debug;

use common::logger;
use common::models::SignalDraft;
use screener::{ScreenerQuery, catalog};
use storage::{SignalStore, StoreError};

mod fixtures;

#[derive(Parser)]
#[command(name = "signals", about = "Admin CLI for the stock signal tracker")]
struct Cli {
    /// SQLite database file. Falls back to the SIGNALS_DB env var, then
    /// ./signals.db.
    #[arg(long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List signals as JSON, newest entry date first.
    List {
        /// Restrict to an exact status, e.g. "Active".
        #[arg(long)]
        status: Option<String>,
    },
    /// Record a new signal.
    Add {
        #[command(flatten)]
        fields: SignalArgs,
    },
    /// Replace every field of an existing signal.
    Update {
        id: i64,
        #[command(flatten)]
        fields: SignalArgs,
    },
    /// Permanently remove a signal.
    Delete { id: i64 },
    /// Filter the built-in quote catalog.
    Screener {
        #[arg(long)]
        exchange: Option<String>,
        #[arg(long)]
        sector: Option<String>,
        /// Named bracket, e.g. "$100.00-$199.99".
        #[arg(long)]
        price_range: Option<String>,
    },
    /// Print the demo performance report.
    Performance,
}

#[derive(Args)]
struct SignalArgs {
    /// Entry date, DD/MM/YYYY.
    #[arg(long)]
    entry_date: Option<String>,
    #[arg(long)]
    stock_name: Option<String>,
    #[arg(long)]
    entry_price: Option<f64>,
    #[arg(long)]
    target: Option<f64>,
    #[arg(long)]
    stop_loss: Option<f64>,
    /// Exit date, DD/MM/YYYY.
    #[arg(long)]
    exit_date: Option<String>,
    #[arg(long)]
    points: Option<f64>,
    #[arg(long)]
    profit_money: Option<f64>,
    #[arg(long)]
    status: Option<String>,
}

impl From<SignalArgs> for SignalDraft {
    fn from(args: SignalArgs) -> Self {
        SignalDraft {
            entry_date: args.entry_date,
            stock_name: args.stock_name,
            entry_price: args.entry_price,
            target: args.target,
            stop_loss: args.stop_loss,
            exit_date: args.exit_date,
            points: args.points,
            profit_money: args.profit_money,
            status: args.status,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logger::setup_logger();
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Screener {
            exchange,
            sector,
            price_range,
        } => {
            let query = ScreenerQuery {
                exchange,
                sector,
                price_range,
            };
            let quotes = screener::filter(&catalog::mock_catalog(), &query);
            let shown = |value: &Option<String>| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .unwrap_or("All")
                    .to_string()
            };
            let title = format!("{} / {} Results", shown(&query.exchange), shown(&query.sector));
            let body = json!({
                "title": title,
                "exchange": query.exchange,
                "sector": query.sector,
                "stocks": quotes,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Performance => {
            let body = json!({
                "signals": fixtures::sample_closed_signals(),
                "market_report": fixtures::MARKET_REPORT,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::SUCCESS)
        }
        command => {
            let db_path = database_path(cli.db);
            debug!("using database {}", db_path.display());
            let store = SignalStore::open(&db_path).await?;
            run_store_command(&store, command).await
        }
    }
}

async fn run_store_command(store: &SignalStore, command: Commands) -> Result<ExitCode> {
    let outcome = match command {
        Commands::List { status } => {
            let signals = match status {
                Some(status) => store.list_by_status(&status).await,
                None => store.list().await,
            };
            match signals {
                Ok(signals) => {
                    println!("{}", serde_json::to_string_pretty(&signals)?);
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        Commands::Add { fields } => store
            .add(&SignalDraft::from(fields))
            .await
            .map(|id| println!("Stock added (id {id})")),
        Commands::Update { id, fields } => store
            .update(id, &SignalDraft::from(fields))
            .await
            .map(|()| println!("Stock updated")),
        Commands::Delete { id } => store
            .delete(id)
            .await
            .map(|()| println!("Stock deleted successfully")),
        Commands::Screener { .. } | Commands::Performance => unreachable!("handled in main"),
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Client-side problems get the boundary's short message and a
        // non-zero exit; storage faults propagate as fatal.
        Err(err @ (StoreError::Validation(_) | StoreError::NotFound)) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(StoreError::Storage(err)) => Err(err.into()),
    }
}

fn database_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var("SIGNALS_DB").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("signals.db"))
}
