//! Command-line interface
//!
//! `soporte serve` runs the MCP server; `seed` builds the database;
//! `list`, `stats` and `search` run the query operations locally.

mod commands;
pub mod error;
pub mod utils;

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::{Database, SqliteDatabase};
use crate::mcp::HttpConfig;
use crate::mcp::transport::DEFAULT_HTTP_PORT;
use crate::paths::resolve_db_path;
use crate::query::TicketQueryService;
use crate::seed::{DEFAULT_TICKET_COUNT, SeedOptions};

use self::commands::serve::Transport;
use self::commands::tickets::ListTicketsArgs;
use self::error::CliResult;
use self::utils::OutputFormat;

#[derive(Parser)]
#[command(name = "soporte")]
#[command(author, version, about = "Support ticket query service over MCP", long_about = None)]
pub struct Cli {
    /// Database file (default: SOPORTE_DB env or $XDG_DATA_HOME/soporte/soporte.db)
    #[arg(long, global = true, env = "SOPORTE_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the ticket tools over MCP (stdio unless --http)
    Serve {
        /// Use the Streamable HTTP transport instead of stdio
        #[arg(long)]
        http: bool,
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_HTTP_PORT)]
        port: u16,
    },
    /// Create the database and fill it with generated tickets
    Seed {
        /// Number of tickets to generate
        #[arg(long, default_value_t = DEFAULT_TICKET_COUNT)]
        tickets: usize,
        /// Seed for a reproducible dataset
        #[arg(long)]
        rng_seed: Option<u64>,
        /// Replace an existing database
        #[arg(long)]
        force: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// List tickets filtered by priority and status
    List {
        /// Priority: baja, media, alta, urgente
        #[arg(long)]
        priority: Option<String>,
        /// Status: abierto, cerrado
        #[arg(long)]
        status: Option<String>,
        /// Maximum number of tickets (1-100)
        #[arg(long)]
        limit: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Show ticket statistics
    Stats {
        /// Distribution column: estado, prioridad, cliente
        #[arg(long)]
        group_by: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Search ticket subjects and descriptions
    Search {
        /// Text to look for
        text: String,
        /// Field: asunto, descripcion, ambos
        #[arg(long)]
        field: Option<String>,
        /// Maximum number of tickets (1-100)
        #[arg(long)]
        limit: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Initialize tracing on stderr so stdout stays free for MCP and command output
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soporte=info,rmcp=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db)?;

    match cli.command {
        Commands::Serve { http, host, port } => {
            let transport = if http {
                Transport::Http(HttpConfig { host, port })
            } else {
                Transport::Stdio
            };
            commands::serve::serve(&db_path, transport).await
        }
        Commands::Seed {
            tickets,
            rng_seed,
            force,
            format,
        } => {
            let options = SeedOptions {
                count: tickets,
                rng_seed,
                force,
                now: Local::now().naive_local(),
            };
            let output = commands::seed::seed(&db_path, &options, format).await?;
            println!("{}", output);
            Ok(())
        }
        Commands::List {
            priority,
            status,
            limit,
            format,
        } => {
            let args = ListTicketsArgs {
                priority: priority.as_deref(),
                status: status.as_deref(),
                limit,
            };
            with_service(&db_path, |service| async move {
                commands::tickets::list_tickets(&service, args, format).await
            })
            .await
        }
        Commands::Stats { group_by, format } => {
            with_service(&db_path, |service| async move {
                commands::stats::show_statistics(&service, group_by.as_deref(), format).await
            })
            .await
        }
        Commands::Search {
            text,
            field,
            limit,
            format,
        } => {
            with_service(&db_path, |service| async move {
                commands::tickets::search_tickets(&service, &text, field.as_deref(), limit, format)
                    .await
            })
            .await
        }
    }
}

/// Open the database read-only, run one query command, print its output.
async fn with_service<F, Fut>(path: &Path, command: F) -> CliResult<()>
where
    F: FnOnce(TicketQueryService<SqliteDatabase>) -> Fut,
    Fut: Future<Output = CliResult<String>>,
{
    let db = Arc::new(SqliteDatabase::open(path).await?);
    let result = command(TicketQueryService::new(Arc::clone(&db))).await;
    db.close().await;

    println!("{}", result?);
    Ok(())
}
