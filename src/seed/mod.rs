//! Database seeding.
//!
//! Builds the demonstration support database: schema plus a week of
//! realistic tickets. This is the only code path that writes tickets.

mod data;
mod generator;


use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use miette::Diagnostic;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::db::{
    Database, DbError, GroupBy, GroupCount, Priority, SqliteDatabase, TicketFilter,
    TicketRepository,
};

pub use data::{CLIENTS, SUBJECTS};
pub use generator::{URGENT_TODAY, format_timestamp, generate_tickets};

/// Size of the reference dataset.
pub const DEFAULT_TICKET_COUNT: usize = 60;

#[derive(Error, Diagnostic, Debug)]
pub enum SeedError {
    #[error("Database already exists at {}", .path.display())]
    #[diagnostic(
        code(soporte::seed::exists),
        help("Pass --force to delete it and seed a fresh copy")
    )]
    Exists { path: PathBuf },

    #[error("Failed to prepare database file: {0}")]
    #[diagnostic(code(soporte::seed::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to generate tickets: {message}")]
    #[diagnostic(code(soporte::seed::generation))]
    Generation { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),
}

/// How to seed.
#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub count: usize,
    /// Fixed RNG seed for a reproducible dataset; random when `None`.
    pub rng_seed: Option<u64>,
    /// Replace an existing database file.
    pub force: bool,
    /// Reference time the dataset is generated around.
    pub now: NaiveDateTime,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_TICKET_COUNT,
            rng_seed: None,
            force: false,
            now: Local::now().naive_local(),
        }
    }
}

/// Summary of a seeding run, read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub path: PathBuf,
    pub total: u64,
    pub urgent_today: u64,
    pub by_priority: Vec<GroupCount>,
    pub by_status: Vec<GroupCount>,
}

/// Recreate the database at `path` and fill it with generated tickets.
pub async fn seed_database(path: &Path, options: &SeedOptions) -> Result<SeedReport, SeedError> {
    if path.exists() {
        if !options.force {
            return Err(SeedError::Exists {
                path: path.to_path_buf(),
            });
        }
        info!(path = %path.display(), "removing existing database");
        std::fs::remove_file(path)?;
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut rng = match options.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let tickets = generate_tickets(options.count, options.now, &mut rng)?;

    let db = SqliteDatabase::create(path).await?;
    let inserted = db.insert_tickets(&tickets).await?;
    info!(path = %path.display(), inserted, "seeded ticket database");

    let today = options.now.date().format("%Y-%m-%d").to_string();
    let urgent_today = tickets
        .iter()
        .filter(|t| t.priority == Priority::Urgent && t.created_at.starts_with(&today))
        .count() as u64;

    let repo = db.tickets();
    let report = SeedReport {
        path: path.to_path_buf(),
        total: repo.count(&TicketFilter::default()).await?,
        urgent_today,
        by_priority: repo.count_by(GroupBy::Priority).await?,
        by_status: repo.count_by(GroupBy::Status).await?,
    };
    db.close().await;

    Ok(report)
}
