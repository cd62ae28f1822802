use std::path::Path;

use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{OutputFormat, apply_table_style, to_json};
use crate::seed::{SeedOptions, SeedReport, seed_database};

#[derive(Tabled)]
pub(crate) struct BucketRow {
    #[tabled(rename = "Group")]
    pub(crate) group: &'static str,
    #[tabled(rename = "Value")]
    pub(crate) value: String,
    #[tabled(rename = "Tickets")]
    pub(crate) count: u64,
}

pub async fn seed(path: &Path, options: &SeedOptions, format: OutputFormat) -> CliResult<String> {
    let report = seed_database(path, options).await?;

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Table => Ok(format_report(&report)),
    }
}

pub(crate) fn format_report(report: &SeedReport) -> String {
    let rows: Vec<BucketRow> = report
        .by_priority
        .iter()
        .map(|g| ("priority", g))
        .chain(report.by_status.iter().map(|g| ("status", g)))
        .map(|(group, g)| BucketRow {
            group,
            value: g.key.clone(),
            count: g.count,
        })
        .collect();

    let mut table = Table::new(rows);
    apply_table_style(&mut table);

    format!(
        "Created {} tickets in {} ({} urgent today)\n{}",
        report.total,
        report.path.display(),
        report.urgent_today,
        table
    )
}
