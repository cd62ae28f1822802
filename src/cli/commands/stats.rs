use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{OutputFormat, apply_table_style, to_json};
use crate::db::{Database, GroupCount};
use crate::query::{Statistics, TicketQueryService, TicketStatistics};

#[derive(Tabled)]
pub(crate) struct MetricRow {
    #[tabled(rename = "Metric")]
    pub(crate) metric: String,
    #[tabled(rename = "Tickets")]
    pub(crate) count: u64,
}

impl MetricRow {
    fn new(metric: impl Into<String>, count: u64) -> Self {
        Self {
            metric: metric.into(),
            count,
        }
    }
}

impl From<&GroupCount> for MetricRow {
    fn from(group: &GroupCount) -> Self {
        Self::new(group.key.clone(), group.count)
    }
}

pub async fn show_statistics<D: Database>(
    service: &TicketQueryService<D>,
    group_by: Option<&str>,
    format: OutputFormat,
) -> CliResult<String> {
    let request = Statistics::parse(group_by)?;
    let stats = service.statistics(&request).await?;

    match format {
        OutputFormat::Json => to_json(&stats),
        OutputFormat::Table => Ok(format_tables(&stats)),
    }
}

fn table_of(rows: Vec<MetricRow>) -> String {
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    table.to_string()
}

pub(crate) fn format_tables(stats: &TicketStatistics) -> String {
    let summary = vec![
        MetricRow::new("total", stats.total_tickets),
        MetricRow::new("open", stats.open_tickets),
        MetricRow::new("urgent", stats.urgent_tickets),
    ];
    let by_priority: Vec<MetricRow> = stats
        .by_priority
        .iter()
        .map(|(priority, count)| MetricRow::new(priority.to_string(), *count))
        .collect();
    let by_status: Vec<MetricRow> = stats
        .by_status
        .iter()
        .map(|(status, count)| MetricRow::new(status.to_string(), *count))
        .collect();
    let distribution: Vec<MetricRow> = stats.distribution.counts.iter().map(Into::into).collect();
    let top_clients: Vec<MetricRow> = stats.top_clients.iter().map(Into::into).collect();

    [
        ("Summary".to_string(), table_of(summary)),
        ("By priority".to_string(), table_of(by_priority)),
        ("By status".to_string(), table_of(by_status)),
        (
            format!("Distribution by {}", stats.distribution.group_by),
            table_of(distribution),
        ),
        ("Top clients".to_string(), table_of(top_clients)),
    ]
    .into_iter()
    .map(|(title, table)| format!("{}\n{}", title, table))
    .collect::<Vec<_>>()
    .join("\n\n")
}
