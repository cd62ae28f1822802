use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{OutputFormat, apply_table_style, to_json, truncate_with_ellipsis};
use crate::db::{Database, ListResult, Ticket};
use crate::query::{ListTickets, SearchTickets, TicketQueryService};

#[derive(Tabled)]
pub(crate) struct TicketDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Client")]
    pub(crate) client: String,
    #[tabled(rename = "Subject")]
    pub(crate) subject: String,
    #[tabled(rename = "Priority")]
    pub(crate) priority: String,
    #[tabled(rename = "Status")]
    pub(crate) status: String,
    #[tabled(rename = "Created")]
    pub(crate) created_at: String,
}

impl From<&Ticket> for TicketDisplay {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id,
            client: truncate_with_ellipsis(&ticket.client, 24),
            subject: truncate_with_ellipsis(&ticket.subject, 40),
            priority: ticket.priority.to_string(),
            status: ticket.status.to_string(),
            // Seconds precision is enough for a table
            created_at: ticket.created_at.chars().take(19).collect(),
        }
    }
}

/// Filters for `soporte list`, as typed on the command line
#[derive(Debug, Default)]
pub struct ListTicketsArgs<'a> {
    pub priority: Option<&'a str>,
    pub status: Option<&'a str>,
    pub limit: Option<usize>,
}

pub async fn list_tickets<D: Database>(
    service: &TicketQueryService<D>,
    args: ListTicketsArgs<'_>,
    format: OutputFormat,
) -> CliResult<String> {
    let request = ListTickets::parse(args.priority, args.status, args.limit)?;
    let result = service.list_tickets(&request).await?;
    render(&result, format)
}

pub async fn search_tickets<D: Database>(
    service: &TicketQueryService<D>,
    text: &str,
    field: Option<&str>,
    limit: Option<usize>,
    format: OutputFormat,
) -> CliResult<String> {
    let request = SearchTickets::parse(text, field, limit)?;
    let result = service.search_tickets(&request).await?;
    render(&result, format)
}

fn render(result: &ListResult<Ticket>, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(result),
        OutputFormat::Table => Ok(format_table(result)),
    }
}

pub(crate) fn format_table(result: &ListResult<Ticket>) -> String {
    if result.items.is_empty() {
        return "No tickets found.".to_string();
    }

    let display: Vec<TicketDisplay> = result.items.iter().map(|t| t.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);

    if result.items.len() < result.total {
        format!(
            "{}\nShowing {} of {} tickets.",
            table,
            result.items.len(),
            result.total
        )
    } else {
        table.to_string()
    }
}
