//! Shared helper functions for the SQLite ticket repository.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::{DbError, DbResult, GroupBy, Priority, Status, Ticket, TicketFilter};

/// Column list shared by every ticket SELECT.
pub const TICKET_COLUMNS: &str = "id, cliente, asunto, COALESCE(descripcion, '') AS descripcion, \
     estado, prioridad, fecha_creacion, fecha_actualizacion";

/// Deterministic newest-first ordering; `id` breaks timestamp ties.
pub const ORDER_CLAUSE: &str = "ORDER BY fecha_creacion DESC, id DESC";

/// Map a grouping to its column. Only closed-set values reach SQL text.
pub fn group_column(group: GroupBy) -> &'static str {
    match group {
        GroupBy::Status => "estado",
        GroupBy::Priority => "prioridad",
        GroupBy::Client => "cliente",
    }
}

/// WHERE clause and its bind values for a ticket filter.
pub struct FilterClause {
    pub where_clause: String,
    pub bind_values: Vec<&'static str>,
}

/// Build a WHERE clause from the supplied filters (AND logic).
/// Returns an empty clause when no filter is set.
pub fn build_filter_clause(filter: &TicketFilter) -> FilterClause {
    let mut conditions = Vec::new();
    let mut bind_values = Vec::new();

    if let Some(priority) = filter.priority {
        conditions.push("prioridad = ?");
        bind_values.push(priority.as_str());
    }
    if let Some(status) = filter.status {
        conditions.push("estado = ?");
        bind_values.push(status.as_str());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    FilterClause {
        where_clause,
        bind_values,
    }
}

/// SQLite treats a negative LIMIT as "no limit".
pub fn limit_value(limit: Option<usize>) -> i64 {
    limit
        .and_then(|l| i64::try_from(l).ok())
        .unwrap_or(-1)
}

/// Convert a row selected with [`TICKET_COLUMNS`] into a Ticket.
pub fn row_to_ticket(row: &SqliteRow) -> DbResult<Ticket> {
    let id: i64 = row.try_get("id")?;

    let priority_str: String = row.try_get("prioridad")?;
    let priority = Priority::from_stored(&priority_str).ok_or_else(|| DbError::InvalidData {
        message: format!("Invalid stored priority '{}' in ticket {}", priority_str, id),
        help: format!("Expected one of: {}", Priority::accepted_values()),
    })?;

    let status_str: String = row.try_get("estado")?;
    let status = Status::from_stored(&status_str).ok_or_else(|| DbError::InvalidData {
        message: format!("Invalid stored status '{}' in ticket {}", status_str, id),
        help: format!("Expected one of: {}", Status::accepted_values()),
    })?;

    Ok(Ticket {
        id,
        client: row.try_get("cliente")?,
        subject: row.try_get("asunto")?,
        description: row.try_get("descripcion")?,
        priority,
        status,
        created_at: row.try_get("fecha_creacion")?,
        updated_at: row.try_get("fecha_actualizacion")?,
    })
}
