//! SQLite TicketRepository implementation.

use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::connection::SqliteDatabase;
use super::helpers::{
    ORDER_CLAUSE, TICKET_COLUMNS, build_filter_clause, group_column, limit_value, row_to_ticket,
};
use crate::db::{
    DbResult, GroupBy, GroupCount, ListResult, NewTicket, Ticket, TicketFilter, TicketQuery,
    TicketRepository, TicketSearch, fold_case,
};

/// SQLx-backed ticket repository.
pub struct SqliteTicketRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> TicketRepository for SqliteTicketRepository<'a> {
    async fn list(&self, query: &TicketQuery) -> DbResult<ListResult<Ticket>> {
        let filter = build_filter_clause(&query.filter);
        let sql = format!(
            "SELECT {} FROM tickets {} {} LIMIT ?",
            TICKET_COLUMNS, filter.where_clause, ORDER_CLAUSE
        );

        let mut query_builder = sqlx::query(&sql);
        for value in &filter.bind_values {
            query_builder = query_builder.bind(*value);
        }
        let rows = query_builder
            .bind(limit_value(query.limit))
            .fetch_all(self.pool)
            .await?;

        let items = rows
            .iter()
            .map(row_to_ticket)
            .collect::<DbResult<Vec<_>>>()?;

        let total = self.count(&query.filter).await?;

        Ok(ListResult {
            items,
            total: total as usize,
            limit: query.limit,
        })
    }

    async fn count(&self, filter: &TicketFilter) -> DbResult<u64> {
        let clause = build_filter_clause(filter);
        let sql = format!("SELECT COUNT(*) FROM tickets {}", clause.where_clause);

        let mut count_query = sqlx::query_scalar::<_, i64>(&sql);
        for value in &clause.bind_values {
            count_query = count_query.bind(*value);
        }
        let total = count_query.fetch_one(self.pool).await?;

        Ok(total.max(0) as u64)
    }

    async fn count_by(&self, group: GroupBy) -> DbResult<Vec<GroupCount>> {
        let column = group_column(group);
        let sql = format!(
            "SELECT {col} AS key, COUNT(*) AS count FROM tickets \
             GROUP BY {col} ORDER BY count DESC, key ASC",
            col = column
        );

        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;
        rows.iter()
            .map(|row| -> DbResult<GroupCount> {
                let count: i64 = row.try_get("count")?;
                Ok(GroupCount {
                    key: row.try_get("key")?,
                    count: count.max(0) as u64,
                })
            })
            .collect()
    }

    async fn search(&self, search: &TicketSearch) -> DbResult<ListResult<Ticket>> {
        // SQLite's LIKE only folds ASCII case, which misses accented text,
        // so matching happens here over the ordered rows.
        let sql = format!("SELECT {} FROM tickets {}", TICKET_COLUMNS, ORDER_CLAUSE);
        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;

        let needle = fold_case(&search.text);
        let mut matches = Vec::new();
        for row in &rows {
            let ticket = row_to_ticket(row)?;
            if ticket.matches_text(&needle, search.field) {
                matches.push(ticket);
            }
        }
        debug!(
            text = %search.text,
            field = %search.field,
            scanned = rows.len(),
            matched = matches.len(),
            "ticket search"
        );

        let total = matches.len();
        if let Some(limit) = search.limit {
            matches.truncate(limit);
        }

        Ok(ListResult {
            items: matches,
            total,
            limit: search.limit,
        })
    }
}

impl SqliteDatabase {
    /// Bulk-insert tickets in one transaction. Returns the number inserted.
    ///
    /// Used by the seeding routine; the query layer never writes.
    pub async fn insert_tickets(&self, tickets: &[NewTicket]) -> DbResult<u64> {
        let mut tx = self.pool().begin().await?;

        for ticket in tickets {
            sqlx::query(
                r#"
                INSERT INTO tickets
                (cliente, asunto, descripcion, estado, prioridad, fecha_creacion, fecha_actualizacion)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&ticket.client)
            .bind(&ticket.subject)
            .bind(&ticket.description)
            .bind(ticket.status.as_str())
            .bind(ticket.priority.as_str())
            .bind(&ticket.created_at)
            .bind(&ticket.updated_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(tickets.len() as u64)
    }
}
