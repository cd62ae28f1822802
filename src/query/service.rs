//! The ticket query service.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::error::{QueryError, QueryResult};
use super::operation::{
    Distribution, ListTickets, Operation, Outcome, SearchTickets, Statistics, TicketStatistics,
};
use crate::db::{
    Database, DbError, GroupBy, GroupCount, ListResult, Priority, Status, Ticket, TicketFilter,
    TicketQuery, TicketRepository, TicketSearch,
};

/// Number of clients reported in `top_clients`.
const TOP_CLIENTS: usize = 5;

/// Read-only query service over the ticket store.
///
/// Every call reads the store afresh; nothing is memoized between calls.
pub struct TicketQueryService<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for TicketQueryService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> TicketQueryService<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    /// Execute a validated operation.
    pub async fn execute(&self, operation: Operation) -> QueryResult<Outcome> {
        match operation {
            Operation::ListTickets(request) => {
                self.list_tickets(&request).await.map(Outcome::Tickets)
            }
            Operation::Statistics(request) => {
                self.statistics(&request).await.map(Outcome::Statistics)
            }
            Operation::SearchTickets(request) => {
                self.search_tickets(&request).await.map(Outcome::Tickets)
            }
        }
    }

    /// Tickets matching every supplied filter, newest first.
    pub async fn list_tickets(&self, request: &ListTickets) -> QueryResult<ListResult<Ticket>> {
        debug!(
            priority = ?request.filter().priority,
            status = ?request.filter().status,
            limit = ?request.limit(),
            "list tickets"
        );
        let query = TicketQuery {
            filter: request.filter(),
            limit: request.limit(),
        };
        self.db
            .tickets()
            .list(&query)
            .await
            .map_err(storage_unavailable)
    }

    /// Totals and grouped counts computed from the current store contents.
    pub async fn statistics(&self, request: &Statistics) -> QueryResult<TicketStatistics> {
        debug!(group_by = %request.group_by(), "ticket statistics");
        let tickets = self.db.tickets();

        let total_tickets = tickets
            .count(&TicketFilter::default())
            .await
            .map_err(storage_unavailable)?;
        let priority_counts = tickets
            .count_by(GroupBy::Priority)
            .await
            .map_err(storage_unavailable)?;
        let status_counts = tickets
            .count_by(GroupBy::Status)
            .await
            .map_err(storage_unavailable)?;

        let by_priority =
            complete_buckets(&Priority::ALL, &priority_counts, Priority::from_stored)?;
        let by_status = complete_buckets(&Status::ALL, &status_counts, Status::from_stored)?;

        let distribution = match request.group_by() {
            GroupBy::Priority => priority_counts,
            GroupBy::Status => status_counts,
            GroupBy::Client => tickets
                .count_by(GroupBy::Client)
                .await
                .map_err(storage_unavailable)?,
        };

        let top_clients = if request.group_by() == GroupBy::Client {
            distribution.iter().take(TOP_CLIENTS).cloned().collect()
        } else {
            let mut clients = tickets
                .count_by(GroupBy::Client)
                .await
                .map_err(storage_unavailable)?;
            clients.truncate(TOP_CLIENTS);
            clients
        };

        Ok(TicketStatistics {
            total_tickets,
            open_tickets: by_status.get(&Status::Open).copied().unwrap_or(0),
            urgent_tickets: by_priority.get(&Priority::Urgent).copied().unwrap_or(0),
            by_priority,
            by_status,
            distribution: Distribution {
                group_by: request.group_by(),
                counts: distribution,
            },
            top_clients,
        })
    }

    /// Tickets whose subject and/or description contain the text.
    pub async fn search_tickets(&self, request: &SearchTickets) -> QueryResult<ListResult<Ticket>> {
        debug!(
            text = %request.text(),
            field = %request.field(),
            limit = ?request.limit(),
            "search tickets"
        );
        let search = TicketSearch {
            text: request.text().to_string(),
            field: request.field(),
            limit: request.limit(),
        };
        self.db
            .tickets()
            .search(&search)
            .await
            .map_err(storage_unavailable)
    }
}

fn storage_unavailable(e: DbError) -> QueryError {
    warn!(error = %e, "ticket store query failed");
    QueryError::StorageUnavailable { source: e }
}

/// Turn grouped counts over a closed set into a map holding every value.
///
/// Keys are decoded strictly, so a non-canonical stored value is an error
/// instead of a second bucket.
fn complete_buckets<K>(
    all: &[K],
    counts: &[GroupCount],
    decode: fn(&str) -> Option<K>,
) -> QueryResult<BTreeMap<K, u64>>
where
    K: Ord + Copy,
{
    let mut buckets: BTreeMap<K, u64> = all.iter().map(|k| (*k, 0)).collect();
    for bucket in counts {
        let key = decode(&bucket.key).ok_or_else(|| {
            storage_unavailable(DbError::InvalidData {
                message: format!("Invalid stored value '{}'", bucket.key),
                help: "Stored values must come from the closed priority/status sets".to_string(),
            })
        })?;
        *buckets.entry(key).or_insert(0) += bucket.count;
    }
    Ok(buckets)
}
