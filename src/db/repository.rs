//! Repository traits for data access abstraction.
//!
//! These traits define the read contract the query layer depends on, so a
//! storage backend can be swapped without touching business logic. Writes
//! are not part of the contract; the seeding routine uses the concrete
//! SQLite handle directly.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{GroupBy, GroupCount, ListResult, Ticket, TicketFilter, TicketQuery, TicketSearch},
};

/// Read-only repository for Ticket operations.
pub trait TicketRepository: Send + Sync {
    /// List tickets matching the filter, newest first.
    fn list(
        &self,
        query: &TicketQuery,
    ) -> impl Future<Output = DbResult<ListResult<Ticket>>> + Send;

    /// Count tickets matching the filter.
    fn count(&self, filter: &TicketFilter) -> impl Future<Output = DbResult<u64>> + Send;

    /// Count tickets grouped by a column, ordered by count desc then key asc.
    fn count_by(&self, group: GroupBy) -> impl Future<Output = DbResult<Vec<GroupCount>>> + Send;

    /// Case-insensitive substring search, newest first.
    fn search(
        &self,
        search: &TicketSearch,
    ) -> impl Future<Output = DbResult<ListResult<Ticket>>> + Send;
}

/// Combined database interface.
///
/// Uses generic associated types so repositories can borrow from the
/// database without dynamic dispatch.
pub trait Database: Send + Sync {
    type Tickets<'a>: TicketRepository
    where
        Self: 'a;

    /// Get the ticket repository.
    fn tickets(&self) -> Self::Tickets<'_>;

    /// Close the underlying connections. Subsequent queries fail.
    fn close(&self) -> impl Future<Output = ()> + Send;
}
