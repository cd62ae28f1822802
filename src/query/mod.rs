//! Ticket query layer.
//!
//! Answers three read-only questions about the ticket table: filtered
//! listing, aggregate statistics and free-text search. Callers build an
//! [`Operation`] from raw arguments (validation happens there) and hand it
//! to [`TicketQueryService::execute`], or call the per-operation methods.

mod error;
mod operation;
mod service;


pub use error::{QueryError, QueryResult};
pub use operation::{
    Distribution, ListTickets, Operation, Outcome, SearchTickets, Statistics, TicketStatistics,
    clamp_limit,
};
pub use service::TicketQueryService;
