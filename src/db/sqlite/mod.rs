//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod helpers;
mod ticket;

#[cfg(test)]
pub(crate) mod fixtures;


pub use connection::SqliteDatabase;
pub use ticket::SqliteTicketRepository;
