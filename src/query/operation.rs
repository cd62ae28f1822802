//! Typed query operations.
//!
//! Raw tool or CLI arguments are validated once, here, into a closed set of
//! operations. Everything past this point works with enums, never strings.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use super::error::{QueryError, QueryResult};
use crate::db::{
    GroupBy, GroupCount, ListResult, MAX_LIMIT, Priority, SearchField, Status, Ticket, TicketFilter,
};

/// Clamp a requested limit to `1..=MAX_LIMIT`. `None` means every match.
pub fn clamp_limit(limit: Option<usize>) -> Option<usize> {
    limit.map(|l| l.clamp(1, MAX_LIMIT))
}

/// Parse an optional enumerated argument. Blank input counts as omitted.
fn parse_optional<T: FromStr<Err = String>>(
    value: Option<&str>,
    accepted: &str,
) -> QueryResult<Option<T>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => T::from_str(v)
            .map(Some)
            .map_err(|message| QueryError::invalid(message, format!("Use: {}", accepted))),
    }
}

/// Filtered listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTickets {
    filter: TicketFilter,
    limit: Option<usize>,
}

impl ListTickets {
    pub fn parse(
        priority: Option<&str>,
        status: Option<&str>,
        limit: Option<usize>,
    ) -> QueryResult<Self> {
        Ok(Self {
            filter: TicketFilter {
                priority: parse_optional(priority, Priority::accepted_values())?,
                status: parse_optional(status, Status::accepted_values())?,
            },
            limit: clamp_limit(limit),
        })
    }

    pub fn filter(&self) -> TicketFilter {
        self.filter
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// Aggregate statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    group_by: GroupBy,
}

impl Statistics {
    pub fn parse(group_by: Option<&str>) -> QueryResult<Self> {
        Ok(Self {
            group_by: parse_optional(group_by, GroupBy::accepted_values())?.unwrap_or_default(),
        })
    }

    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }
}

/// Free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTickets {
    text: String,
    field: SearchField,
    limit: Option<usize>,
}

impl SearchTickets {
    /// The search text is trimmed; blank text is rejected.
    pub fn parse(text: &str, field: Option<&str>, limit: Option<usize>) -> QueryResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QueryError::invalid(
                "search text must not be empty",
                "Provide the text to look for, e.g. 'Error 500'",
            ));
        }

        Ok(Self {
            text: text.to_string(),
            field: parse_optional(field, SearchField::accepted_values())?.unwrap_or_default(),
            limit: clamp_limit(limit),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn field(&self) -> SearchField {
        self.field
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// The closed set of operations the query service answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListTickets(ListTickets),
    Statistics(Statistics),
    SearchTickets(SearchTickets),
}

/// Result of an [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Tickets(ListResult<Ticket>),
    Statistics(TicketStatistics),
}

/// Grouped counts for the requested column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub group_by: GroupBy,
    pub counts: Vec<GroupCount>,
}

/// Aggregate view of the ticket table.
///
/// `by_priority` and `by_status` always carry every enumerated value,
/// with zero for values absent from the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketStatistics {
    pub total_tickets: u64,
    pub by_priority: BTreeMap<Priority, u64>,
    pub by_status: BTreeMap<Status, u64>,
    pub distribution: Distribution,
    pub open_tickets: u64,
    pub urgent_tickets: u64,
    pub top_clients: Vec<GroupCount>,
}
