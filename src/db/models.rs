//! Domain models for the support-ticket database.
//!
//! These models are storage-agnostic. Enumerated values serialize with the
//! spelling stored in the reference dataset (`urgente`, `abierto`, ...) and
//! parse case-insensitively from either that spelling or an English alias.

use serde::{Deserialize, Serialize};

/// Maximum number of items a caller may request in one page.
pub const MAX_LIMIT: usize = 100;

// =============================================================================
// Enumerations
// =============================================================================

/// Urgency level of a ticket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    #[serde(rename = "baja", alias = "low")]
    Low,
    #[serde(rename = "media", alias = "medium")]
    Medium,
    #[serde(rename = "alta", alias = "high")]
    High,
    #[serde(rename = "urgente", alias = "urgent")]
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Stored spelling of this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "baja",
            Priority::Medium => "media",
            Priority::High => "alta",
            Priority::Urgent => "urgente",
        }
    }

    /// Decode a stored value. Only the exact stored spelling is accepted.
    pub fn from_stored(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    pub fn accepted_values() -> &'static str {
        "baja, media, alta, urgente"
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baja" | "low" => Ok(Priority::Low),
            "media" | "medium" => Ok(Priority::Medium),
            "alta" | "high" => Ok(Priority::High),
            "urgente" | "urgent" => Ok(Priority::Urgent),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

/// Lifecycle state of a ticket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Status {
    #[serde(rename = "abierto", alias = "open")]
    Open,
    #[serde(rename = "cerrado", alias = "closed")]
    Closed,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Open, Status::Closed];

    /// Stored spelling of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "abierto",
            Status::Closed => "cerrado",
        }
    }

    /// Decode a stored value. Only the exact stored spelling is accepted.
    pub fn from_stored(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn accepted_values() -> &'static str {
        "abierto, cerrado"
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abierto" | "open" => Ok(Status::Open),
            "cerrado" | "closed" => Ok(Status::Closed),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

/// Which text fields a free-text search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchField {
    #[serde(rename = "asunto", alias = "subject")]
    Subject,
    #[serde(rename = "descripcion", alias = "description")]
    Description,
    #[default]
    #[serde(rename = "ambos", alias = "both")]
    Both,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Subject => "asunto",
            SearchField::Description => "descripcion",
            SearchField::Both => "ambos",
        }
    }

    pub fn accepted_values() -> &'static str {
        "asunto, descripcion, ambos"
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asunto" | "subject" => Ok(SearchField::Subject),
            "descripcion" | "descripción" | "description" => Ok(SearchField::Description),
            "ambos" | "both" => Ok(SearchField::Both),
            _ => Err(format!("Invalid search field: {}", s)),
        }
    }
}

/// Column a grouped count is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupBy {
    #[default]
    #[serde(rename = "estado", alias = "status")]
    Status,
    #[serde(rename = "prioridad", alias = "priority")]
    Priority,
    #[serde(rename = "cliente", alias = "client")]
    Client,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Status => "estado",
            GroupBy::Priority => "prioridad",
            GroupBy::Client => "cliente",
        }
    }

    pub fn accepted_values() -> &'static str {
        "estado, prioridad, cliente"
    }
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "estado" | "status" => Ok(GroupBy::Status),
            "prioridad" | "priority" => Ok(GroupBy::Priority),
            "cliente" | "client" => Ok(GroupBy::Client),
            _ => Err(format!("Invalid grouping: {}", s)),
        }
    }
}

// =============================================================================
// Entities
// =============================================================================

/// A single support request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub client: String,
    pub subject: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub created_at: String,
    pub updated_at: String,
}

impl Ticket {
    /// Case-insensitive substring test against the selected field(s).
    ///
    /// `needle` must already be case-folded with [`fold_case`].
    pub fn matches_text(&self, needle: &str, field: SearchField) -> bool {
        let in_subject = || fold_case(&self.subject).contains(needle);
        let in_description = || fold_case(&self.description).contains(needle);
        match field {
            SearchField::Subject => in_subject(),
            SearchField::Description => in_description(),
            SearchField::Both => in_subject() || in_description(),
        }
    }
}

/// Ticket as written by the seeding routine (the store assigns the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTicket {
    pub client: String,
    pub subject: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub created_at: String,
    pub updated_at: String,
}

/// Unicode-aware case folding used by free-text search.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

// =============================================================================
// Query Types
// =============================================================================

/// Equality filters over the enumerated columns (AND logic, `None` matches all).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

/// Filtered listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketQuery {
    pub filter: TicketFilter,
    /// Maximum number of items to return (`None` returns every match).
    pub limit: Option<usize>,
}

/// Free-text search request. `text` is non-empty and already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSearch {
    pub text: String,
    pub field: SearchField,
    pub limit: Option<usize>,
}

/// One bucket of a grouped count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub key: String,
    pub count: u64,
}

/// Result of a list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResult<T> {
    /// The items returned, after the limit.
    pub items: Vec<T>,
    /// Total count of all matching items (before the limit).
    pub total: usize,
    /// Limit that was applied.
    pub limit: Option<usize>,
}
