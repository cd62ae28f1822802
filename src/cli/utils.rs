//! Shared utilities for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, settings::Style};

use crate::cli::error::CliResult;

/// Output format shared by the query commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}

pub fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_with_ellipsis("Error 500", 20), "Error 500");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(
            truncate_with_ellipsis("Fallo en autenticación OAuth2", 15),
            "Fallo en aut..."
        );
        assert_eq!(truncate_with_ellipsis("autenticación", 13), "autenticación");
    }
}
