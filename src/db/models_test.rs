//! Tests for domain models.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::db::models::*;

fn ticket(subject: &str, description: &str) -> Ticket {
    Ticket {
        id: 1,
        client: "TechCorp S.A.".to_string(),
        subject: subject.to_string(),
        description: description.to_string(),
        priority: Priority::High,
        status: Status::Open,
        created_at: "2025-03-01T10:00:00.000000".to_string(),
        updated_at: "2025-03-01T12:00:00.000000".to_string(),
    }
}

#[test]
fn priority_deserializes_from_database_format() {
    let urgent: Priority = serde_json::from_str("\"urgente\"").unwrap();
    assert_eq!(urgent, Priority::Urgent);

    let low: Priority = serde_json::from_str("\"baja\"").unwrap();
    assert_eq!(low, Priority::Low);
}

#[test]
fn priority_serializes_with_stored_spelling() {
    assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"media\"");
    assert_eq!(serde_json::to_string(&Status::Closed).unwrap(), "\"cerrado\"");
}

#[test]
fn priority_parses_case_insensitively_with_aliases() {
    assert_eq!(Priority::from_str("URGENTE").unwrap(), Priority::Urgent);
    assert_eq!(Priority::from_str(" urgent ").unwrap(), Priority::Urgent);
    assert_eq!(Priority::from_str("Alta").unwrap(), Priority::High);
    assert!(Priority::from_str("critica").is_err());
    assert!(Priority::from_str("").is_err());
}

#[test]
fn status_parses_case_insensitively_with_aliases() {
    assert_eq!(Status::from_str("Abierto").unwrap(), Status::Open);
    assert_eq!(Status::from_str("closed").unwrap(), Status::Closed);
    assert!(Status::from_str("pendiente").is_err());
}

#[test]
fn display_round_trips_through_from_str() {
    for priority in Priority::ALL {
        assert_eq!(Priority::from_str(&priority.to_string()).unwrap(), priority);
    }
    for status in Status::ALL {
        assert_eq!(Status::from_str(&status.to_string()).unwrap(), status);
    }
}

#[test]
fn search_field_defaults_to_both() {
    assert_eq!(SearchField::default(), SearchField::Both);
    assert_eq!(SearchField::from_str("descripción").unwrap(), SearchField::Description);
}

#[test]
fn group_by_defaults_to_status() {
    assert_eq!(GroupBy::default(), GroupBy::Status);
    assert_eq!(GroupBy::from_str("client").unwrap(), GroupBy::Client);
    assert!(GroupBy::from_str("fecha").is_err());
}

#[test]
fn priority_map_keys_serialize_in_declaration_order() {
    let counts: BTreeMap<Priority, u64> = Priority::ALL.iter().map(|p| (*p, 0)).collect();
    assert_eq!(
        serde_json::to_string(&counts).unwrap(),
        r#"{"baja":0,"media":0,"alta":0,"urgente":0}"#
    );
}

#[test]
fn stored_spelling_decodes_exactly() {
    for p in Priority::ALL {
        assert_eq!(Priority::from_stored(p.as_str()), Some(p));
    }
    for st in Status::ALL {
        assert_eq!(Status::from_stored(st.as_str()), Some(st));
    }
}

#[test]
fn stored_spelling_rejects_case_variants_and_aliases() {
    assert_eq!(Priority::from_stored("Urgente"), None);
    assert_eq!(Priority::from_stored("urgent"), None);
    assert_eq!(Priority::from_stored(" baja"), None);
    assert_eq!(Status::from_stored("Abierto"), None);
    assert_eq!(Status::from_stored("open"), None);

    // Caller input stays lenient
    assert_eq!("Urgente".parse::<Priority>(), Ok(Priority::Urgent));
    assert_eq!("open".parse::<Status>(), Ok(Status::Open));
}

#[test]
fn matches_text_folds_unicode_case() {
    let t = ticket(
        "Fallo en autenticación OAuth2",
        "Prioridad Alta: afectando a múltiples usuarios.",
    );
    assert!(t.matches_text(&fold_case("AUTENTICACIÓN"), SearchField::Subject));
    assert!(t.matches_text(&fold_case("MÚLTIPLES"), SearchField::Description));
    assert!(!t.matches_text(&fold_case("oauth2"), SearchField::Description));
    assert!(t.matches_text(&fold_case("oauth2"), SearchField::Both));
}

#[test]
fn matches_text_treats_wildcards_literally() {
    let t = ticket("Error 404 en recursos estáticos", "Cliente solicita revisión.");
    assert!(!t.matches_text("%", SearchField::Both));
    assert!(!t.matches_text("_", SearchField::Both));
}
