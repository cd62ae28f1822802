//! Shared test data for repository, query and tool tests.

use crate::db::{NewTicket, Priority, SqliteDatabase, Status};

fn new_ticket(
    client: &str,
    subject: &str,
    description: &str,
    priority: Priority,
    status: Status,
    created_at: &str,
) -> NewTicket {
    NewTicket {
        client: client.to_string(),
        subject: subject.to_string(),
        description: description.to_string(),
        priority,
        status,
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
    }
}

/// Eight tickets in insertion order (ids 1..=8).
///
/// Only ticket 5 mentions "RabbitMQ", and only in its description.
/// Tickets 7 and 8 share a creation timestamp.
pub(crate) fn sample_tickets() -> Vec<NewTicket> {
    vec![
        new_ticket(
            "TechCorp S.A.",
            "Error 500 en endpoint de pagos",
            "URGENTE: Error 500 en endpoint de pagos. Cliente reporta impacto crítico en producción.",
            Priority::Urgent,
            Status::Open,
            "2025-03-07T09:15:00.000000",
        ),
        new_ticket(
            "Innovatech",
            "Fallo en autenticación OAuth2",
            "Prioridad Alta: Fallo en autenticación OAuth2. Afectando a múltiples usuarios.",
            Priority::High,
            Status::Open,
            "2025-03-06T14:02:11.000000",
        ),
        new_ticket(
            "TechCorp S.A.",
            "Certificado SSL expirado",
            "Certificado SSL expirado. Cliente solicita revisión.",
            Priority::Medium,
            Status::Closed,
            "2025-03-02T08:00:00.000000",
        ),
        new_ticket(
            "CloudBase Inc.",
            "Error de CORS en frontend",
            "Error de CORS en frontend. Consulta de cliente. Sin impacto crítico en servicio.",
            Priority::Low,
            Status::Open,
            "2025-03-05T17:45:30.000000",
        ),
        new_ticket(
            "DataStream Corp",
            "Problema con cola de mensajes",
            "Los consumidores de RabbitMQ se desconectan cada hora.",
            Priority::High,
            Status::Closed,
            "2025-03-01T11:20:00.000000",
        ),
        new_ticket(
            "Innovatech",
            "Timeout en conexión a base de datos",
            "URGENTE: Timeout en conexión a base de datos. Requiere atención inmediata.",
            Priority::Urgent,
            Status::Closed,
            "2025-03-03T06:30:00.000000",
        ),
        new_ticket(
            "TechCorp S.A.",
            "Lentitud en queries de PostgreSQL",
            "Lentitud en queries de PostgreSQL. Impacto moderado en operaciones.",
            Priority::Medium,
            Status::Open,
            "2025-03-04T12:00:00.000000",
        ),
        new_ticket(
            "SecureNet",
            "Error 404 en recursos estáticos",
            "Error 404 en recursos estáticos. Consulta de cliente.",
            Priority::Low,
            Status::Closed,
            "2025-03-04T12:00:00.000000",
        ),
    ]
}

/// In-memory database loaded with [`sample_tickets`].
pub(crate) async fn sample_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.insert_tickets(&sample_tickets())
        .await
        .expect("Failed to insert sample tickets");
    db
}
