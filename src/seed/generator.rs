//! Ticket generation for the demonstration dataset.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use super::SeedError;
use super::data::{CLIENTS, SUBJECTS};
use crate::db::{NewTicket, Priority, Status};

/// Tickets created "today" as urgent and still open, generated first.
pub const URGENT_TODAY: usize = 5;

/// Selection weights, in `Priority::ALL` order.
const PRIORITY_WEIGHTS: [u32; 4] = [30, 40, 20, 10];

/// Window the remaining tickets are spread over.
const HISTORY_DAYS: f64 = 7.0;

/// Cap on the gap between creation and last update.
const MAX_UPDATE_HOURS: i64 = 72;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn description_for(priority: Priority, subject: &str) -> String {
    match priority {
        Priority::Urgent => format!(
            "URGENTE: {}. Cliente reporta impacto crítico en producción. Requiere atención inmediata.",
            subject
        ),
        Priority::High => format!(
            "Prioridad Alta: {}. Afectando a múltiples usuarios. Necesita resolución pronto.",
            subject
        ),
        Priority::Medium => format!(
            "{}. Cliente solicita revisión. Impacto moderado en operaciones.",
            subject
        ),
        Priority::Low => format!(
            "{}. Consulta de cliente. Sin impacto crítico en servicio.",
            subject
        ),
    }
}

/// Older urgent/high tickets are resolved; medium ones are resolved after
/// five days; everything else is a coin flip.
fn status_for<R: Rng>(priority: Priority, days_old: i64, rng: &mut R) -> Status {
    let coin = |rng: &mut R| Status::ALL[rng.random_range(0..Status::ALL.len())];
    match priority {
        Priority::Urgent | Priority::High if days_old > 2 => Status::Closed,
        Priority::Urgent | Priority::High => Status::Open,
        Priority::Medium if days_old > 5 => Status::Closed,
        Priority::Medium | Priority::Low => coin(rng),
    }
}

fn pick<'a, R: Rng>(items: &[&'a str], rng: &mut R) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generate `count` tickets relative to `now`.
///
/// The first [`URGENT_TODAY`] tickets (or fewer when `count` is smaller) are
/// urgent, open and created today; the rest spread over the last week.
pub fn generate_tickets<R: Rng>(
    count: usize,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<Vec<NewTicket>, SeedError> {
    let weights = WeightedIndex::new(PRIORITY_WEIGHTS).map_err(|e| SeedError::Generation {
        message: e.to_string(),
    })?;
    let midnight = now.date().and_time(NaiveTime::MIN);
    let mut tickets = Vec::with_capacity(count);

    for _ in 0..count.min(URGENT_TODAY) {
        let subject = pick(&SUBJECTS, rng);
        let created = midnight + TimeDelta::seconds(rng.random_range(0..86_400));
        let updated = created + TimeDelta::hours(rng.random_range(1..=3));

        tickets.push(NewTicket {
            client: pick(&CLIENTS, rng).to_string(),
            subject: subject.to_string(),
            description: description_for(Priority::Urgent, subject),
            priority: Priority::Urgent,
            status: Status::Open,
            created_at: format_timestamp(created),
            updated_at: format_timestamp(updated),
        });
    }

    for _ in URGENT_TODAY..count {
        let client = pick(&CLIENTS, rng);
        let subject = pick(&SUBJECTS, rng);
        let priority = Priority::ALL[weights.sample(rng)];

        let days_back = rng.random::<f64>() * HISTORY_DAYS;
        let created = now - TimeDelta::milliseconds((days_back * 86_400_000.0) as i64);
        let days_old = (now - created).num_days();
        let status = status_for(priority, days_old, rng);

        let max_hours = (days_old * 24).min(MAX_UPDATE_HOURS).max(1);
        let updated = created + TimeDelta::hours(rng.random_range(1..=max_hours));

        tickets.push(NewTicket {
            client: client.to_string(),
            subject: subject.to_string(),
            description: description_for(priority, subject),
            priority,
            status,
            created_at: format_timestamp(created),
            updated_at: format_timestamp(updated),
        });
    }

    Ok(tickets)
}
