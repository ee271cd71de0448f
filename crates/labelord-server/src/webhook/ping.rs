//! Ping webhook handlers.

use actix_web::HttpResponse;
use labelord_ghapi_interface::types::GhPingEvent;
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType};

pub(crate) fn parse_ping_event(body: &[u8]) -> Result<GhPingEvent> {
    parse_event_type(EventType::Ping, body)
}

/// Pings are always accepted, whatever their payload.
pub(crate) fn ping_event(event: Option<GhPingEvent>) -> HttpResponse {
    match event.and_then(|e| e.repository) {
        Some(repo) => info!(
            message = "Ping event from repository",
            repository_path = %repo.full_name
        ),
        None => info!("Ping event without repository"),
    }

    HttpResponse::Ok().body("Ping.")
}
