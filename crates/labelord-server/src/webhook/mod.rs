//! Webhook handlers.

mod labels;
mod ping;


use std::convert::TryFrom;

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::{
    constants::GITHUB_EVENT_HEADER, event_type::EventType, server::AppContext, Result,
    ServerError,
};

fn parse_event_type<'de, T>(event_type: EventType, body: &'de [u8]) -> Result<T>
where
    T: Deserialize<'de>,
{
    serde_json::from_slice(body).map_err(|e| ServerError::EventParseError {
        event_type,
        source: e,
    })
}

fn extract_event_from_request(req: &HttpRequest) -> Result<EventType> {
    let event = req
        .headers()
        .get(GITHUB_EVENT_HEADER)
        .and_then(|x| x.to_str().ok())
        .ok_or(ServerError::MissingEventType)?;

    EventType::try_from(event).map_err(|e| ServerError::UnsupportedEvent { source: e })
}

#[tracing::instrument(skip_all)]
pub(crate) async fn event_handler(
    req: HttpRequest,
    body: web::Bytes,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse> {
    match extract_event_from_request(&req)? {
        EventType::Ping => Ok(ping::ping_event(ping::parse_ping_event(&body).ok())),
        EventType::Label => labels::label_event(&ctx, labels::parse_label_event(&body)?).await,
    }
}
