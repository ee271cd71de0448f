//! Label webhook handlers.

use actix_web::HttpResponse;
use labelord_core::use_cases::replication::replicate_label_event::{
    LabelEvent, ReplicateLabelEventUseCase, ReplicateLabelEventUseCaseInterface,
    ReplicationOutcome,
};
use labelord_ghapi_interface::types::{GhLabelAction, GhLabelEvent};
use labelord_models::{Label, LabelAction};
use tracing::info;

use super::parse_event_type;
use crate::{errors::Result, event_type::EventType, server::AppContext, ServerError};

pub(crate) fn parse_label_event(body: &[u8]) -> Result<GhLabelEvent> {
    parse_event_type(EventType::Label, body)
}

fn to_label_event(event: GhLabelEvent) -> Result<LabelEvent> {
    let action = match event.action {
        GhLabelAction::Created => LabelAction::Created,
        GhLabelAction::Edited => LabelAction::Edited,
        GhLabelAction::Deleted => LabelAction::Deleted,
        GhLabelAction::Unknown => return Err(ServerError::UnknownLabelAction),
    };
    let previous_name = event.previous_name().map(str::to_string);

    Ok(LabelEvent {
        action,
        repository: event.repository.full_name,
        label: Label::new(event.label.name, event.label.color),
        previous_name,
    })
}

pub(crate) async fn label_event(ctx: &AppContext, event: GhLabelEvent) -> Result<HttpResponse> {
    let repository = &event.repository.full_name;
    if !ctx.is_peer(repository) {
        return Err(ServerError::UnknownRepository {
            repository: repository.clone(),
        });
    }

    let event = to_label_event(event)?;
    let outcome = ReplicateLabelEventUseCase {
        api_service: ctx.api_service.as_ref(),
        peers: &ctx.peers,
        suppression_store: &ctx.suppression_store,
    }
    .run(&event)
    .await;

    match outcome {
        ReplicationOutcome::Ignored => {
            ctx.metrics.suppressed_echoes.inc();
            Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ignored"})))
        }
        ReplicationOutcome::Applied { peers, errors } => {
            ctx.metrics.replicated_events.inc();
            info!(
                action = %event.action,
                repository_path = %event.repository,
                label = %event.label.name(),
                peers = peers,
                errors = errors,
                message = "Label event replicated"
            );
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "status": "applied",
                "peers": peers,
                "errors": errors
            })))
        }
    }
}
