//! Server middlewares.

#![allow(clippy::type_complexity)]

use std::{pin::Pin, rc::Rc};

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web::{Bytes, BytesMut},
    Error, HttpMessage, ResponseError,
};
use futures::{
    future::{ok, Ready},
    stream::StreamExt,
    Future,
};
use labelord_crypto::Signature;
use tracing::warn;

use crate::{
    constants::{GITHUB_SIGNATURE_256_HEADER, GITHUB_SIGNATURE_HEADER},
    ServerError,
};

/// Signature verification configuration.
pub struct VerifySignature {
    secret: Rc<str>,
}

impl VerifySignature {
    /// Verify POST bodies against `secret`.
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

// Middleware factory is `Transform` trait from actix-service crate
// `S` - type of the next service
// `B` - type of response's body
impl<S, B> Transform<S, ServiceRequest> for VerifySignature
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<EitherBody<B>>;
    type Transform = VerifySignatureMiddleware<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(VerifySignatureMiddleware {
            secret: self.secret.clone(),
            service: Rc::new(service),
        })
    }
}

/// Signature verification middleware.
///
/// Rejected requests get a 401 response and never reach the handler.
pub struct VerifySignatureMiddleware<S> {
    secret: Rc<str>,
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for VerifySignatureMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    type Response = ServiceResponse<EitherBody<B>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let secret = self.secret.clone();

        Box::pin(async move {
            if req.method() == Method::POST {
                if let Err(e) = verify_request(&mut req, &secret).await {
                    warn!(error = %e, message = "Rejected webhook request");
                    let response = e.error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            svc.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn signature_header(req: &ServiceRequest) -> Result<String, ServerError> {
    let headers = req.headers();
    headers
        .get(GITHUB_SIGNATURE_256_HEADER)
        .or_else(|| headers.get(GITHUB_SIGNATURE_HEADER))
        .ok_or(ServerError::MissingWebhookSignature)?
        .to_str()
        .map(str::to_string)
        .map_err(|_| ServerError::InvalidWebhookSignature)
}

async fn verify_request(req: &mut ServiceRequest, secret: &str) -> Result<(), ServerError> {
    let header = signature_header(req)?;
    let signature =
        Signature::parse(&header).map_err(|_| ServerError::InvalidWebhookSignature)?;

    let body = read_payload(req).await?;
    match signature.is_valid(&body, secret) {
        Ok(true) => (),
        Ok(false) | Err(_) => return Err(ServerError::InvalidWebhookSignature),
    }

    // Thanks https://github.com/actix/actix-web/issues/1457#issuecomment-617342438
    let (_, mut payload) = actix_http::h1::Payload::create(true);
    payload.unread_data(body);
    req.set_payload(payload.into());

    Ok(())
}

async fn read_payload(req: &mut ServiceRequest) -> Result<Bytes, ServerError> {
    let mut body = BytesMut::new();
    let mut stream = req.take_payload();

    while let Some(chunk) = stream.next().await {
        body.extend_from_slice(&chunk.map_err(|e| ServerError::PayloadError { source: e })?);
    }

    Ok(body.freeze())
}
