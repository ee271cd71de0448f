//! Debug routes.

use actix_web::{web, HttpResponse};

use crate::server::AppContext;

pub fn configure_debug_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/suppressions").route(web::get().to(suppressions_route)));
}

async fn suppressions_route(ctx: web::Data<AppContext>) -> HttpResponse {
    let markers = ctx.suppression_store.snapshot().await;
    HttpResponse::Ok().json(serde_json::json!({ "suppressions": markers }))
}
