//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use actix_web_prom::PrometheusMetrics;
use labelord_config::{Config, Settings};
use labelord_core::use_cases::replication::suppression_store::SuppressionStore;
use labelord_ghapi_interface::ApiService;
use tracing::info;

use crate::{
    debug::configure_debug_handlers,
    ghapi::MetricsApiService,
    index::index_route,
    metrics::{build_metrics_handler, ServerMetrics},
    middlewares::VerifySignature,
    webhook::event_handler,
    Result, ServerError,
};

/// App context.
///
/// Built once at startup, then shared by every worker.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// API adapter, counting calls.
    pub api_service: Box<dyn ApiService>,
    /// Peer repositories, in settings order.
    pub peers: Vec<String>,
    /// Webhook shared secret.
    pub webhook_secret: String,
    /// Expected echoes of our own writes.
    pub suppression_store: SuppressionStore,
    /// Metrics.
    pub metrics: ServerMetrics,
}

impl AppContext {
    /// Load the context from settings.
    pub fn load(
        config: Config,
        settings: &Settings,
        api_service: Box<dyn ApiService>,
    ) -> Result<Self> {
        let peers = settings
            .repositories
            .clone()
            .ok_or(ServerError::MissingRepositorySpecification)?;
        let webhook_secret = settings
            .webhook_secret
            .clone()
            .ok_or(ServerError::MissingWebhookSecret)?;
        let metrics = ServerMetrics::new()?;

        Ok(Self {
            config,
            api_service: Box::new(MetricsApiService::new(
                api_service,
                metrics.github_api_calls.clone(),
            )),
            peers,
            webhook_secret,
            suppression_store: SuppressionStore::new(),
            metrics,
        })
    }

    /// Is the repository one of the peers, whatever its case.
    pub fn is_peer(&self, repository: &str) -> bool {
        self.peers
            .iter()
            .any(|peer| peer.eq_ignore_ascii_case(repository))
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let mut app = App::new()
        .app_data(context.clone())
        .wrap(prometheus)
        .wrap(Logger::default())
        .service(
            web::resource("/")
                .wrap(VerifySignature::new(&context.webhook_secret))
                .route(web::get().to(index_route))
                .route(web::post().to(event_handler)),
        );

    if context.config.server.debug_mode {
        app = app.service(web::scope("/debug").configure(configure_debug_handlers));
    }

    app
}

/// Run webhook server.
pub async fn run_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        peers = ?context.peers,
        message = "Starting webhook server",
    );

    run_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let prometheus = build_metrics_handler(&context.metrics)?;
    let workers_count = context.config.server.workers_count;
    let context = Data::new(context);

    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), prometheus.clone()));

    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
