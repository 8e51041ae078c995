use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::api::alert::routes::AlertApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::item::routes::ItemApi;
use crate::config::server_config::ServerConfig;

pub struct Server;

impl Server {
    pub async fn run(
        server: &ServerConfig,
        cors: poem::middleware::Cors,
        apis: (HealthApi, ItemApi, AlertApi),
    ) -> anyhow::Result<()> {
        let addr = server.bind_address();
        let api_service = OpenApiService::new(apis, "Freshness Tracker API", env!("CARGO_PKG_VERSION"))
            .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
