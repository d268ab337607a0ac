//! Server assembly: adapter construction and actix-web wiring.

mod config;

pub use config::{AppConfig, ConfigError};

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::domain::{AccountsService, CatalogueService};
use crate::inbound::graphql::{GraphQlContext, Schema, graphql, playground, schema};
use crate::inbound::http::{HealthState, live, ready};
use crate::outbound::credentials::{BcryptPasswordHasher, JwtTokenIssuer};
use crate::outbound::persistence::{
    DocumentStore, MongoAccountRepository, MongoCatalogueRepository, StoreConfig, StoreError,
};

/// Errors raised during server startup.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Store connection or preparation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Binding or running the HTTP listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Register the application routes and shared state.
pub fn configure(
    schema: web::Data<Schema>,
    context: web::Data<GraphQlContext>,
    health: web::Data<HealthState>,
) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |app| {
        app.app_data(schema.clone())
            .app_data(context.clone())
            .app_data(health.clone())
            .service(graphql)
            .service(playground)
            .service(live)
            .service(ready);
    }
}

/// Connect the store-backed adapters and bundle them into resolver state.
async fn build_context(config: &AppConfig) -> Result<GraphQlContext, StoreError> {
    let store_config = StoreConfig::new(config.mongodb_uri()).with_database(config.database());
    let store = Arc::new(DocumentStore::connect(&store_config).await?);
    store.ensure_indexes().await?;

    let accounts = AccountsService::new(
        Arc::new(MongoAccountRepository::new(store.clone())),
        Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost())),
        Arc::new(JwtTokenIssuer::new(config.secret_key())),
    );
    let catalogue = CatalogueService::new(Arc::new(MongoCatalogueRepository::new(store)));
    Ok(GraphQlContext::new(accounts, catalogue))
}

/// Connect the adapters and serve the API until shutdown.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let context = web::Data::new(build_context(&config).await?);
    let schema = web::Data::new(schema());
    let health = web::Data::new(HealthState::new());
    // Clone for the server factory so the probe state stays reachable here.
    let server_health = health.clone();

    let server = HttpServer::new(move || {
        App::new().configure(configure(
            schema.clone(),
            context.clone(),
            server_health.clone(),
        ))
    })
    .bind(config.bind_addr())?;

    info!(addr = %config.bind_addr(), "server listening");
    health.mark_ready();
    server.run().await?;
    Ok(())
}
