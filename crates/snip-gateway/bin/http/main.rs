mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use snip_core::LinkStore;
use snip_gateway::shutdown::shutdown_signal;
use snip_gateway::{App, AppState};
use snip_generator::RandomGenerator;
use snip_storage::{DynamoDbLinkStore, DynamoDbSettings, InMemoryLinkStore, TimeoutLinkStore};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    snip_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        code_length = config.code_length,
        "starting snip gateway"
    );

    let store = build_store(&config).await?;
    let generator = RandomGenerator::builder()
        .length(usize::from(config.code_length))
        .build();
    let state = AppState::new(store, Arc::new(generator));

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    info!("gateway stopped");
    Ok(())
}

async fn build_store(config: &CLI) -> anyhow::Result<Arc<dyn LinkStore>> {
    let store: Arc<dyn LinkStore> = match config.storage {
        StorageBackendArg::InMemory => {
            warn!("using in-memory storage, links are lost on restart");
            Arc::new(InMemoryLinkStore::new())
        }
        StorageBackendArg::DynamoDb => {
            let settings = DynamoDbSettings::builder()
                .region(config.aws_region.clone())
                .table(config.table.clone());
            let store = match &config.dynamodb_endpoint {
                Some(endpoint) => {
                    DynamoDbLinkStore::connect(settings.endpoint_url(endpoint.clone()).build())
                        .await
                }
                None => DynamoDbLinkStore::connect(settings.build()).await,
            };
            info!(
                table = store.table(),
                region = %config.aws_region,
                endpoint = ?config.dynamodb_endpoint,
                "connected to dynamodb"
            );

            if config.create_table {
                store
                    .ensure_table()
                    .await
                    .with_context(|| format!("failed to create table {}", config.table))?;
            }
            Arc::new(store)
        }
    };

    Ok(match config.store_timeout() {
        Some(timeout) => Arc::new(TimeoutLinkStore::new(store, timeout)),
        None => store,
    })
}
