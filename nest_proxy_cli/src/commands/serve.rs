use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use nest_proxy_lib::{build_router, ProxyClient};
use tokio::net::TcpListener;

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides NEST_PROXY_BIND and the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

pub async fn run(args: &ServeArgs, client: ProxyClient, default_bind: SocketAddr) -> Result<()> {
    let bind = args.bind.unwrap_or(default_bind);
    let app = build_router(Arc::new(client));

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
