//! Transport selection and serving
//!
//! A server either talks MCP over its own stdin/stdout, or listens on the
//! network and streams responses to each client as server-sent events
//! (rmcp's streamable HTTP transport, mounted at [`MCP_PATH`]).

use anyhow::{Context, Result};
use rmcp::{
    transport::{
        stdio,
        streamable_http_server::{
            session::local::LocalSessionManager, StreamableHttpServerConfig,
            StreamableHttpService,
        },
    },
    ServerHandler, ServiceExt,
};
use tokio_util::sync::CancellationToken;

/// Route the network transport is served under
pub const MCP_PATH: &str = "/mcp";

/// How the server reaches its MCP client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Standard input/output, for a client that spawns the server process
    Stdio,
    /// HTTP listener streaming server-sent events
    Sse,
}

impl Transport {
    /// Map a `TRANSPORT` value to a transport
    ///
    /// `sse` selects the network transport. Every other value, including an
    /// empty one, selects stdio.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("sse") {
            Transport::Sse
        } else {
            Transport::Stdio
        }
    }
}

/// Serve a single MCP session over stdin/stdout until the client hangs up
pub async fn serve_stdio<S: ServerHandler>(server: S) -> Result<()> {
    let service = server
        .serve(stdio())
        .await
        .context("failed to start stdio transport")?;

    tracing::info!("Server running on stdio, waiting for requests...");

    let reason = service.waiting().await?;
    tracing::info!(?reason, "stdio session ended");
    Ok(())
}

/// Router serving MCP sessions at [`MCP_PATH`]
///
/// `factory` builds the handler for each new session. Cancelling `ct` ends
/// every open session.
pub fn http_router<S, F>(factory: F, ct: CancellationToken) -> axum::Router
where
    S: ServerHandler,
    F: Fn() -> Result<S, std::io::Error> + Send + Sync + 'static,
{
    let service = StreamableHttpService::new(
        factory,
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            cancellation_token: ct,
            ..Default::default()
        },
    );
    axum::Router::new().nest_service(MCP_PATH, service)
}

/// Serve MCP sessions over HTTP on `host:port` until Ctrl-C
///
/// Sessions are cancelled before the listener drains, so open event streams
/// do not hold shutdown up.
pub async fn serve_http<S, F>(factory: F, host: &str, port: u16) -> Result<()>
where
    S: ServerHandler,
    F: Fn() -> Result<S, std::io::Error> + Send + Sync + 'static,
{
    let ct = CancellationToken::new();
    let router = http_router(factory, ct.child_token());

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {}:{}", host, port))?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        "Listening for MCP clients on http://{}{}",
        local_addr,
        MCP_PATH
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            ct.cancel();
        })
        .await
        .context("HTTP transport failed")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            // Without a signal handler the only exit is process termination
            std::future::pending::<()>().await;
        }
    }
}
