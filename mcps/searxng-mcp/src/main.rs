//! SearXNG MCP Server
//!
//! Search the web through a SearXNG instance over MCP.
//!
//! # Usage
//!
//! Network (default): `searxng-mcp` then connect to `http://HOST:PORT/mcp`
//!
//! Stdio, in `.mcp.json`:
//! ```json
//! { "mcpServers": { "searxng": { "command": "./searxng-mcp", "env": { "TRANSPORT": "stdio" } } } }
//! ```

use std::sync::Arc;

use anyhow::Context;
use mcp_common::Transport;
use searxng_mcp::{config::load_dotenv, Config, SearxngClient, SearxngMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before the logger and config read the environment
    let dotenv = load_dotenv().context("failed to read .env")?;

    mcp_common::init_tracing("searxng_mcp")?;

    tracing::info!("Starting SearXNG MCP Server");
    if let Some(path) = dotenv {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let config = Config::load();
    tracing::info!("SearXNG URL: {}", config.searxng_base_url);

    // Shared by every call and every session; dropped when main returns
    let client = Arc::new(
        SearxngClient::new(&config.searxng_base_url)
            .context("failed to set up SearXNG client")?,
    );

    match config.transport() {
        Transport::Sse => {
            mcp_common::serve_http(
                move || Ok(SearxngMcpServer::new(Arc::clone(&client))),
                &config.host,
                config.port,
            )
            .await?
        }
        Transport::Stdio => mcp_common::serve_stdio(SearxngMcpServer::new(client)).await?,
    }

    tracing::info!("Server shutting down");
    Ok(())
}
