//! MCP Server implementation for SearXNG search
//!
//! Exposes one tool, `search`, which forwards its arguments to SearXNG and
//! returns whatever SearXNG sent back. Upstream failures come back as text,
//! never as protocol errors.

use mcp_common::{
    async_trait, text_success, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;
use std::sync::Arc;

use crate::client::SearxngClient;
use crate::error::into_tool_text;
use crate::params::SearchParams;

/// Implementation name advertised during MCP initialization
pub const SERVER_NAME: &str = "mcp-searxng";

const INSTRUCTIONS: &str = "SearXNG MCP Server - provides a `search` tool that queries a \
     SearXNG meta-search instance with all supported parameters and returns the raw \
     response (JSON by default).";

/// The main SearXNG MCP Server
///
/// Cheap to clone: every clone, and every network session, shares the same
/// [`SearxngClient`].
#[derive(Clone)]
pub struct SearxngMcpServer {
    client: Arc<SearxngClient>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl SearxngMcpServer {
    pub fn new(client: Arc<SearxngClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    pub fn client(&self) -> &SearxngClient {
        &self.client
    }

    #[tool(description = "Perform a search using SearXNG with all supported parameters.")]
    async fn search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Searching for: {} (page: {})",
            params.q,
            params.page
        );

        let result = self.client.search(&params).await;
        if let Err(e) = &result {
            tracing::warn!(
                status = ?e.status(),
                timeout = e.is_timeout(),
                "SearXNG query failed: {}",
                e
            );
        }

        Ok(text_success(into_tool_text(result)))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SearxngMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for SearxngMcpServer {
    fn server_name(&self) -> &str {
        "searxng"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "search" => {
                let params: SearchParams = serde_json::from_value(params)?;
                self.search(Parameters(params)).await.map_err(Into::into)
            }
            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
