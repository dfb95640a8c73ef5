//! SearXNG MCP Library
//!
//! A single MCP tool, `search`, backed by a self-hosted SearXNG instance.
//! Each call becomes one `GET {base_url}/search` and the response body is
//! returned as-is.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use searxng_mcp::{EmbeddableMcp, SearxngClient, SearxngMcpServer};
//!
//! let client = Arc::new(SearxngClient::new("http://localhost:8080")?);
//! let server = SearxngMcpServer::new(client);
//! let result = server.call_tool("search", serde_json::json!({ "q": "rust" })).await?;
//! ```
//!
//! # Configuration
//! Set `SEARXNG_BASE_URL`, `TRANSPORT`, `HOST` and `PORT`, or pass the
//! matching flags to the binary.

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod server;

// Re-export main server type
pub use server::SearxngMcpServer;

pub use client::{SearxngClient, SEARCH_TIMEOUT};
pub use config::Config;
pub use error::{into_tool_text, SearxngError, ERROR_PREFIX};
pub use params::SearchParams;

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
