//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sets up stderr logging
//! - **Transports**: [`serve_stdio`] and [`serve_http`], picked via [`Transport`]
//! - **Results**: [`text_success`] for text tool responses
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{serve_http, serve_stdio, Transport};
//!
//! mcp_common::init_tracing("my_mcp")?;
//! match Transport::from_name(&transport) {
//!     Transport::Stdio => serve_stdio(MyServer::new()).await?,
//!     Transport::Sse => serve_http(|| Ok(MyServer::new()), "0.0.0.0", 8080).await?,
//! }
//! ```

pub mod embeddable;
pub mod init;
pub mod result;
pub mod transport;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use init::{init_tracing, LogFormat};
pub use result::text_success;
pub use transport::{http_router, serve_http, serve_stdio, Transport, MCP_PATH};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
