//! Configuration loading for searxng-mcp
//!
//! Each setting is read from, in order of priority:
//! 1. Command-line flag
//! 2. Environment variable
//! 3. `.env` file (see [`load_dotenv`])
//! 4. Default value

use std::path::PathBuf;

use clap::Parser;
use mcp_common::Transport;

pub const DEFAULT_BASE_URL: &str = "http://172.17.0.1:32768";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 32769;

/// Read `.env` from the working directory or a parent into the environment
///
/// Variables already set in the process are left alone. A missing file is
/// not an error; returns the path that was loaded, if any.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "searxng-mcp")]
#[command(about = "MCP server to search the web using a SearXNG instance")]
#[command(version)]
pub struct Config {
    /// SearXNG instance URL
    #[arg(long, env = "SEARXNG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub searxng_base_url: String,

    /// Bind host for the network transport
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Bind port for the network transport
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// `sse` serves over the network; anything else uses stdio
    #[arg(long, env = "TRANSPORT", default_value = "sse")]
    pub transport: String,
}

impl Config {
    /// Load configuration from the process arguments and environment
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn transport(&self) -> Transport {
        Transport::from_name(&self.transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override() {
        let config = Config::try_parse_from([
            "searxng-mcp",
            "--searxng-base-url",
            "http://localhost:8888",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--transport",
            "stdio",
        ])
        .unwrap();

        assert_eq!(config.searxng_base_url, "http://localhost:8888");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.transport(), Transport::Stdio);
    }

    #[test]
    fn test_sse_transport_flag() {
        let config =
            Config::try_parse_from(["searxng-mcp", "--transport", "sse"]).unwrap();
        assert_eq!(config.transport(), Transport::Sse);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::try_parse_from(["searxng-mcp", "--port", "not-a-port"]);
        assert!(result.is_err());
    }
}
