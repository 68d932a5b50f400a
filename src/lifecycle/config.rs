//! Runtime configuration, read from command-line flags with environment fallbacks.

use clap::Parser;

pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

/// Catalog API - books and products over HTTP, held in memory
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "catalog-api")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Host to bind to
    #[arg(long, env = "CATALOG_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "CATALOG_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Requests each store actor buffers before callers wait
    #[arg(
        long,
        env = "CATALOG_MAILBOX_CAPACITY",
        default_value_t = DEFAULT_MAILBOX_CAPACITY,
        value_parser = parse_capacity
    )]
    pub mailbox_capacity: usize,

    /// Log directive used when RUST_LOG is not set
    #[arg(long, env = "CATALOG_LOG", default_value = "info")]
    pub log_filter: String,
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("mailbox capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(e.to_string()),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
