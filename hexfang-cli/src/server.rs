//! Server command - start the HTTP API server
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to hexfang-server crate)

use anyhow::Result;
use clap::Args;

use hexfang_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8002")]
    pub port: u16,

    /// Only accept same-origin browser requests
    #[arg(long)]
    pub strict_cors: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// This function reads like a table of contents:
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs) -> Result<()> {
    let config = configure_server(&args);

    tracing::info!("Starting HEXFANG API server on port {}", config.port);

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs) -> ServerConfig {
    ServerConfig {
        port: args.port,
        allow_any_origin: !args.strict_cors,
    }
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    // Create tokio runtime for async server
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_server_defaults() {
        let args = ServerArgs {
            port: 8002,
            strict_cors: false,
        };

        let config = configure_server(&args);
        assert_eq!(config.port, 8002);
        assert!(config.allow_any_origin);
    }

    #[test]
    fn test_configure_server_strict_cors() {
        let args = ServerArgs {
            port: 9000,
            strict_cors: true,
        };

        let config = configure_server(&args);
        assert_eq!(config.port, 9000);
        assert!(!config.allow_any_origin);
    }
}
