//! CLI command implementations.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Load server configuration from a JSON file
fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config(format!("failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::config(format!("failed to parse {}: {}", path.display(), e)))
}

/// Dispatch the parsed CLI command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { config, host, port } => {
            let mut server_config = match config {
                Some(path) => load_config(&path)?,
                None => HttpServerConfig::default(),
            };
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }
            serve(server_config)
        }
    }
}

/// Build the runtime and serve until the process exits
fn serve(config: HttpServerConfig) -> CliResult<()> {
    let addr = config.socket_addr();
    Logger::info("server_starting", &[("addr", addr.as_str())]);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(HttpServer::with_config(config).start())?;

    Ok(())
}
