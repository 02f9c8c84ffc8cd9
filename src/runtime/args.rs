//! Command-line arguments understood by the HTTP runtime.

use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};

use crate::config::AppConfig;
use crate::metadata::SERVICE_METADATA;

/// Binary name used when parsing forwarded arguments.
const BIN_NAME: &str = "pets-api";

#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "pets-api", version = SERVICE_METADATA.version, about = "pets-api HTTP service")]
pub struct RuntimeArgs {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "PETS_API_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind, overrides `server.host`.
    #[arg(long, env = "PETS_API_HOST")]
    pub host: Option<String>,

    /// Port to listen on, overrides `server.port`.
    #[arg(short, long, env = "PETS_API_PORT")]
    pub port: Option<u16>,

    /// Log level or filter directive, overrides `observability.log_level`.
    #[arg(long, env = "PETS_API_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl RuntimeArgs {
    /// Parse process arguments (without the program name).
    ///
    /// `--help` and `--version` print their output and yield `None`.
    pub fn from_forwarded(args: &[String]) -> Result<Option<Self>, clap::Error> {
        let argv = std::iter::once(BIN_NAME.to_string()).chain(args.iter().cloned());
        match Self::try_parse_from(argv) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.print()?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Apply overrides on top of file/default configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}
