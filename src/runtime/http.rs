//! HTTP runtime: the composition root.
//!
//! # Startup order
//! ```text
//! args → config (file, overrides, validation) → logging
//!      → executor → metrics exporter → listener → server task
//! ```
//!
//! [`HttpRuntime::start`] returns a [`ServerHandle`] so callers (tests,
//! embedding code) own shutdown. [`Runtime::run`] wires the handle to OS
//! signals and blocks until the server stops.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::bootstrap::EntryPoint;
use crate::config::{resolve_config, validate_config, AppConfig, ConfigError};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};
use crate::runtime::args::RuntimeArgs;
use crate::runtime::{Runtime, RuntimeError};

/// Runtime serving the entry point over HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRuntime;

impl HttpRuntime {
    /// Merge file/default configuration with argument overrides and validate.
    pub fn load_config(args: &RuntimeArgs) -> Result<AppConfig, RuntimeError> {
        let mut config = resolve_config(args.config.as_deref())?;
        args.apply(&mut config);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Bind and spawn the server. Must be called inside a Tokio runtime.
    pub async fn start(entry: &EntryPoint, config: AppConfig) -> Result<ServerHandle, RuntimeError> {
        if config.observability.metrics_enabled {
            // Validation guarantees the address parses.
            if let Ok(addr) = config.observability.metrics_address.parse::<SocketAddr>() {
                metrics::init_metrics(addr)?;
            }
        }

        let address = config.server.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| RuntimeError::Bind {
                address: address.clone(),
                source,
            })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| RuntimeError::Bind { address, source })?;

        tracing::info!(
            address = %local_addr,
            entry = entry.name,
            document = %HttpServer::document_path(&entry.metadata),
            "Listening for connections"
        );

        let shutdown = Shutdown::new();
        let server = HttpServer::new(config, entry);
        let signal = shutdown.subscribe();
        let task = tokio::spawn(server.run(listener, signal));

        Ok(ServerHandle {
            local_addr,
            shutdown,
            task,
        })
    }
}

impl Runtime for HttpRuntime {
    type Error = RuntimeError;

    fn run(self, entry: EntryPoint, args: Vec<String>) -> Result<(), RuntimeError> {
        let Some(args) = RuntimeArgs::from_forwarded(&args)? else {
            return Ok(());
        };

        let config = Self::load_config(&args)?;
        logging::init_logging(&config.observability);

        tracing::info!(
            service = entry.metadata.title,
            version = entry.metadata.version,
            "Starting"
        );
        tracing::info!(
            bind_address = %config.server.bind_address(),
            request_timeout_secs = config.server.request_timeout_secs,
            metrics_enabled = config.observability.metrics_enabled,
            "Configuration loaded"
        );

        let executor = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(RuntimeError::Executor)?;

        executor.block_on(async move {
            let handle = Self::start(&entry, config).await?;
            let trigger = handle.shutdown_trigger();
            tokio::spawn(async move {
                signals::wait_for_termination().await;
                trigger.trigger();
            });
            handle.join().await
        })?;

        tracing::info!("Shutdown complete");
        Ok(())
    }
}

/// Handle to a running server.
///
/// Dropping every clone of the shutdown trigger (including the one held
/// here) also stops the server.
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: Shutdown,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl ServerHandle {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// A trigger that stops this server when fired.
    pub fn shutdown_trigger(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Signal shutdown and wait for the server to drain.
    pub async fn shutdown(self) -> Result<(), RuntimeError> {
        self.shutdown.trigger();
        self.join().await
    }

    /// Wait for the server to stop on its own.
    pub async fn join(self) -> Result<(), RuntimeError> {
        let Self { shutdown, task, .. } = self;
        let result = task.await;
        drop(shutdown);
        result?.map_err(RuntimeError::Serve)
    }
}
