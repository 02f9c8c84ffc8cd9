//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use pets_api::config::AppConfig;
use pets_api::{EntryPoint, Runtime};

/// Configuration bound to an OS-assigned loopback port.
pub fn loopback_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.host = "127.0.0.1".into();
    config.server.port = 0;
    config.shutdown.grace_period_secs = 2;
    config
}

/// Client that never reuses connections, so shutdown is not held up by idle sockets.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// A single recorded call into a runtime.
#[derive(Debug, Clone)]
pub struct RecordedRun {
    pub entry_name: &'static str,
    pub title: &'static str,
    pub version: &'static str,
    pub args: Vec<String>,
}

/// Runtime that records its invocations and optionally fails.
#[derive(Debug, Clone, Default)]
pub struct RecordingRuntime {
    pub calls: Arc<Mutex<Vec<RecordedRun>>>,
    pub fail_with: Option<String>,
}

impl RecordingRuntime {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedRun> {
        self.calls.lock().unwrap().clone()
    }
}

impl Runtime for RecordingRuntime {
    type Error = std::io::Error;

    fn run(self, entry: EntryPoint, args: Vec<String>) -> Result<(), Self::Error> {
        self.calls.lock().unwrap().push(RecordedRun {
            entry_name: entry.name,
            title: entry.metadata.title,
            version: entry.metadata.version,
            args,
        });
        match self.fail_with {
            Some(message) => Err(std::io::Error::new(std::io::ErrorKind::AddrInUse, message)),
            None => Ok(()),
        }
    }
}
