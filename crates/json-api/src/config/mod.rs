//! Server configuration module

use clap::Parser;

use crate::config::{
    db::StorageConfig,
    observability::{LoggingConfig, TracingConfig},
    ordering::OrderingConfig,
    reservations::ReservationsConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod ordering;
pub(crate) mod reservations;
pub(crate) mod server;

/// Railmeal JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "railmeal-json", about = "Railmeal JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Trace export settings.
    #[command(flatten)]
    pub tracing: TracingConfig,

    /// Order storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Reservation lookup settings.
    #[command(flatten)]
    pub reservations: ReservationsConfig,

    /// Ordering rules.
    #[command(flatten)]
    pub ordering: OrderingConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
