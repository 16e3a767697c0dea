//! Storage Config

use clap::{Args, ValueEnum};

/// Where order records and the menu are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// `PostgreSQL`, via `DATABASE_URL`.
    Postgres,

    /// Process memory with the starter menu; lost on restart.
    Memory,
}

/// Storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Storage backend (postgres, memory)
    #[arg(long, env = "STORE", value_enum, default_value_t = StoreKind::Postgres)]
    pub store: StoreKind,

    /// `PostgreSQL` connection string, required by the postgres store
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}
