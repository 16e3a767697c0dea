//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        lifecycle::{EmptyOrderPolicy, OrderLifecycle},
        menu::{MemoryMenuService, MenuService, PgMenuService, starter_menu},
        ordering::{LifecycleOrderingService, OrderingService},
        orders::{MemoryOrderRecordsService, OrderRecordsService, PgOrderRecordsService},
        reservations::{HttpReservationsService, ReservationConfig, ReservationsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("DATABASE_URL is required for the postgres store")]
    MissingDatabaseUrl,

    #[error("failed to build reservation client")]
    Reservations(#[source] reqwest::Error),
}

/// Settings shared by every storage backend.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub reservations: ReservationConfig,
    pub empty_orders: EmptyOrderPolicy,
}

#[derive(Clone)]
pub struct AppContext {
    pub menu: Arc<dyn MenuService>,
    pub ordering: Arc<dyn OrderingService>,
    pub reservations: Arc<dyn ReservationsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, settings: AppSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Self::assemble(
            Arc::new(PgMenuService::new(db.clone())),
            Arc::new(PgOrderRecordsService::new(db)),
            settings,
        )
    }

    /// Build application context on in-memory stores seeded with the starter menu.
    ///
    /// # Errors
    ///
    /// Returns an error when the reservation client cannot be built.
    pub fn in_memory(settings: AppSettings) -> Result<Self, AppInitError> {
        Self::assemble(
            Arc::new(MemoryMenuService::new(starter_menu())),
            Arc::new(MemoryOrderRecordsService::new()),
            settings,
        )
    }

    fn assemble(
        menu: Arc<dyn MenuService>,
        records: Arc<dyn OrderRecordsService>,
        settings: AppSettings,
    ) -> Result<Self, AppInitError> {
        let reservations =
            HttpReservationsService::new(settings.reservations).map_err(AppInitError::Reservations)?;

        let lifecycle = OrderLifecycle::new(records, settings.empty_orders);

        Ok(Self {
            ordering: Arc::new(LifecycleOrderingService::new(Arc::clone(&menu), lifecycle)),
            menu,
            reservations: Arc::new(reservations),
        })
    }
}
