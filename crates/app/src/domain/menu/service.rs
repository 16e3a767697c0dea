//! Menu service.

use async_trait::async_trait;
use mockall::automock;
use railmeal::menu::MenuEntry;
use rust_decimal::Decimal;

use crate::{
    database::Db,
    domain::menu::{errors::MenuServiceError, repository::PgMenuRepository},
};

#[derive(Debug, Clone)]
pub struct PgMenuService {
    db: Db,
    repository: PgMenuRepository,
}

impl PgMenuService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgMenuRepository::new(),
        }
    }
}

#[async_trait]
impl MenuService for PgMenuService {
    async fn list_menu(&self) -> Result<Vec<MenuEntry>, MenuServiceError> {
        let mut tx = self.db.begin().await?;

        let entries = self.repository.list_menu_entries(&mut tx).await?;

        tx.commit().await?;

        Ok(entries)
    }

    async fn add_entry(&self, entry: MenuEntry) -> Result<MenuEntry, MenuServiceError> {
        check_entry(&entry)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_menu_entry(&mut tx, &entry).await?;

        tx.commit().await?;

        Ok(created)
    }
}

/// Rejects entries no passenger could order.
///
/// # Errors
///
/// Returns `InvalidData` naming the offending field.
pub fn check_entry(entry: &MenuEntry) -> Result<(), MenuServiceError> {
    if entry.id.trim().is_empty() {
        return Err(MenuServiceError::InvalidData("id is required"));
    }

    if entry.name.trim().is_empty() {
        return Err(MenuServiceError::InvalidData("name is required"));
    }

    if entry.unit_price <= Decimal::ZERO {
        return Err(MenuServiceError::InvalidData("unit price must be positive"));
    }

    Ok(())
}

#[automock]
#[async_trait]
pub trait MenuService: Send + Sync {
    /// Lists every entry, in catalogue order.
    async fn list_menu(&self) -> Result<Vec<MenuEntry>, MenuServiceError>;

    /// Adds an entry to the end of the catalogue.
    async fn add_entry(&self, entry: MenuEntry) -> Result<MenuEntry, MenuServiceError>;
}
