//! In-memory menu.

use async_trait::async_trait;
use railmeal::menu::MenuEntry;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::domain::menu::{
    errors::MenuServiceError,
    service::{MenuService, check_entry},
};

/// Catalogue served by the in-memory store when nothing else is configured.
pub fn starter_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("veg-biryani", "Veg Biryani", Decimal::from(100), "/images/veg-biryani.png"),
        MenuEntry::new("paneer-thali", "Paneer Thali", Decimal::from(150), "/images/paneer-thali.png"),
        MenuEntry::new("masala-dosa", "Masala Dosa", Decimal::from(80), "/images/masala-dosa.png"),
        MenuEntry::new("masala-chai", "Masala Chai", Decimal::from(20), "/images/masala-chai.png"),
    ]
}

#[derive(Debug, Default)]
pub struct MemoryMenuService {
    entries: RwLock<Vec<MenuEntry>>,
}

impl MemoryMenuService {
    #[must_use]
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl MenuService for MemoryMenuService {
    async fn list_menu(&self) -> Result<Vec<MenuEntry>, MenuServiceError> {
        Ok(self.entries.read().await.clone())
    }

    async fn add_entry(&self, entry: MenuEntry) -> Result<MenuEntry, MenuServiceError> {
        check_entry(&entry)?;

        let mut entries = self.entries.write().await;

        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(MenuServiceError::AlreadyExists);
        }

        entries.push(entry.clone());

        Ok(entry)
    }
}
