//! Menu Repository

use railmeal::menu::MenuEntry;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

const LIST_MENU_ENTRIES_SQL: &str = include_str!("sql/list_menu_entries.sql");
const CREATE_MENU_ENTRY_SQL: &str = include_str!("sql/create_menu_entry.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMenuRepository;

/// Row wrapper; `MenuEntry` lives in the core crate.
struct MenuEntryRow(MenuEntry);

impl PgMenuRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_menu_entries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<MenuEntry>, sqlx::Error> {
        let rows = query_as::<Postgres, MenuEntryRow>(LIST_MENU_ENTRIES_SQL)
            .fetch_all(&mut **tx)
            .await?;

        Ok(rows.into_iter().map(|MenuEntryRow(entry)| entry).collect())
    }

    pub(crate) async fn create_menu_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        entry: &MenuEntry,
    ) -> Result<MenuEntry, sqlx::Error> {
        let MenuEntryRow(created) = query_as::<Postgres, MenuEntryRow>(CREATE_MENU_ENTRY_SQL)
            .bind(&entry.id)
            .bind(&entry.name)
            .bind(entry.unit_price)
            .bind(&entry.image_ref)
            .fetch_one(&mut **tx)
            .await?;

        Ok(created)
    }
}

impl<'r> FromRow<'r, PgRow> for MenuEntryRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(MenuEntry {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            unit_price: row.try_get("unit_price")?,
            image_ref: row.try_get("image_ref")?,
        }))
    }
}
