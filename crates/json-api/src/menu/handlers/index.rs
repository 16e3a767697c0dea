//! Menu Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use railmeal::menu::MenuEntry;

use crate::{extensions::*, menu::errors::into_status_error, state::State};

/// Menu Entry Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuEntryResponse {
    /// Catalogue identifier, used as the cart key
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price as a decimal string
    pub unit_price: String,

    /// Image location
    pub image_ref: String,
}

impl From<MenuEntry> for MenuEntryResponse {
    fn from(entry: MenuEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            unit_price: entry.unit_price.to_string(),
            image_ref: entry.image_ref,
        }
    }
}

/// Menu Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MenuResponse {
    /// Entries in display order
    pub items: Vec<MenuEntryResponse>,
}

/// Menu Index Handler
#[endpoint(
    tags("menu"),
    summary = "List Menu",
    responses(
        (status_code = StatusCode::OK, description = "Menu entries in display order"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<MenuResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let entries = state
        .app
        .menu
        .list_menu()
        .await
        .map_err(into_status_error)?;

    Ok(Json(MenuResponse {
        items: entries.into_iter().map(MenuEntryResponse::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use railmeal_app::domain::menu::{MenuServiceError, MockMenuService};

    use crate::test_helpers::menu_service;

    use super::*;

    fn make_service(menu: MockMenuService) -> Service {
        menu_service(menu, Router::with_path("menu").get(handler))
    }

    #[tokio::test]
    async fn lists_entries_with_decimal_prices() -> TestResult {
        let mut menu = MockMenuService::new();

        menu.expect_list_menu().once().return_once(|| {
            Ok(vec![
                MenuEntry::new("veg-biryani", "Veg Biryani", Decimal::from(100), "/img/b.png"),
                MenuEntry::new("masala-chai", "Masala Chai", Decimal::new(2050, 2), "/img/c.png"),
            ])
        });
        menu.expect_add_entry().never();

        let mut res = TestClient::get("http://example.com/menu")
            .send(&make_service(menu))
            .await;

        let body: MenuResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.items.len(), 2);
        assert_eq!(
            body.items.get(1).map(|item| item.unit_price.as_str()),
            Some("20.50")
        );

        Ok(())
    }

    #[tokio::test]
    async fn storage_failure_returns_500() -> TestResult {
        let mut menu = MockMenuService::new();

        menu.expect_list_menu()
            .once()
            .return_once(|| Err(MenuServiceError::Sql(sqlx::Error::PoolTimedOut)));
        menu.expect_add_entry().never();

        let res = TestClient::get("http://example.com/menu")
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
