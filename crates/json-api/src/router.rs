//! App Router

use salvo::Router;

use crate::{menu, orders, reservations};

pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("menu").get(menu::index::handler))
        .push(Router::with_path("reservations/{pnr}").get(reservations::get::handler))
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(
                    Router::with_path("{pnr}")
                        .get(orders::get::handler)
                        .delete(orders::delete::handler)
                        .push(Router::with_path("entry").get(orders::entry::handler))
                        .push(Router::with_path("summary").put(orders::save::handler))
                        .push(Router::with_path("confirm").post(orders::confirm::handler)),
                ),
        )
}
