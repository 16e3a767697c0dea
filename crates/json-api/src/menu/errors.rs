//! Menu Errors

use salvo::http::StatusError;
use tracing::error;

use railmeal_app::domain::menu::MenuServiceError;

pub(crate) fn into_status_error(error: MenuServiceError) -> StatusError {
    match error {
        MenuServiceError::AlreadyExists => {
            StatusError::conflict().brief("Menu entry already exists")
        }
        MenuServiceError::InvalidData(reason) => {
            StatusError::bad_request().brief(format!("Invalid menu entry: {reason}"))
        }
        MenuServiceError::Sql(source) => {
            error!("failed to load menu: {source}");

            StatusError::internal_server_error()
        }
    }
}
