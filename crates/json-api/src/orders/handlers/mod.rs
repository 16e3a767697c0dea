//! Order Handlers

pub(crate) mod confirm;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod entry;
pub(crate) mod get;
pub(crate) mod save;
