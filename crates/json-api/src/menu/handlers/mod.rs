//! Menu Handlers

pub(crate) mod index;
