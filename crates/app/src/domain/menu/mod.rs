//! Menu catalogue

pub mod errors;
pub mod memory;
mod repository;
pub mod service;

pub use errors::MenuServiceError;
pub use memory::{MemoryMenuService, starter_menu};
pub use service::*;
