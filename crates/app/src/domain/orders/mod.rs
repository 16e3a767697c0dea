//! Orders

pub mod data;
pub mod errors;
pub mod memory;
pub mod records;
mod repository;
pub mod service;

pub use errors::{OrderRecordsError, ValidationError};
pub use memory::MemoryOrderRecordsService;
pub use service::*;
