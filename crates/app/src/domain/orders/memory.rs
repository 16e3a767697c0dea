//! In-memory order records.

use std::collections::{HashMap, hash_map::Entry};

use async_trait::async_trait;
use jiff::Timestamp;
use railmeal::orders::OrderSummary;
use tokio::sync::RwLock;

use crate::{
    domain::orders::{
        data::NewOrderRecord, errors::OrderRecordsError, records::OrderRecord,
        service::OrderRecordsService,
    },
    pnr::Pnr,
};

/// Order records kept in process memory, lost on restart.
#[derive(Debug, Default)]
pub struct MemoryOrderRecordsService {
    records: RwLock<HashMap<Pnr, OrderRecord>>,
}

impl MemoryOrderRecordsService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRecordsService for MemoryOrderRecordsService {
    async fn register(&self, record: NewOrderRecord) -> Result<OrderRecord, OrderRecordsError> {
        let mut records = self.records.write().await;

        match records.entry(record.pnr.clone()) {
            Entry::Occupied(_) => Err(OrderRecordsError::DuplicateKey),
            Entry::Vacant(slot) => Ok(slot.insert(record.into_record(Timestamp::now())).clone()),
        }
    }

    async fn fetch(&self, pnr: Pnr) -> Result<OrderRecord, OrderRecordsError> {
        self.records
            .read()
            .await
            .get(&pnr)
            .cloned()
            .ok_or(OrderRecordsError::NotFound)
    }

    async fn save_summary(
        &self,
        pnr: Pnr,
        summary: OrderSummary,
    ) -> Result<(), OrderRecordsError> {
        summary.verify()?;

        let mut records = self.records.write().await;
        let record = records.get_mut(&pnr).ok_or(OrderRecordsError::NotFound)?;

        record.order_summary = Some(summary);
        record.updated_at = Timestamp::now();

        Ok(())
    }

    async fn remove(&self, pnr: Pnr) -> Result<(), OrderRecordsError> {
        self.records
            .write()
            .await
            .remove(&pnr)
            .map(|_| ())
            .ok_or(OrderRecordsError::NotFound)
    }
}
