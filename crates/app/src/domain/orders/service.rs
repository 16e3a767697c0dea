//! Order records service.

use async_trait::async_trait;
use mockall::automock;
use railmeal::orders::OrderSummary;
use tracing::debug;

use crate::{
    database::Db,
    domain::orders::{
        data::NewOrderRecord, errors::OrderRecordsError, records::OrderRecord,
        repository::PgOrdersRepository,
    },
    pnr::Pnr,
};

#[derive(Debug, Clone)]
pub struct PgOrderRecordsService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrderRecordsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrderRecordsService for PgOrderRecordsService {
    async fn register(&self, record: NewOrderRecord) -> Result<OrderRecord, OrderRecordsError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_order(&mut tx, &record).await?;

        tx.commit().await?;

        debug!(pnr = %created.pnr, "registered order record");

        Ok(created)
    }

    async fn fetch(&self, pnr: Pnr) -> Result<OrderRecord, OrderRecordsError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_order(&mut tx, &pnr).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn save_summary(
        &self,
        pnr: Pnr,
        summary: OrderSummary,
    ) -> Result<(), OrderRecordsError> {
        summary.verify()?;

        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .update_order_summary(&mut tx, &pnr, &summary)
            .await?;

        if rows_affected == 0 {
            return Err(OrderRecordsError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn remove(&self, pnr: Pnr) -> Result<(), OrderRecordsError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_order(&mut tx, &pnr).await?;

        if rows_affected == 0 {
            return Err(OrderRecordsError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

/// Keyed storage of order records.
///
/// Implementations only store; status rules live in the lifecycle service.
#[automock]
#[async_trait]
pub trait OrderRecordsService: Send + Sync {
    /// Creates a record without a summary.
    async fn register(&self, record: NewOrderRecord) -> Result<OrderRecord, OrderRecordsError>;

    /// Reads the record stored under `pnr`.
    async fn fetch(&self, pnr: Pnr) -> Result<OrderRecord, OrderRecordsError>;

    /// Replaces the summary of an existing record, leaving every other field untouched.
    async fn save_summary(&self, pnr: Pnr, summary: OrderSummary)
    -> Result<(), OrderRecordsError>;

    /// Deletes the record stored under `pnr`.
    async fn remove(&self, pnr: Pnr) -> Result<(), OrderRecordsError>;
}

#[cfg(test)]
mod tests {
    use railmeal::orders::OrderItem;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{new_order_record, pending_summary},
    };

    use super::*;

    #[tokio::test]
    async fn register_then_fetch_round_trips() -> TestResult {
        let ctx = TestContext::new().await;
        let pnr = Pnr::parse("4521873690")?;

        let created = ctx.orders.register(new_order_record("4521873690")?).await?;
        let fetched = ctx.orders.fetch(pnr).await?;

        assert_eq!(created, fetched);
        assert!(fetched.order_summary.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn register_twice_is_a_duplicate() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.orders.register(new_order_record("4521873690")?).await?;

        let result = ctx.orders.register(new_order_record("4521873690")?).await;

        assert!(
            matches!(result, Err(OrderRecordsError::DuplicateKey)),
            "expected DuplicateKey, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn save_summary_keeps_details() -> TestResult {
        let ctx = TestContext::new().await;
        let pnr = Pnr::parse("4521873690")?;

        let created = ctx.orders.register(new_order_record("4521873690")?).await?;

        ctx.orders
            .save_summary(pnr.clone(), pending_summary())
            .await?;

        let fetched = ctx.orders.fetch(pnr).await?;

        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.selected_station, created.selected_station);
        assert_eq!(fetched.order_summary, Some(pending_summary()));

        Ok(())
    }

    #[tokio::test]
    async fn save_summary_rejects_inconsistent_totals() -> TestResult {
        let ctx = TestContext::new().await;
        let pnr = Pnr::parse("4521873690")?;

        ctx.orders.register(new_order_record("4521873690")?).await?;

        let mut summary = pending_summary();
        summary.items.push(OrderItem::new("Masala Chai", 1, Decimal::from(20)));

        let result = ctx.orders.save_summary(pnr, summary).await;

        assert!(
            matches!(result, Err(OrderRecordsError::InvalidSummary(_))),
            "expected InvalidSummary, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn save_summary_unknown_pnr_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .orders
            .save_summary(Pnr::parse("1111111111")?, pending_summary())
            .await;

        assert!(
            matches!(result, Err(OrderRecordsError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_deletes_the_record() -> TestResult {
        let ctx = TestContext::new().await;
        let pnr = Pnr::parse("4521873690")?;

        ctx.orders.register(new_order_record("4521873690")?).await?;
        ctx.orders.remove(pnr.clone()).await?;

        let result = ctx.orders.fetch(pnr.clone()).await;

        assert!(
            matches!(result, Err(OrderRecordsError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        let result = ctx.orders.remove(pnr).await;

        assert!(
            matches!(result, Err(OrderRecordsError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
