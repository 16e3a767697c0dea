//! Ordering service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use railmeal::{
    cart::Cart,
    lifecycle::{available_actions, is_locked},
    menu::MenuEntry,
    orders::{OrderItem, OrderSummary},
};

use crate::{
    domain::{
        lifecycle::OrderLifecycle,
        menu::MenuService,
        ordering::{
            errors::OrderingError,
            models::{CartQuantities, Entry, Tracking},
            session::OrderingSession,
            sync::SyncProtocol,
        },
        orders::{data::NewOrderRecord, records::OrderRecord},
    },
    pnr::Pnr,
};

/// Ordering backed by an [`OrderLifecycle`] and a menu.
#[derive(Clone)]
pub struct LifecycleOrderingService {
    menu: Arc<dyn MenuService>,
    lifecycle: OrderLifecycle,
}

impl Debug for LifecycleOrderingService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LifecycleOrderingService")
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

impl LifecycleOrderingService {
    #[must_use]
    pub fn new(menu: Arc<dyn MenuService>, lifecycle: OrderLifecycle) -> Self {
        Self { menu, lifecycle }
    }

    async fn cart(&self, quantities: CartQuantities) -> Result<Cart, OrderingError> {
        let entries = self.menu.list_menu().await?;

        Ok(Cart::with_quantities(entries, quantities))
    }
}

#[async_trait]
impl OrderingService for LifecycleOrderingService {
    async fn register(&self, form: NewOrderRecord) -> Result<OrderRecord, OrderingError> {
        Ok(self.lifecycle.register(form).await?)
    }

    async fn track(&self, pnr: Pnr) -> Result<Tracking, OrderingError> {
        let record = self.lifecycle.fetch(pnr).await?;
        let available_actions = available_actions(record.status()).to_vec();

        Ok(Tracking {
            record,
            available_actions,
        })
    }

    async fn enter(&self, pnr: Pnr) -> Result<Entry, OrderingError> {
        let record = self.lifecycle.fetch(pnr).await?;

        if is_locked(record.status()) {
            return Ok(Entry::AlreadyConfirmed(record));
        }

        let entries = self.menu.list_menu().await?;
        let cart = restore_cart(entries, record.order_summary.as_ref());

        Ok(Entry::Editable(OrderingSession::new(
            record,
            cart,
            SyncProtocol::new(self.lifecycle.clone()),
        )))
    }

    async fn save_cart(
        &self,
        pnr: Pnr,
        quantities: CartQuantities,
    ) -> Result<OrderSummary, OrderingError> {
        let cart = self.cart(quantities).await?;

        Ok(SyncProtocol::new(self.lifecycle.clone())
            .persist_pending(&pnr, &cart)
            .await?)
    }

    async fn confirm_cart(
        &self,
        pnr: Pnr,
        quantities: CartQuantities,
    ) -> Result<OrderSummary, OrderingError> {
        let record = self.lifecycle.fetch(pnr).await?;
        let cart = self.cart(quantities).await?;

        Ok(SyncProtocol::new(self.lifecycle.clone())
            .commit_confirmed(&record, &cart)
            .await?)
    }

    async fn confirm_pending(&self, pnr: Pnr) -> Result<OrderSummary, OrderingError> {
        Ok(self.lifecycle.confirm_pending(pnr).await?)
    }

    async fn cancel(&self, pnr: Pnr) -> Result<(), OrderingError> {
        Ok(self.lifecycle.cancel(pnr).await?)
    }
}

/// Rebuilds a cart from a pending summary, matching items to entries by name.
///
/// Items whose entry has left the menu are dropped.
fn restore_cart(entries: Vec<MenuEntry>, summary: Option<&OrderSummary>) -> Cart {
    let Some(summary) = summary else {
        return Cart::new(entries);
    };

    let mut quantities: Vec<(String, u32)> = Vec::new();

    for item in &summary.items {
        let Some(entry) = matching_entry(&entries, item) else {
            continue;
        };

        match quantities.iter_mut().find(|(id, _)| *id == entry.id) {
            Some((_, quantity)) => *quantity = quantity.saturating_add(item.quantity),
            None => quantities.push((entry.id.clone(), item.quantity)),
        }
    }

    Cart::with_quantities(entries, quantities)
}

/// Names may repeat on the menu, so the snapshot price picks between them. An entry
/// whose price changed since the snapshot still matches by name alone.
fn matching_entry<'a>(entries: &'a [MenuEntry], item: &OrderItem) -> Option<&'a MenuEntry> {
    entries
        .iter()
        .find(|entry| entry.name == item.foodname && entry.unit_price == item.price)
        .or_else(|| entries.iter().find(|entry| entry.name == item.foodname))
}

#[automock]
#[async_trait]
pub trait OrderingService: Send + Sync {
    /// Registers a passenger and creates their empty order record.
    async fn register(&self, form: NewOrderRecord) -> Result<OrderRecord, OrderingError>;

    /// Loads a record with the actions the tracking view offers for it.
    async fn track(&self, pnr: Pnr) -> Result<Tracking, OrderingError>;

    /// Enters the ordering flow, restoring any pending cart.
    async fn enter(&self, pnr: Pnr) -> Result<Entry, OrderingError>;

    /// Saves the given quantities as the pending summary.
    async fn save_cart(
        &self,
        pnr: Pnr,
        quantities: CartQuantities,
    ) -> Result<OrderSummary, OrderingError>;

    /// Confirms the order with the given quantities.
    async fn confirm_cart(
        &self,
        pnr: Pnr,
        quantities: CartQuantities,
    ) -> Result<OrderSummary, OrderingError>;

    /// Confirms the pending summary already stored.
    async fn confirm_pending(&self, pnr: Pnr) -> Result<OrderSummary, OrderingError>;

    /// Cancels a pending order.
    async fn cancel(&self, pnr: Pnr) -> Result<(), OrderingError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use railmeal::{
        lifecycle::{LifecycleAction, TransitionError},
        orders::{OrderItem, OrderStatus},
    };
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{
            lifecycle::{EmptyOrderPolicy, LifecycleError},
            menu::MemoryMenuService,
            orders::{MemoryOrderRecordsService, OrderRecordsError},
        },
        test::helpers::{menu, new_order_record},
    };

    use super::*;

    fn service() -> LifecycleOrderingService {
        LifecycleOrderingService::new(
            Arc::new(MemoryMenuService::new(menu())),
            OrderLifecycle::new(
                Arc::new(MemoryOrderRecordsService::new()),
                EmptyOrderPolicy::Allow,
            ),
        )
    }

    fn quantities(pairs: &[(&str, u32)]) -> CartQuantities {
        pairs
            .iter()
            .map(|(id, quantity)| ((*id).to_string(), *quantity))
            .collect()
    }

    #[tokio::test]
    async fn track_offers_actions_only_while_pending() -> TestResult {
        let service = service();
        let pnr = Pnr::parse("4521873690")?;

        service.register(new_order_record("4521873690")?).await?;

        assert!(service.track(pnr.clone()).await?.available_actions.is_empty());

        service
            .save_cart(pnr.clone(), quantities(&[("a", 1)]))
            .await?;

        assert_eq!(
            service.track(pnr.clone()).await?.available_actions,
            vec![LifecycleAction::Confirm, LifecycleAction::Cancel]
        );

        service.confirm_pending(pnr.clone()).await?;

        assert!(service.track(pnr).await?.available_actions.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn enter_restores_pending_quantities() -> TestResult {
        let service = service();
        let pnr = Pnr::parse("4521873690")?;

        service.register(new_order_record("4521873690")?).await?;
        service
            .save_cart(pnr.clone(), quantities(&[("a", 2), ("b", 1)]))
            .await?;

        let Entry::Editable(session) = service.enter(pnr).await? else {
            return Err("expected an editable session".into());
        };

        assert_eq!(session.cart().quantity("a"), Some(2));
        assert_eq!(session.cart().quantity("b"), Some(1));
        assert_eq!(session.totals().total_amount, Decimal::from(350));
        assert!(!session.is_cart_open());

        Ok(())
    }

    #[tokio::test]
    async fn enter_after_confirm_is_read_only() -> TestResult {
        let service = service();
        let pnr = Pnr::parse("4521873690")?;

        service.register(new_order_record("4521873690")?).await?;
        service
            .save_cart(pnr.clone(), quantities(&[("a", 1)]))
            .await?;
        service
            .confirm_cart(pnr.clone(), quantities(&[("a", 1)]))
            .await?;

        let entry = service.enter(pnr).await?;

        assert!(
            matches!(
                entry,
                Entry::AlreadyConfirmed(ref record)
                    if record.status() == Some(OrderStatus::Confirmed)
            ),
            "expected AlreadyConfirmed, got {entry:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn confirm_without_registration_creates_nothing() -> TestResult {
        let service = service();
        let pnr = Pnr::parse("4521873690")?;

        let result = service
            .confirm_cart(pnr.clone(), quantities(&[("a", 1)]))
            .await;

        assert!(
            matches!(
                result,
                Err(OrderingError::Lifecycle(LifecycleError::Records(
                    OrderRecordsError::NotFound
                )))
            ),
            "expected NotFound, got {result:?}"
        );

        let result = service.track(pnr).await;

        assert!(result.is_err(), "expected no record, got {result:?}");

        Ok(())
    }

    #[tokio::test]
    async fn cancel_requires_a_pending_summary() -> TestResult {
        let service = service();
        let pnr = Pnr::parse("4521873690")?;

        service.register(new_order_record("4521873690")?).await?;

        let result = service.cancel(pnr).await;

        assert!(
            matches!(
                result,
                Err(OrderingError::Lifecycle(LifecycleError::Transition(
                    TransitionError::MissingSummary { .. }
                )))
            ),
            "expected MissingSummary, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn enter_restores_entries_sharing_a_name() -> TestResult {
        let menu = vec![
            MenuEntry::new("chai-small", "Chai", Decimal::from(20), "/img/chai.png"),
            MenuEntry::new("chai-large", "Chai", Decimal::from(30), "/img/chai.png"),
        ];
        let service = LifecycleOrderingService::new(
            Arc::new(MemoryMenuService::new(menu)),
            OrderLifecycle::new(
                Arc::new(MemoryOrderRecordsService::new()),
                EmptyOrderPolicy::Allow,
            ),
        );
        let pnr = Pnr::parse("4521873690")?;

        service.register(new_order_record("4521873690")?).await?;

        let saved = service
            .save_cart(pnr.clone(), quantities(&[("chai-small", 1), ("chai-large", 2)]))
            .await?;

        let Entry::Editable(session) = service.enter(pnr).await? else {
            return Err("expected an editable session".into());
        };

        assert_eq!(session.cart().quantity("chai-small"), Some(1));
        assert_eq!(session.cart().quantity("chai-large"), Some(2));
        assert_eq!(session.totals().total_amount, saved.total_amount);
        assert_eq!(session.totals().total_items, saved.total_items);

        Ok(())
    }

    #[test]
    fn restore_cart_adds_up_items_matching_one_entry() {
        let summary = OrderSummary::from_items(
            vec![
                OrderItem::new("Veg Biryani", 2, Decimal::from(100)),
                OrderItem::new("Veg Biryani", 3, Decimal::from(100)),
            ],
            OrderStatus::Pending,
            Timestamp::UNIX_EPOCH,
        );

        let cart = restore_cart(menu(), Some(&summary));

        assert_eq!(cart.quantity("a"), Some(5));
    }

    #[test]
    fn restore_cart_drops_items_no_longer_on_the_menu() {
        let summary = OrderSummary::from_items(
            vec![
                OrderItem::new("Veg Biryani", 2, Decimal::from(100)),
                OrderItem::new("Retired Dish", 4, Decimal::from(80)),
            ],
            OrderStatus::Pending,
            Timestamp::UNIX_EPOCH,
        );

        let cart = restore_cart(menu(), Some(&summary));

        assert_eq!(cart.quantity("a"), Some(2));
        assert_eq!(cart.totals().total_items, 2);
    }
}
