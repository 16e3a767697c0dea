//! Cart

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    menu::MenuEntry,
    orders::{OrderItem, OrderStatus, OrderSummary},
};

/// A menu entry and the quantity selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// The menu entry
    pub entry: MenuEntry,

    /// Selected quantity
    pub quantity: u32,
}

impl CartLine {
    /// Quantity multiplied by the entry's unit price.
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.entry.unit_price
    }
}

/// Cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of all line quantities
    pub total_items: u64,

    /// Sum of all line totals
    pub total_amount: Decimal,
}

/// A passenger's in-progress selection, one line per menu entry.
///
/// Totals are never stored; every call to [`Cart::totals`] recomputes them from the lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a cart with one zero-quantity line per menu entry.
    ///
    /// Entries repeating an already seen id are skipped.
    pub fn new(entries: impl IntoIterator<Item = MenuEntry>) -> Self {
        let mut lines: Vec<CartLine> = Vec::new();

        for entry in entries {
            if lines.iter().any(|line| line.entry.id == entry.id) {
                continue;
            }

            lines.push(CartLine { entry, quantity: 0 });
        }

        Self { lines }
    }

    /// Creates a cart and sets the given quantities; ids missing from the menu are ignored.
    pub fn with_quantities<K>(
        entries: impl IntoIterator<Item = MenuEntry>,
        quantities: impl IntoIterator<Item = (K, u32)>,
    ) -> Self
    where
        K: AsRef<str>,
    {
        let mut cart = Self::new(entries);

        for (id, quantity) in quantities {
            if let Some(line) = cart.line_mut(id.as_ref()) {
                line.quantity = quantity;
            }
        }

        cart
    }

    /// Adds one unit of the given entry and returns the new quantity.
    ///
    /// Returns `None`, leaving the cart untouched, when the id is not on the menu.
    pub fn increment(&mut self, id: &str) -> Option<u32> {
        let line = self.line_mut(id)?;

        line.quantity = line.quantity.saturating_add(1);

        Some(line.quantity)
    }

    /// Removes one unit of the given entry and returns the new quantity.
    ///
    /// Quantities stop at zero. Returns `None` when the id is not on the menu.
    pub fn decrement(&mut self, id: &str) -> Option<u32> {
        let line = self.line_mut(id)?;

        line.quantity = line.quantity.saturating_sub(1);

        Some(line.quantity)
    }

    /// Current quantity of the given entry.
    pub fn quantity(&self, id: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.entry.id == id)
            .map(|line| line.quantity)
    }

    /// Recomputes the cart totals.
    pub fn totals(&self) -> CartTotals {
        self.lines.iter().fold(
            CartTotals {
                total_items: 0,
                total_amount: Decimal::ZERO,
            },
            |totals, line| CartTotals {
                total_items: totals.total_items + u64::from(line.quantity),
                total_amount: totals.total_amount + line.line_total(),
            },
        )
    }

    /// Lines with a quantity above zero, in menu order.
    pub fn selected_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(|line| line.quantity > 0)
    }

    /// All lines, in menu order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether no line has a quantity above zero.
    pub fn is_empty(&self) -> bool {
        self.selected_lines().next().is_none()
    }

    /// Builds an order summary from the selected lines.
    pub fn snapshot(&self, status: OrderStatus, date: Timestamp) -> OrderSummary {
        OrderSummary::from_items(
            self.selected_lines().map(OrderItem::from_line).collect(),
            status,
            date,
        )
    }

    fn line_mut(&mut self, id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use testresult::TestResult;

    use super::*;

    fn menu() -> Vec<MenuEntry> {
        vec![
            MenuEntry::new("a", "Veg Biryani", Decimal::from(100), "/img/biryani.png"),
            MenuEntry::new("b", "Paneer Thali", Decimal::from(150), "/img/thali.png"),
            MenuEntry::new("c", "Masala Chai", Decimal::new(2050, 2), "/img/chai.png"),
        ]
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(menu());

        assert_eq!(cart.lines().len(), 3);
        assert!(cart.is_empty());
        assert_eq!(
            cart.totals(),
            CartTotals {
                total_items: 0,
                total_amount: Decimal::ZERO
            }
        );
    }

    #[test]
    fn duplicate_menu_ids_produce_one_line() {
        let mut entries = menu();
        entries.push(MenuEntry::new("a", "Other", Decimal::from(1), ""));

        let cart = Cart::new(entries);

        assert_eq!(cart.lines().len(), 3);
        assert_eq!(
            cart.lines().first().map(|line| line.entry.name.as_str()),
            Some("Veg Biryani")
        );
    }

    #[test]
    fn totals_follow_increments() {
        let mut cart = Cart::new(menu());

        cart.increment("a");
        cart.increment("a");
        cart.increment("b");

        assert_eq!(
            cart.totals(),
            CartTotals {
                total_items: 3,
                total_amount: Decimal::from(350)
            }
        );
    }

    #[test]
    fn totals_are_recomputed_after_every_mutation() {
        let mut cart = Cart::new(menu());

        cart.increment("c");
        assert_eq!(cart.totals().total_amount, Decimal::new(2050, 2));

        cart.increment("c");
        assert_eq!(cart.totals().total_amount, Decimal::new(4100, 2));

        cart.decrement("c");
        assert_eq!(cart.totals().total_amount, Decimal::new(2050, 2));
        assert_eq!(cart.totals().total_items, 1);
    }

    #[test]
    fn decrement_stops_at_zero() {
        let mut cart = Cart::new(menu());

        assert_eq!(cart.decrement("a"), Some(0));
        assert_eq!(cart.decrement("a"), Some(0));
        assert_eq!(cart.quantity("a"), Some(0));

        cart.increment("a");

        assert_eq!(cart.decrement("a"), Some(0));
        assert_eq!(cart.decrement("a"), Some(0));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut cart = Cart::new(menu());

        assert_eq!(cart.increment("zz"), None);
        assert_eq!(cart.decrement("zz"), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn selected_lines_keep_menu_order() {
        let mut cart = Cart::new(menu());

        cart.increment("c");
        cart.increment("a");

        let selected: Vec<&str> = cart
            .selected_lines()
            .map(|line| line.entry.id.as_str())
            .collect();

        assert_eq!(selected, ["a", "c"]);
    }

    #[test]
    fn with_quantities_ignores_unknown_ids() {
        let quantities = BTreeMap::from([("a", 2), ("b", 1), ("nope", 7)]);

        let cart = Cart::with_quantities(menu(), quantities);

        assert_eq!(cart.quantity("a"), Some(2));
        assert_eq!(cart.quantity("b"), Some(1));
        assert_eq!(cart.totals().total_items, 3);
    }

    #[test]
    fn totals_match_sums_over_arbitrary_sequences() {
        let mut cart = Cart::new(menu());
        let ops = [
            ("a", true),
            ("b", true),
            ("a", false),
            ("a", false),
            ("c", true),
            ("c", true),
            ("b", false),
            ("b", false),
            ("a", true),
        ];

        for (id, up) in ops {
            if up {
                cart.increment(id);
            } else {
                cart.decrement(id);
            }

            let expected_items: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
            let expected_amount: Decimal = cart
                .lines()
                .iter()
                .map(|l| Decimal::from(l.quantity) * l.entry.unit_price)
                .sum();

            assert_eq!(cart.totals().total_items, expected_items);
            assert_eq!(cart.totals().total_amount, expected_amount);
        }
    }

    #[test]
    fn snapshot_copies_selected_lines() -> TestResult {
        let mut cart = Cart::new(menu());

        cart.increment("a");
        cart.increment("a");
        cart.increment("b");

        let at: Timestamp = "2026-03-01T08:00:00Z".parse()?;
        let summary = cart.snapshot(OrderStatus::Pending, at);

        assert_eq!(
            summary.items,
            vec![
                OrderItem::new("Veg Biryani", 2, Decimal::from(100)),
                OrderItem::new("Paneer Thali", 1, Decimal::from(150)),
            ]
        );
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.total_amount, Decimal::from(350));
        assert_eq!(summary.order_status, OrderStatus::Pending);
        assert_eq!(summary.order_date, at);
        assert_eq!(summary.verify(), Ok(()));

        Ok(())
    }

    #[test]
    fn snapshot_is_not_affected_by_later_price_changes() {
        let mut cart = Cart::new(menu());

        cart.increment("b");

        let summary = cart.snapshot(OrderStatus::Pending, Timestamp::UNIX_EPOCH);

        let repriced: Vec<MenuEntry> = menu()
            .into_iter()
            .map(|mut entry| {
                entry.unit_price = Decimal::from(999);
                entry
            })
            .collect();

        let _repriced_cart = Cart::with_quantities(repriced, [("b", 1)]);

        assert_eq!(
            summary.items.first().map(|item| item.price),
            Some(Decimal::from(150))
        );
    }
}
