use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Which side of a binary market an order is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Yes,
    No,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Yes => "YES",
            Outcome::No => "NO",
        }
    }
}

/// Transient, unconfirmed order selection.
///
/// While a draft is present the confirmation screen strictly overrides
/// whatever view navigation points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub market: String,
    pub outcome: Outcome,
    /// Share price in dollars, within `(0, 1]`.
    pub price: Decimal,
}

/// Success signal emitted by a confirmed order. Nothing is persisted; the
/// mock action ends here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub market: String,
    pub outcome: Outcome,
    pub shares: u32,
    pub price: Decimal,
}

impl OrderReceipt {
    pub fn cost(&self) -> Decimal {
        Decimal::from(self.shares) * self.price
    }
}

/// Owns the pending-buy selection.
#[derive(Debug, Default)]
pub struct DraftController {
    draft: Option<OrderDraft>,
}

impl DraftController {
    pub fn draft(&self) -> Option<&OrderDraft> {
        self.draft.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Stage an order at `percent` cents per share. Always succeeds and
    /// overwrites any existing draft; the price is clamped into `(0, 1]`.
    pub fn open(&mut self, market: impl Into<String>, outcome: Outcome, percent: u8) {
        let percent = percent.clamp(1, 100);
        self.draft = Some(OrderDraft {
            market: market.into(),
            outcome,
            price: Decimal::from(percent) / Decimal::from(100),
        });
    }

    /// Clear the draft unconditionally. Used by cancel and by confirm.
    pub fn close(&mut self) {
        self.draft = None;
    }

    /// Report the success signal for the staged order, then close it.
    pub fn confirm(&mut self, shares: u32) -> Option<OrderReceipt> {
        let draft = self.draft.take()?;
        let receipt = OrderReceipt {
            market: draft.market,
            outcome: draft.outcome,
            shares,
            price: draft.price,
        };
        info!(
            market = %receipt.market,
            outcome = receipt.outcome.label(),
            shares,
            "order placed"
        );
        Some(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn open_prices_the_percent_as_cents() {
        let mut orders = DraftController::default();
        orders.open("Will BTC break ATH?", Outcome::Yes, 64);

        let draft = orders.draft().unwrap();
        assert_eq!(draft.market, "Will BTC break ATH?");
        assert_eq!(draft.outcome, Outcome::Yes);
        assert_eq!(draft.price, dec!(0.64));
    }

    #[test]
    fn open_overwrites_and_clamps() {
        let mut orders = DraftController::default();
        orders.open("a", Outcome::Yes, 0);
        assert_eq!(orders.draft().unwrap().price, dec!(0.01));

        orders.open("b", Outcome::No, 100);
        let draft = orders.draft().unwrap();
        assert_eq!(draft.market, "b");
        assert_eq!(draft.price, dec!(1.00));
    }

    #[test]
    fn confirm_emits_a_receipt_and_clears_the_draft() {
        let mut orders = DraftController::default();
        orders.open("Will BTC break ATH?", Outcome::Yes, 64);

        let receipt = orders.confirm(10).unwrap();
        assert_eq!(receipt.outcome, Outcome::Yes);
        assert_eq!(receipt.price, dec!(0.64));
        assert_eq!(receipt.cost(), dec!(6.40));
        assert!(!orders.is_open());

        // nothing left to confirm
        assert!(orders.confirm(10).is_none());
    }

    #[test]
    fn close_is_unconditional() {
        let mut orders = DraftController::default();
        orders.close();
        assert!(!orders.is_open());

        orders.open("a", Outcome::No, 35);
        orders.close();
        assert!(!orders.is_open());
    }
}
