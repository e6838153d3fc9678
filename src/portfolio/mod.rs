//! Simulated portfolio fixtures
//!
//! Positions, the account summary, and the trade history are fixed read-only
//! data. PnL percent and position value are always computed from the stored
//! fields, never stored themselves. Real balance/PnL computation from ledger
//! data is out of scope.

pub mod trades;

pub use trades::{recent_trades, TradeSide, TransactionRecord};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::session::Outcome;

/// A held position in the simulated portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioPosition {
    pub question: &'static str,
    pub outcome: Outcome,
    pub shares: u32,
    pub avg_price: Decimal,
    pub current_price: Decimal,
}

impl PortfolioPosition {
    /// Percentage gain/loss relative to the average entry price.
    pub fn pnl_percent(&self) -> Decimal {
        (self.current_price - self.avg_price) / self.avg_price * Decimal::from(100)
    }

    /// Current market value of the position.
    pub fn value(&self) -> Decimal {
        Decimal::from(self.shares) * self.current_price
    }

    pub fn is_profit(&self) -> bool {
        self.current_price >= self.avg_price
    }
}

/// Headline figures shown above the position list. Hardcoded by design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub invested: Decimal,
    pub net_pnl: Decimal,
}

impl AccountSummary {
    pub fn total_value(&self) -> Decimal {
        self.invested + self.net_pnl
    }
}

pub fn account_summary() -> AccountSummary {
    AccountSummary {
        invested: Decimal::new(50000, 2),
        net_pnl: Decimal::new(12450, 2),
    }
}

pub fn positions() -> Vec<PortfolioPosition> {
    vec![
        PortfolioPosition {
            question: "Will Bitcoin hit $100k in Jan?",
            outcome: Outcome::Yes,
            shares: 400,
            avg_price: Decimal::new(45, 2),
            current_price: Decimal::new(64, 2),
        },
        PortfolioPosition {
            question: "Will Elon Musk buy TikTok?",
            outcome: Outcome::No,
            shares: 150,
            avg_price: Decimal::new(80, 2),
            current_price: Decimal::new(95, 2),
        },
        PortfolioPosition {
            question: "Will GTA VI trailer 2 drop?",
            outcome: Outcome::Yes,
            shares: 200,
            avg_price: Decimal::new(50, 2),
            current_price: Decimal::new(10, 2),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn pnl_percent_and_value_are_derived() {
        let positions = positions();

        // 400 shares, 0.45 -> 0.64
        assert_eq!(positions[0].value(), dec!(256.00));
        assert_eq!(positions[0].pnl_percent().round_dp(1), dec!(42.2));
        assert!(positions[0].is_profit());

        // 200 shares, 0.50 -> 0.10
        assert_eq!(positions[2].value(), dec!(20.00));
        assert_eq!(positions[2].pnl_percent(), dec!(-80));
        assert!(!positions[2].is_profit());
    }

    #[test]
    fn summary_total_is_invested_plus_pnl() {
        let summary = account_summary();
        assert_eq!(summary.total_value(), dec!(624.50));
    }

    #[test]
    fn fixtures_are_stable() {
        assert_eq!(positions(), positions());
        assert_eq!(positions().len(), 3);
    }
}
