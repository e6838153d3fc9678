use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn label(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

/// One past trade in the simulated history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub side: TradeSide,
    pub market: &'static str,
    pub shares: u32,
    pub price: Decimal,
    pub timestamp: &'static str,
}

impl TransactionRecord {
    /// Notional cost of the fill.
    pub fn cost(&self) -> Decimal {
        Decimal::from(self.shares) * self.price
    }
}

/// Fixed ordered trade history, newest first.
pub fn recent_trades() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord {
            side: TradeSide::Buy,
            market: "Will Bitcoin hit $100k in Jan?",
            shares: 400,
            price: Decimal::new(45, 2),
            timestamp: "2024-01-12 14:30",
        },
        TransactionRecord {
            side: TradeSide::Buy,
            market: "Will Elon Musk buy TikTok?",
            shares: 150,
            price: Decimal::new(80, 2),
            timestamp: "2024-01-11 09:15",
        },
        TransactionRecord {
            side: TradeSide::Buy,
            market: "Will GTA VI trailer 2 drop?",
            shares: 200,
            price: Decimal::new(50, 2),
            timestamp: "2024-01-10 18:45",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn history_is_fixed_and_ordered() {
        let trades = recent_trades();
        assert_eq!(trades.len(), 3);
        assert_eq!(trades, recent_trades());
        assert!(trades.windows(2).all(|w| w[0].timestamp > w[1].timestamp));
    }

    #[test]
    fn cost_is_shares_times_price() {
        let trades = recent_trades();
        assert_eq!(trades[0].cost(), dec!(180.00));
        assert_eq!(trades[1].cost(), dec!(120.00));
    }
}
