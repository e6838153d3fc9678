use rust_decimal::Decimal;
use serde::Serialize;

use super::Category;

/// Question pool used when no category is selected.
const GENERIC_MARKETS: [&str; 10] = [
    "Will Bitcoin hit $100k in Jan?",
    "Will Solana flip BNB by Q2?",
    "Will Elon Musk buy TikTok?",
    "Will GPT-5 release before July?",
    "Will Ethereum Gas drop below 5 gwei?",
    "Will Apple launch a foldable iPhone?",
    "Will the Fed cut rates in March?",
    "Will GTA VI trailer 2 drop this week?",
    "Will TypeScript add native types?",
    "Will React 20 remove hooks?",
];

const CRYPTO_MARKETS: [&str; 5] = [
    "Will BTC break ATH this week?",
    "ETH to $10k by EOY?",
    "Solana ETF approval?",
    "Dogecoin to $1?",
    "Binance to list PEPE?",
];

const POLITICS_MARKETS: [&str; 4] = [
    "Who will win 2024 Election?",
    "New tax bill passes?",
    "Approval rating up?",
    "Cabinet reshuffle?",
];

const SPORTS_MARKETS: [&str; 4] = [
    "Lakers to win finals?",
    "Mbappe triggers clause?",
    "F1 Champion 2025?",
    "Superbowl winner?",
];

const BUSINESS_MARKETS: [&str; 4] = [
    "OpenAI IPO in 2025?",
    "NVIDIA hits $4T cap?",
    "Twitter rebrands back to Bird?",
    "Tesla recalls cybertruck?",
];

const POP_CULTURE_MARKETS: [&str; 4] = [
    "Taylor Swift album drop?",
    "Next James Bond announced?",
    "Oscar Best Picture?",
    "Met Gala theme?",
];

const SCIENCE_MARKETS: [&str; 4] = [
    "Fusion breakthrough confirmed?",
    "Mars colony date set?",
    "Cancer value approved?",
    "AGI achieved?",
];

fn pool(category: Option<Category>) -> &'static [&'static str] {
    match category {
        None => &GENERIC_MARKETS,
        Some(Category::Crypto) => &CRYPTO_MARKETS,
        Some(Category::Politics) => &POLITICS_MARKETS,
        Some(Category::Sports) => &SPORTS_MARKETS,
        Some(Category::Business) => &BUSINESS_MARKETS,
        Some(Category::PopCulture) => &POP_CULTURE_MARKETS,
        Some(Category::Science) => &SCIENCE_MARKETS,
    }
}

/// A synthetic market. Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Market {
    pub question: &'static str,
    /// YES probability as an integer percent, always within `[30, 89]`.
    pub yes_probability: u8,
}

impl Market {
    /// Always derived from the YES side, never stored separately.
    pub fn no_probability(&self) -> u8 {
        100 - self.yes_probability
    }

    /// YES share price in dollars (percent as cents).
    pub fn yes_price(&self) -> Decimal {
        Decimal::from(self.yes_probability) / Decimal::from(100)
    }

    pub fn no_price(&self) -> Decimal {
        Decimal::from(self.no_probability()) / Decimal::from(100)
    }
}

/// Produce the market shown at `index` of a feed.
///
/// Pure and deterministic: identical inputs always yield identical output.
/// The question cycles through the pool; the probability is
/// `30 + (index * 7) % 60`, which keeps it inside `[30, 89]`.
pub fn generate(index: usize, category: Option<Category>) -> Market {
    let pool = pool(category);
    Market {
        question: pool[index % pool.len()],
        yes_probability: (30 + (index * 7) % 60) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn generate_is_deterministic() {
        for index in 0..200 {
            for category in std::iter::once(None).chain(Category::ALL.map(Some)) {
                assert_eq!(generate(index, category), generate(index, category));
            }
        }
    }

    #[test]
    fn probabilities_stay_in_range_and_sum_to_100() {
        for index in 0..1000 {
            let market = generate(index, None);
            assert!((30..=89).contains(&market.yes_probability), "index {index}");
            assert_eq!(
                market.yes_probability as u16 + market.no_probability() as u16,
                100
            );
        }
    }

    #[test]
    fn generic_pool_index_zero() {
        let market = generate(0, None);
        assert_eq!(market.question, "Will Bitcoin hit $100k in Jan?");
        assert_eq!(market.yes_probability, 30);
    }

    #[test]
    fn generic_pool_wraps_at_index_ten() {
        // 10 % 10 == 0, 30 + 70 % 60 == 40
        let market = generate(10, None);
        assert_eq!(market.question, generate(0, None).question);
        assert_eq!(market.yes_probability, 40);
    }

    #[test]
    fn category_selects_its_own_pool() {
        let market = generate(0, Some(Category::Crypto));
        assert_eq!(market.question, "Will BTC break ATH this week?");
        // Crypto pool has 5 entries
        assert_eq!(generate(5, Some(Category::Crypto)).question, market.question);
    }

    #[test]
    fn prices_derive_from_percent() {
        let market = generate(0, None);
        assert_eq!(market.yes_price(), dec!(0.30));
        assert_eq!(market.no_price(), dec!(0.70));
    }
}
