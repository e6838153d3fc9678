use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for one interactive session.
///
/// The defaults are the simulation constants; tests shrink the delays and
/// drive them under a paused clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Delay before simulated wallet creation succeeds.
    pub creating_delay_ms: u64,
    /// How long the success screen stays up before the wallet is final.
    pub success_delay_ms: u64,
    /// Number of markets in the generic feed.
    pub feed_markets: usize,
    /// Number of markets in a category feed.
    pub category_markets: usize,
    /// Initial share quantity on the order confirmation screen.
    pub default_shares: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            creating_delay_ms: 2000,
            success_delay_ms: 1500,
            feed_markets: 20,
            category_markets: 15,
            default_shares: 10,
        }
    }
}

impl SessionConfig {
    pub fn creating_delay(&self) -> Duration {
        Duration::from_millis(self.creating_delay_ms)
    }

    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_simulation_constants() {
        let config = SessionConfig::default();
        assert_eq!(config.creating_delay(), Duration::from_millis(2000));
        assert_eq!(config.success_delay(), Duration::from_millis(1500));
        assert_eq!(config.feed_markets, 20);
        assert_eq!(config.category_markets, 15);
        assert_eq!(config.default_shares, 10);
    }
}
