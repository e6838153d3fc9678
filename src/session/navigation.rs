use tracing::debug;

use crate::markets::Category;
use crate::session::wallet::WalletStatus;

/// Top-level screen currently shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Feed,
    Categories,
    CategoryFeed,
    Portfolio,
    Trades,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Feed => "Feed",
            View::Categories => "Markets",
            View::CategoryFeed => "Category",
            View::Portfolio => "Portfolio",
            View::Trades => "Recent Trades",
        }
    }
}

/// Whether a wallet-gated view renders live content or a locked placeholder.
///
/// A locked request is not an error: the view is still entered, only its
/// rendering is gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Locked,
    Unlocked,
}

/// Navigation state machine. No transition is ever rejected.
#[derive(Debug)]
pub struct Navigation {
    view: View,
    selected_category: Option<Category>,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            view: View::Categories,
            selected_category: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The category shown by the category feed. Retained until the next
    /// selection; meaningless outside `CategoryFeed`.
    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn goto(&mut self, view: View) {
        debug!(from = ?self.view, to = ?view, "navigate");
        self.view = view;
    }

    /// Select a category and enter its feed.
    pub fn select_category(&mut self, category: Category) {
        self.selected_category = Some(category);
        self.goto(View::CategoryFeed);
    }

    /// Gating for `Portfolio` and `Trades`: unlocked only once the wallet
    /// is fully created.
    pub fn gate(&self, wallet: WalletStatus) -> Gate {
        if wallet == WalletStatus::Created {
            Gate::Unlocked
        } else {
            Gate::Locked
        }
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_categories_with_no_selection() {
        let nav = Navigation::new();
        assert_eq!(nav.view(), View::Categories);
        assert_eq!(nav.selected_category(), None);
    }

    #[test]
    fn goto_always_succeeds_from_any_view() {
        let mut nav = Navigation::new();
        for view in [
            View::Feed,
            View::Portfolio,
            View::Trades,
            View::CategoryFeed,
            View::Categories,
        ] {
            nav.goto(view);
            assert_eq!(nav.view(), view);
        }
    }

    #[test]
    fn select_category_enters_the_category_feed() {
        let mut nav = Navigation::new();
        nav.select_category(Category::Sports);
        assert_eq!(nav.view(), View::CategoryFeed);
        assert_eq!(nav.selected_category(), Some(Category::Sports));

        // selection is retained after navigating away
        nav.goto(View::Categories);
        assert_eq!(nav.selected_category(), Some(Category::Sports));
    }

    #[test]
    fn gate_unlocks_only_for_a_created_wallet() {
        let nav = Navigation::new();
        for status in [
            WalletStatus::Idle,
            WalletStatus::Creating,
            WalletStatus::SuccessScreen,
            WalletStatus::Failed,
        ] {
            assert_eq!(nav.gate(status), Gate::Locked, "{status:?}");
        }
        assert_eq!(nav.gate(WalletStatus::Created), Gate::Unlocked);
    }
}
