//! Session state
//!
//! One [`Session`] owns every piece of mutable state for the lifetime of the
//! process: the navigation machine, the wallet lifecycle, and the order
//! draft. All mutation goes through its named transition methods; there are
//! no ambient globals.

pub mod navigation;
pub mod order;
pub mod wallet;

pub use navigation::{Gate, Navigation, View};
pub use order::{DraftController, OrderDraft, OrderReceipt, Outcome};
pub use wallet::{WalletAction, WalletEvent, WalletLifecycle, WalletStatus};

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::config::SessionConfig;
use crate::markets::Category;

/// Process-lifetime session context.
pub struct Session {
    config: SessionConfig,
    navigation: Navigation,
    wallet: WalletLifecycle,
    orders: DraftController,
}

impl Session {
    /// Build a session and hand back the wallet event channel the run loop
    /// must drain into [`Session::apply_wallet_event`].
    pub fn new(config: SessionConfig) -> (Self, UnboundedReceiver<WalletEvent>) {
        let (wallet, wallet_rx) = WalletLifecycle::new(&config);
        let session = Self {
            config,
            navigation: Navigation::new(),
            wallet,
            orders: DraftController::default(),
        };
        (session, wallet_rx)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn view(&self) -> View {
        self.navigation.view()
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.navigation.selected_category()
    }

    pub fn wallet_status(&self) -> WalletStatus {
        self.wallet.status()
    }

    pub fn wallet_busy(&self) -> bool {
        self.wallet.is_busy()
    }

    /// Gate for the wallet-locked views under the current wallet status.
    pub fn gate(&self) -> Gate {
        self.navigation.gate(self.wallet.status())
    }

    pub fn draft(&self) -> Option<&OrderDraft> {
        self.orders.draft()
    }

    pub fn goto(&mut self, view: View) {
        self.navigation.goto(view);
    }

    pub fn select_category(&mut self, category: Category) {
        self.navigation.select_category(category);
    }

    /// External host button press. Order confirmation takes precedence:
    /// while a draft is open the press is a no-op.
    pub fn host_press(&mut self) -> bool {
        if self.orders.is_open() {
            debug!("host press ignored, order draft open");
            false
        } else {
            self.navigation.goto(View::Trades);
            true
        }
    }

    /// The wallet button gesture; converts the lifecycle's navigate
    /// side-channel into an actual transition.
    pub fn wallet_gesture(&mut self) -> WalletAction {
        let action = self.wallet.request_create();
        if action == WalletAction::OpenPortfolio {
            self.navigation.goto(View::Portfolio);
        }
        action
    }

    pub fn apply_wallet_event(&mut self, event: WalletEvent) {
        self.wallet.apply(event);
    }

    pub fn reset_wallet(&mut self) -> bool {
        self.wallet.reset()
    }

    pub fn open_draft(&mut self, market: impl Into<String>, outcome: Outcome, percent: u8) {
        self.orders.open(market, outcome, percent);
    }

    pub fn cancel_draft(&mut self) {
        self.orders.close();
    }

    pub fn confirm_draft(&mut self, shares: u32) -> Option<OrderReceipt> {
        self.orders.confirm(shares)
    }

    /// Cancel outstanding timers before the terminal is restored.
    pub fn teardown(&mut self) {
        self.wallet.teardown();
    }
}
