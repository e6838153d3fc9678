use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::host::{HostButtonBridge, HostShell, TerminalHost};
use crate::portfolio::{
    account_summary, positions, recent_trades, AccountSummary, PortfolioPosition,
    TransactionRecord,
};
use crate::session::{Session, View, WalletEvent};
use crate::tui::events::Event;
use crate::tui::pages::{
    CategoriesPage, CategoryFeedPage, FeedPage, OrderPage, Page, PortfolioPage, TradesPage,
};

const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Top-level application state: the session, the fixtures, the pages, and
/// the host bridge.
pub struct App {
    pub session: Session,
    pub positions: Vec<PortfolioPosition>,
    pub trades: Vec<TransactionRecord>,
    pub summary: AccountSummary,

    pub feed_page: FeedPage,
    pub categories_page: CategoriesPage,
    pub category_feed_page: CategoryFeedPage,
    pub portfolio_page: PortfolioPage,
    pub trades_page: TradesPage,
    pub order_page: OrderPage,

    /// Present when the terminal itself acts as the host shell; the footer
    /// chrome reads the button params back from it.
    pub host_chrome: Option<Arc<TerminalHost>>,
    bridge: HostButtonBridge,

    pub notification: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        session: Session,
        host: Arc<dyn HostShell>,
        host_chrome: Option<Arc<TerminalHost>>,
        events: UnboundedSender<Event>,
    ) -> Self {
        let default_shares = session.config().default_shares;

        let mut bridge = HostButtonBridge::new(host);
        let press_tx = events.clone();
        bridge.mount(Arc::new(move || {
            if press_tx.send(Event::HostPress).is_err() {
                debug!("event channel closed, dropping host press");
            }
        }));

        Self {
            session,
            positions: positions(),
            trades: recent_trades(),
            summary: account_summary(),
            feed_page: FeedPage::new(),
            categories_page: CategoriesPage::new(),
            category_feed_page: CategoryFeedPage::new(),
            portfolio_page: PortfolioPage::new(),
            trades_page: TradesPage::new(),
            order_page: OrderPage::new(default_shares),
            host_chrome,
            bridge,
            notification: None,
            should_quit: false,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.update_notification(),
            Event::HostPress => {
                self.session.host_press();
            }
            Event::Error(message) => warn!(%message, "terminal event error"),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        // Space stands in for the host main button, which lives outside the
        // screen and works even under the wallet overlay.
        if key.code == KeyCode::Char(' ') {
            match &self.host_chrome {
                Some(chrome) => chrome.press(),
                None => debug!("no host shell, button press unavailable"),
            }
            return;
        }

        // the provisioning overlay is modal
        if self.session.wallet_busy() {
            return;
        }

        // an open draft overrides the active view
        if self.session.draft().is_some() {
            match key.code {
                KeyCode::Enter => {
                    if let Some(receipt) = self.session.confirm_draft(self.order_page.shares()) {
                        self.notify(format!(
                            "ORDER PLACED: {} x{} @ ${:.2}",
                            receipt.outcome.label(),
                            receipt.shares,
                            receipt.price
                        ));
                    }
                }
                KeyCode::Esc => self.session.cancel_draft(),
                _ => {
                    self.order_page.handle_key(key, &mut self.session);
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.session.goto(View::Categories);
                return;
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.session.goto(View::Feed);
                return;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.session.goto(View::Portfolio);
                return;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.session.goto(View::Trades);
                return;
            }
            KeyCode::Char('w') | KeyCode::Char('W') => {
                self.session.wallet_gesture();
                return;
            }
            KeyCode::Esc => {
                self.session.goto(View::Categories);
                return;
            }
            _ => {}
        }

        let handled = match self.session.view() {
            View::Feed => self.feed_page.handle_key(key, &mut self.session),
            View::Categories => self.categories_page.handle_key(key, &mut self.session),
            View::CategoryFeed => self.category_feed_page.handle_key(key, &mut self.session),
            View::Portfolio => self.portfolio_page.handle_key(key, &mut self.session),
            View::Trades => self.trades_page.handle_key(key, &mut self.session),
        };

        // a page just opened a draft: re-arm the confirmation screen
        if handled && self.session.draft().is_some() {
            self.order_page.reset(self.session.config().default_shares);
        }
    }

    pub fn apply_wallet_event(&mut self, event: WalletEvent) {
        self.session.apply_wallet_event(event);
    }

    pub fn notify(&mut self, message: String) {
        self.notification = Some((message, Instant::now()));
    }

    pub fn update_notification(&mut self) {
        if let Some((_, since)) = &self.notification {
            if since.elapsed() > NOTIFICATION_TTL {
                self.notification = None;
            }
        }
    }

    /// Drop the host subscription and cancel wallet timers before the
    /// terminal is restored.
    pub fn teardown(&mut self) {
        self.bridge.unmount();
        self.session.teardown();
    }
}
