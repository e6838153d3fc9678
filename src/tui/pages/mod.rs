use crate::session::Session;
use crate::tui::App;
use crossterm::event::KeyEvent;
use ratatui::prelude::*;

pub mod categories;
pub mod category_feed;
pub mod feed;
pub mod order;
pub mod portfolio;
pub mod trades;

pub use categories::CategoriesPage;
pub use category_feed::CategoryFeedPage;
pub use feed::FeedPage;
pub use order::OrderPage;
pub use portfolio::PortfolioPage;
pub use trades::TradesPage;

/// One renderable screen.
///
/// Pages keep only their own cursor/input state; everything that outlives a
/// screen lives in the [`Session`].
pub trait Page {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> bool;
}
