use crate::markets::{generate, Market};
use crate::session::{Outcome, Session};
use crate::tui::App;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;

use super::feed::{feed_navigation, render_market_table};

/// Market feed filtered to the selected category.
pub struct CategoryFeedPage {
    pub selected: usize,
}

impl CategoryFeedPage {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl super::Page for CategoryFeedPage {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let category = app.session.selected_category();
        let count = app.session.config().category_markets;
        let markets: Vec<Market> = (0..count).map(|i| generate(i, category)).collect();

        let label = category.map(|c| c.title()).unwrap_or("All");
        render_market_table(
            frame,
            area,
            format!("{label} ({count}) - ↑↓ select, y/n buy, Esc back"),
            &markets,
            self.selected,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> bool {
        let count = session.config().category_markets;
        if feed_navigation(&mut self.selected, key.code, count) {
            return true;
        }
        let category = session.selected_category();
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let market = generate(self.selected, category);
                session.open_draft(market.question, Outcome::Yes, market.yes_probability);
                true
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let market = generate(self.selected, category);
                session.open_draft(market.question, Outcome::No, market.no_probability());
                true
            }
            _ => false,
        }
    }
}

impl Default for CategoryFeedPage {
    fn default() -> Self {
        Self::new()
    }
}
