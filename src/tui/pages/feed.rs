use crate::markets::{generate, Market};
use crate::session::{Outcome, Session};
use crate::tui::App;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

/// The generic market feed.
pub struct FeedPage {
    pub selected: usize,
}

impl FeedPage {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

/// Shared table rendering for the generic and category feeds.
pub(super) fn render_market_table(
    frame: &mut Frame,
    area: Rect,
    title: String,
    markets: &[Market],
    selected: usize,
) {
    let header = Row::new(vec!["Market", "YES", "NO"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = markets
        .iter()
        .enumerate()
        .map(|(i, market)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Row::new(vec![
                Cell::from(market.question),
                Cell::from(format!("YES {}%", market.yes_probability))
                    .style(Style::default().fg(Color::Green)),
                Cell::from(format!("NO {}%", market.no_probability()))
                    .style(Style::default().fg(Color::Red)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        &[
            Constraint::Percentage(64),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

pub(super) fn feed_navigation(selected: &mut usize, key: KeyCode, len: usize) -> bool {
    match key {
        KeyCode::Up => {
            *selected = selected.saturating_sub(1);
            true
        }
        KeyCode::Down => {
            if len > 0 {
                *selected = (*selected + 1).min(len - 1);
            }
            true
        }
        _ => false,
    }
}

impl super::Page for FeedPage {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let count = app.session.config().feed_markets;
        let markets: Vec<Market> = (0..count).map(|i| generate(i, None)).collect();
        render_market_table(
            frame,
            area,
            format!("Feed ({count}) - ↑↓ select, y/n buy"),
            &markets,
            self.selected,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> bool {
        let count = session.config().feed_markets;
        if feed_navigation(&mut self.selected, key.code, count) {
            return true;
        }
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let market = generate(self.selected, None);
                session.open_draft(market.question, Outcome::Yes, market.yes_probability);
                true
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let market = generate(self.selected, None);
                session.open_draft(market.question, Outcome::No, market.no_probability());
                true
            }
            _ => false,
        }
    }
}

impl Default for FeedPage {
    fn default() -> Self {
        Self::new()
    }
}
