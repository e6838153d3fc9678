use crate::session::{Outcome, Session};
use crate::tui::App;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use rust_decimal::Decimal;

/// Order confirmation screen. Shown whenever a draft is present, overriding
/// the active view; the share quantity lives here because it is purely a
/// presentation concern.
pub struct OrderPage {
    shares: u32,
}

impl OrderPage {
    pub fn new(shares: u32) -> Self {
        Self { shares }
    }

    pub fn shares(&self) -> u32 {
        self.shares
    }

    /// Re-arm the quantity when a fresh draft opens.
    pub fn reset(&mut self, shares: u32) {
        self.shares = shares;
    }
}

impl super::Page for OrderPage {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let Some(draft) = app.session.draft() else {
            return;
        };

        let outcome_span = match draft.outcome {
            Outcome::Yes => Span::raw("YES").fg(Color::Green).bold(),
            Outcome::No => Span::raw("NO").fg(Color::Red).bold(),
        };
        let total = Decimal::from(self.shares) * draft.price;

        let lines = vec![
            Line::from(""),
            Line::from(Span::raw(draft.market.clone()).bold()),
            Line::from(""),
            Line::from(vec![Span::raw("Option:  "), outcome_span]),
            Line::from(vec![
                Span::raw("Price:   "),
                Span::raw(format!("${:.2}", draft.price)).bold(),
            ]),
            Line::from(vec![
                Span::raw("Shares:  "),
                Span::raw(self.shares.to_string()).bold(),
                Span::raw("  (+/- to adjust)"),
            ]),
            Line::from(vec![
                Span::raw("Total:   "),
                Span::raw(format!("${:.2}", total)).bold(),
            ]),
            Line::from(""),
            Line::from(Span::raw("Enter confirm · Esc cancel").fg(Color::DarkGray)),
        ];

        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .title("CONFIRM ORDER"),
            );

        frame.render_widget(card, area);
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &mut Session) -> bool {
        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                self.shares = self.shares.saturating_add(1);
                true
            }
            KeyCode::Char('-') | KeyCode::Down => {
                self.shares = self.shares.saturating_sub(1).max(1);
                true
            }
            _ => false,
        }
    }
}
