use crate::session::{Gate, Session};
use crate::tui::App;
use crate::portfolio::TradeSide;
use crossterm::event::KeyEvent;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

/// Trade history view, wallet-gated like the portfolio.
pub struct TradesPage;

impl TradesPage {
    pub fn new() -> Self {
        Self
    }

    fn render_locked(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::raw("TRADES LOCKED").bold()),
            Line::from(""),
            Line::from("Create a Gnosis Safe wallet to view your history."),
        ];

        let placeholder = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Recent Trades"));

        frame.render_widget(placeholder, area);
    }
}

impl super::Page for TradesPage {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        if app.session.gate() == Gate::Locked {
            self.render_locked(frame, area);
            return;
        }

        let header = Row::new(vec!["Type", "Market", "Fill", "Cost", "Date"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = app
            .trades
            .iter()
            .map(|tx| {
                let side_style = match tx.side {
                    TradeSide::Buy => Style::default().fg(Color::Green),
                    TradeSide::Sell => Style::default().fg(Color::Red),
                };

                Row::new(vec![
                    Cell::from(tx.side.label()).style(side_style),
                    Cell::from(tx.market),
                    Cell::from(format!("{} @ ${:.2}", tx.shares, tx.price)),
                    Cell::from(format!("-${:.2}", tx.cost())),
                    Cell::from(tx.timestamp),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            &[
                Constraint::Percentage(8),
                Constraint::Percentage(40),
                Constraint::Percentage(17),
                Constraint::Percentage(13),
                Constraint::Percentage(22),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Recent Trades ({}) - Esc back",
            app.trades.len()
        )));

        frame.render_widget(table, area);
    }

    fn handle_key(&mut self, _key: KeyEvent, _session: &mut Session) -> bool {
        false
    }
}

impl Default for TradesPage {
    fn default() -> Self {
        Self::new()
    }
}
