use crate::session::{Gate, Outcome, Session, WalletStatus};
use crate::tui::App;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

/// Portfolio view: live positions once the wallet exists, a locked
/// placeholder before that.
pub struct PortfolioPage {
    pub selected_position: usize,
}

impl PortfolioPage {
    pub fn new() -> Self {
        Self {
            selected_position: 0,
        }
    }

    fn render_locked(&self, frame: &mut Frame, area: Rect, app: &App) {
        let lines = match app.session.wallet_status() {
            WalletStatus::Failed => vec![
                Line::from(""),
                Line::from(Span::raw("WALLET LOCKED").bold()),
                Line::from(""),
                Line::from(Span::raw("Wallet creation failed.").fg(Color::Red)),
                Line::from("Press r to reset, then w to try again."),
            ],
            _ => vec![
                Line::from(""),
                Line::from(Span::raw("WALLET LOCKED").bold()),
                Line::from(""),
                Line::from("Create a Gnosis Safe wallet to access your portfolio and trades."),
                Line::from(""),
                Line::from(Span::raw("[w] CREATE WALLET").fg(Color::Cyan).bold()),
            ],
        };

        let placeholder = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Portfolio"));

        frame.render_widget(placeholder, area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, app: &App) {
        let summary = &app.summary;
        let text = vec![
            Line::from(Span::raw("YOUR PERFORMANCE").bold()),
            Line::from(vec![
                Span::raw("Invested: "),
                Span::raw(format!("${:.2}", summary.invested)).bold(),
                Span::raw("   Net PnL: "),
                Span::raw(format!("+${:.2}", summary.net_pnl))
                    .fg(Color::Green)
                    .bold(),
            ]),
            Line::from(vec![
                Span::raw("Total value: "),
                Span::raw(format!("${:.2}", summary.total_value()))
                    .fg(Color::Green)
                    .bold(),
            ]),
        ];

        let paragraph =
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Summary"));
        frame.render_widget(paragraph, area);
    }

    fn render_positions(&self, frame: &mut Frame, area: Rect, app: &App) {
        let header = Row::new(vec!["Market", "Side", "Shares", "Avg", "Current", "PnL %", "Value"])
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let rows: Vec<Row> = app
            .positions
            .iter()
            .enumerate()
            .map(|(i, position)| {
                let style = if i == self.selected_position {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                let side_style = match position.outcome {
                    Outcome::Yes => Style::default().fg(Color::Green),
                    Outcome::No => Style::default().fg(Color::Red),
                };

                let pnl = position.pnl_percent();
                let pnl_style = if position.is_profit() {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                };
                let pnl_str = if position.is_profit() {
                    format!("+{:.1}%", pnl)
                } else {
                    format!("{:.1}%", pnl)
                };

                Row::new(vec![
                    Cell::from(position.question),
                    Cell::from(position.outcome.label()).style(side_style),
                    Cell::from(position.shares.to_string()),
                    Cell::from(format!("${:.2}", position.avg_price)),
                    Cell::from(format!("${:.2}", position.current_price)),
                    Cell::from(pnl_str).style(pnl_style),
                    Cell::from(format!("${:.2}", position.value())),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            &[
                Constraint::Percentage(34),
                Constraint::Percentage(8),
                Constraint::Percentage(10),
                Constraint::Percentage(12),
                Constraint::Percentage(12),
                Constraint::Percentage(12),
                Constraint::Percentage(12),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Active Positions ({})",
            app.positions.len()
        )));

        frame.render_widget(table, area);
    }
}

impl super::Page for PortfolioPage {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        if app.session.gate() == Gate::Locked {
            self.render_locked(frame, area, app);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        self.render_summary(frame, chunks[0], app);
        self.render_positions(frame, chunks[1], app);
    }

    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> bool {
        if session.gate() == Gate::Locked {
            return match key.code {
                // the placeholder's create-wallet button
                KeyCode::Enter => {
                    session.wallet_gesture();
                    true
                }
                KeyCode::Char('r') | KeyCode::Char('R') => session.reset_wallet(),
                _ => false,
            };
        }

        match key.code {
            KeyCode::Up => {
                self.selected_position = self.selected_position.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                let count = crate::portfolio::positions().len();
                if count > 0 {
                    self.selected_position = (self.selected_position + 1).min(count - 1);
                }
                true
            }
            _ => false,
        }
    }
}

impl Default for PortfolioPage {
    fn default() -> Self {
        Self::new()
    }
}
