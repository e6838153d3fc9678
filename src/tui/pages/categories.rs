use crate::markets::Category;
use crate::session::Session;
use crate::tui::App;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

const COLUMNS: usize = 2;

/// The category grid, the initial view.
pub struct CategoriesPage {
    pub selected: usize,
}

impl CategoriesPage {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    fn render_tile(&self, frame: &mut Frame, area: Rect, index: usize) {
        let category = Category::ALL[index];
        let selected = index == self.selected;

        let border_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .border_style(border_style);

        let label = Paragraph::new(Line::from(
            Span::raw(category.title().to_uppercase())
                .fg(category.accent())
                .bold(),
        ))
        .alignment(Alignment::Center)
        .block(block);

        frame.render_widget(label, area);
    }
}

impl super::Page for CategoriesPage {
    fn render(&self, frame: &mut Frame, area: Rect, _app: &App) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title("Markets - ↑↓←→ select, Enter open");
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ])
            .split(inner);

        for (row_index, row) in rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            for (col_index, cell) in columns.iter().enumerate() {
                let index = row_index * COLUMNS + col_index;
                if index < Category::ALL.len() {
                    self.render_tile(frame, *cell, index);
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> bool {
        let count = Category::ALL.len();
        match key.code {
            KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.selected = (self.selected + 1).min(count - 1);
                true
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(COLUMNS);
                true
            }
            KeyCode::Down => {
                self.selected = (self.selected + COLUMNS).min(count - 1);
                true
            }
            KeyCode::Enter => {
                session.select_category(Category::ALL[self.selected]);
                true
            }
            _ => false,
        }
    }
}

impl Default for CategoriesPage {
    fn default() -> Self {
        Self::new()
    }
}
