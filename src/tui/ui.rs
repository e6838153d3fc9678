use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::session::{View, WalletStatus};
use crate::tui::pages::Page;
use crate::tui::App;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    app.update_notification();
    let app = &*app;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    // the provisioning screens cover everything, then an open draft
    // overrides the active view
    match app.session.wallet_status() {
        WalletStatus::Creating => {
            draw_wallet_screen(frame, chunks[1], "CREATING GNOSIS SAFE WALLET...", Color::White)
        }
        WalletStatus::SuccessScreen => {
            draw_wallet_screen(frame, chunks[1], "SUCCESS! WALLET DISCOVERED", Color::Green)
        }
        _ => draw_content(frame, chunks[1], app),
    }

    draw_footer(frame, chunks[2], app);

    if let Some((message, _)) = &app.notification {
        render_notification(frame, message);
    }
}

fn draw_content(frame: &mut Frame<'_>, area: Rect, app: &App) {
    if app.session.draft().is_some() {
        app.order_page.render(frame, area, app);
        return;
    }

    match app.session.view() {
        View::Feed => app.feed_page.render(frame, area, app),
        View::Categories => app.categories_page.render(frame, area, app),
        View::CategoryFeed => app.category_feed_page.render(frame, area, app),
        View::Portfolio => app.portfolio_page.render(frame, area, app),
        View::Trades => app.trades_page.render(frame, area, app),
    }
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = vec![
        Line::from(Span::raw("POLY-EMPIRE").bold().italic()),
        Line::from(Span::raw("Level 1: Novice Predictor").fg(Color::DarkGray)),
    ];
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    frame.render_widget(Paragraph::new(title).block(title_block), header_chunks[0]);

    let (wallet_label, wallet_style) = match app.session.wallet_status() {
        WalletStatus::Idle => ("[w] CREATE WALLET", Style::default().fg(Color::Cyan)),
        WalletStatus::Creating | WalletStatus::SuccessScreen => {
            ("WORKING...", Style::default().fg(Color::DarkGray))
        }
        WalletStatus::Created => (
            "[w] WALLET",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        WalletStatus::Failed => ("[w] WALLET FAILED", Style::default().fg(Color::Red)),
    };
    let wallet = Paragraph::new(Line::from(Span::styled(wallet_label, wallet_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Wallet "),
        );
    frame.render_widget(wallet, header_chunks[1]);
}

fn draw_wallet_screen(frame: &mut Frame<'_>, area: Rect, message: &str, color: Color) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::raw(message).fg(color).bold().italic()),
    ];
    let screen = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(screen, area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let mut spans = vec![
        Span::raw("m").bold(),
        Span::raw(" Markets  "),
        Span::raw("f").bold(),
        Span::raw(" Feed  "),
        Span::raw("p").bold(),
        Span::raw(" Portfolio  "),
        Span::raw("q").bold(),
        Span::raw(" Quit"),
    ];

    // host main button, rendered from whatever the bridge pushed
    if let Some(params) = app
        .host_chrome
        .as_ref()
        .and_then(|chrome| chrome.button_params())
    {
        if params.visible {
            let mut style = Style::default();
            if let Some(bg) = hex_color(&params.bg_color) {
                style = style.bg(bg);
            }
            if let Some(fg) = hex_color(&params.fg_color) {
                style = style.fg(fg);
            }
            if !params.enabled {
                style = style.add_modifier(Modifier::DIM);
            }
            spans.push(Span::raw("   "));
            spans.push(Span::styled(format!(" Space: {} ", params.label), style));
        }
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Render a notification overlay at the bottom center of the screen
fn render_notification(frame: &mut Frame<'_>, message: &str) {
    let area = frame.area();

    let width = (message.len() + 4).min(60) as u16;
    let height = 3;
    let x = (area.width.saturating_sub(width)) / 2;
    let y = area.height.saturating_sub(height + 1);

    let notification_area = Rect::new(x, y, width, height);

    let notification = Paragraph::new(message)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .style(Style::default().bg(Color::Black)),
        )
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);

    frame.render_widget(notification, notification_area);
}

/// Parse a `#rrggbb` hex triplet into a terminal color.
fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_parses_triplets() {
        assert_eq!(hex_color("#000000"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(hex_color("#facc15"), Some(Color::Rgb(0xfa, 0xcc, 0x15)));
        assert_eq!(hex_color("facc15"), None);
        assert_eq!(hex_color("#fff"), None);
    }
}
