// crates/scalar-terminal/src/ui.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, MarketView};
use crate::components::{
    help::draw_help,
    market_info::draw_market_info,
    order_form::draw_order_form,
    status_bar::draw_status_bar,
};

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);

    match &app.market {
        MarketView::Loading => draw_notice(
            f,
            chunks[1],
            "Loading market data...",
            Style::default().fg(Color::Yellow),
        ),
        MarketView::Failed(cause) => draw_notice(
            f,
            chunks[1],
            &format!("Failed to connect to market services\n\n{cause}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        MarketView::Ready(_) => draw_main_content(f, chunks[1], app),
    }

    draw_status_bar(f, chunks[2], app);

    if app.show_help {
        draw_help(f, centered_rect(60, 60, f.size()));
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    let (state_text, state_color) = match &app.market {
        MarketView::Loading => ("connecting", Color::Yellow),
        MarketView::Failed(_) => ("offline ✗", Color::Red),
        MarketView::Ready(_) => ("connected ✓", Color::Green),
    };

    let left_text = vec![
        Span::styled("Scalar Market Terminal", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" - "),
        Span::styled(state_text, Style::default().fg(state_color)),
    ];
    let left_paragraph = Paragraph::new(Line::from(left_text))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(left_paragraph, header_chunks[0]);

    let right_paragraph = Paragraph::new(app.base_url.as_str())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right_paragraph, header_chunks[1]);
}

fn draw_main_content(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),  // Market info
            Constraint::Percentage(50),  // Order form
        ])
        .split(area);

    if let Some(snapshot) = app.snapshot() {
        draw_market_info(f, chunks[0], snapshot, &app.countdown);
    }
    draw_order_form(f, chunks[1], app);
}

fn draw_notice(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let notice = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(notice, centered_rect(60, 40, area));
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
