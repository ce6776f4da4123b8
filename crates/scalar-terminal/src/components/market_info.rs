use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use scalar_core::{Countdown, MarketSnapshot, Urgency};

pub fn draw_market_info(f: &mut Frame, area: Rect, snapshot: &MarketSnapshot, countdown: &Countdown) {
    let block = Block::default()
        .title(format!(" {} ", snapshot.id))
        .borders(Borders::ALL);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Title + description
            Constraint::Length(3),  // Prices
            Constraint::Min(4),     // Details
        ])
        .split(inner);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            snapshot.title.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            snapshot.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(heading, chunks[0]);

    let price_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let mark = Paragraph::new(vec![
        Line::from("Market Price"),
        Line::from(Span::styled(
            format_price(snapshot.mark_price),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(mark, price_chunks[0]);

    let oracle = Paragraph::new(vec![
        Line::from("Oracle Price"),
        Line::from(Span::styled(
            format_price(snapshot.oracle_price),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(oracle, price_chunks[1]);

    let details = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Range:     "),
            Span::raw(format!("${} - ${}", snapshot.range.min, snapshot.range.max)),
        ]),
        Line::from(vec![
            Span::raw("Expiry:    "),
            Span::styled(countdown.label().to_string(), urgency_style(countdown.urgency())),
        ]),
        Line::from(vec![
            Span::raw("Tick Size: "),
            Span::raw(snapshot.range.tick_size.to_string()),
        ]),
        Line::from(vec![
            Span::raw("Currency:  "),
            Span::raw(snapshot.currency.as_str()),
        ]),
    ]);
    f.render_widget(details, chunks[2]);
}

fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

fn urgency_style(urgency: Urgency) -> Style {
    match urgency {
        Urgency::Danger => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Urgency::Warning => Style::default().fg(Color::Yellow),
        Urgency::Neutral => Style::default().fg(Color::White),
    }
}
