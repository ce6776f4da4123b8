// crates/scalar-terminal/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (msg, style) = match (&app.hint, app.input_mode) {
        (Some(hint), InputMode::Normal) => (
            Line::from(Span::styled(hint.clone(), Style::default().fg(Color::Red))),
            Style::default().fg(Color::Red),
        ),
        (_, InputMode::Normal) => {
            let shortcuts = vec![
                Span::styled("[Tab]", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw("Field "),
                Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
                Span::raw("Edit "),
                Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
                Span::raw("Adjust "),
                Span::styled("[L]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("ong "),
                Span::styled("[S]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw("hort "),
                Span::styled("[O]", Style::default().fg(Color::Yellow)),
                Span::raw("rder "),
                Span::styled("[Q]", Style::default().fg(Color::Gray)),
                Span::raw("uit"),
            ];
            (Line::from(shortcuts), Style::default())
        }
        (_, InputMode::Editing) => {
            let input = vec![
                Span::raw(format!("{}: ", app.focused_field().label())),
                Span::styled(app.input_buffer.clone(), Style::default().fg(Color::Yellow)),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
                Span::raw(" [Enter] Apply [Esc] Cancel"),
            ];
            (Line::from(input), Style::default().fg(Color::Yellow))
        }
    };

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
