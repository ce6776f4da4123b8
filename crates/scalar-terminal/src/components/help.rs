// crates/scalar-terminal/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const SHORTCUTS: &[(&str, &str, Color)] = &[
    ("Tab / ↓ / j", " - Next Field", Color::Blue),
    ("Shift+Tab / ↑ / k", " - Previous Field", Color::Blue),
    ("Enter", " - Edit Field / Flip Direction / Submit", Color::Cyan),
    ("Esc", " - Discard Edit / Close Help", Color::Gray),
    ("←/→", " - Adjust Leverage or Direction", Color::Cyan),
    ("L/l", " - Long", Color::Green),
    ("S/s", " - Short", Color::Red),
    ("O/o", " - Submit (or Cancel Open Order)", Color::Yellow),
    ("F1", " - Toggle Help", Color::Gray),
    ("Q/q", " - Quit", Color::Red),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items: Vec<ListItem> = SHORTCUTS
        .iter()
        .map(|(keys, action, color)| {
            ListItem::new(Line::from(vec![
                Span::styled(*keys, Style::default().fg(*color).add_modifier(Modifier::BOLD)),
                Span::raw(*action),
            ]))
        })
        .collect();

    let help_list = List::new(help_items)
        .block(Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(help_list, area);

    let footer = Paragraph::new("Press F1 or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
