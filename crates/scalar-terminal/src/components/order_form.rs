use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use scalar_core::{Direction, SubmitState};

use crate::app::{App, InputMode};
use crate::form::Field;

pub fn draw_order_form(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(app.form.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = app.form.rows();
    let mut constraints: Vec<Constraint> = rows.iter().map(|_| Constraint::Length(2)).collect();
    constraints.push(Constraint::Length(3)); // Submit button
    constraints.push(Constraint::Min(2));    // Result
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints(constraints)
        .split(inner);

    let focused = app.focused_field();
    for (i, field) in rows.iter().copied().enumerate() {
        let line = field_line(app, field, field == focused);
        let widget = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(widget, chunks[i]);
    }

    draw_submit_button(f, chunks[rows.len()], app, focused == Field::Submit);
    draw_result(f, chunks[rows.len() + 1], app);
}

fn field_line(app: &App, field: Field, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut spans = vec![Span::styled(format!("{}: ", field.label()), label_style)];

    match field {
        Field::Direction => {
            let current = app.form.direction();
            spans.push(direction_span(Direction::Long, current));
            spans.push(Span::raw(" "));
            spans.push(direction_span(Direction::Short, current));
        }
        Field::Leverage => {
            spans.push(Span::styled("◀ ", Style::default().fg(Color::Gray)));
            spans.push(Span::styled(app.form.leverage_label(), Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(" ▶", Style::default().fg(Color::Gray)));
        }
        _ if focused && matches!(app.input_mode, InputMode::Editing) => {
            spans.push(Span::styled(app.input_buffer.clone(), Style::default().fg(Color::Yellow)));
            spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        _ => {
            let value = app.form.value(field).map(|v| v.to_string()).unwrap_or_default();
            let style = if app.form.is_read_only(field) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Cyan)
            };
            spans.push(Span::styled(value, style));
            if app.form.is_read_only(field) {
                spans.push(Span::styled(" (derived)", Style::default().fg(Color::DarkGray)));
            }
        }
    }

    Line::from(spans)
}

fn direction_span(direction: Direction, current: Direction) -> Span<'static> {
    let (text, color) = match direction {
        Direction::Long => ("Long", Color::Green),
        Direction::Short => ("Short", Color::Red),
    };
    if direction == current {
        Span::styled(
            format!("[{text}]"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {text} "), Style::default().fg(Color::Gray))
    }
}

fn draw_submit_button(f: &mut Frame, area: Rect, app: &App, focused: bool) {
    let in_flight = app.form.state() == SubmitState::Submitting;
    let style = if in_flight {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let button = Paragraph::new(app.form.submit_label())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn draw_result(f: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.form.result() else {
        return;
    };
    let color = if result.is_error() { Color::Red } else { Color::Green };

    let widget = Paragraph::new(result.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}
