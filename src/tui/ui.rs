use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{
    app::Coordinator,
    state::{InputFocus, TuiState},
    widgets::{
        console::render_console, help::render_help_popup, leds::render_led_row,
        status::render_status_bar,
    },
};

pub fn draw_ui(f: &mut Frame, state: &mut TuiState, coordinator: &Coordinator) {
    let size = f.size();
    state.terminal_size = (size.width, size.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: title + LEDs
            Constraint::Min(0),    // Console
            Constraint::Length(3), // Send line / baud entry
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    render_header(f, chunks[0], coordinator);
    render_console(f, chunks[1], coordinator.console());
    render_input_line(f, chunks[2], state, coordinator);
    render_status_bar(f, chunks[3], state);

    if state.show_help {
        render_help_popup(f, size);
    }
}

fn render_header(f: &mut Frame, area: Rect, coordinator: &Coordinator) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            coordinator.window_title().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("  {} baud", coordinator.baud_rate()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_led_row(
        f,
        chunks[1],
        coordinator.is_enabled(),
        coordinator.rx_lit(),
        coordinator.tx_lit(),
        coordinator.echo(),
    );
}

fn render_input_line(f: &mut Frame, area: Rect, state: &TuiState, coordinator: &Coordinator) {
    let (title, content) = match state.focus {
        InputFocus::SendLine => ("Send", coordinator.send_line().to_string()),
        InputFocus::Baud => ("Baud rate", state.baud_text.clone()),
    };

    let style = if coordinator.is_enabled() || state.focus == InputFocus::Baud {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(Line::from(vec![
        Span::raw(content),
        Span::styled("█", Style::default().fg(Color::Gray)),
    ]))
    .style(style)
    .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(input, area);
}
