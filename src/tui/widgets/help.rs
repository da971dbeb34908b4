use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_help_popup(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 60, area);

    let lines = vec![
        Line::from("PropTerm keys"),
        Line::from(""),
        Line::from("  type     edit the send line"),
        Line::from("  Enter    send line + carriage return"),
        Line::from("  F1       toggle this help"),
        Line::from("  F2       cycle serial port"),
        Line::from("  F3       enter baud rate (Enter applies)"),
        Line::from("  F4       toggle local echo"),
        Line::from("  F5       toggle active (pause/resume)"),
        Line::from("  F6       toggle hex display"),
        Line::from("  F7       clear console"),
        Line::from("  Esc      quit"),
    ];

    let help = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("Help"));

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
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
