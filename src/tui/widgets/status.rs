use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::state::TuiState;

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &TuiState) {
    let status_text = if let Some(message) = &state.status_message {
        message.clone()
    } else {
        "F1 help | F2 port | F3 baud | F4 echo | F5 active | F6 hex | F7 clear | Esc quit"
            .to_string()
    };

    let status_style = if state.status_message.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let status = Paragraph::new(Line::from(vec![Span::styled(status_text, status_style)]));

    f.render_widget(status, area);
}
