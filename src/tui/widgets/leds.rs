use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Indicator LED row: active (green), receive (red), transmit (blue),
/// mirroring the hardware-terminal light convention.
pub fn render_led_row(
    f: &mut Frame,
    area: Rect,
    enabled: bool,
    rx_lit: bool,
    tx_lit: bool,
    echo: bool,
) {
    let led = |lit: bool, on_color: Color| {
        Style::default().fg(if lit { on_color } else { Color::DarkGray })
    };

    let line = Line::from(vec![
        Span::styled("● ", led(enabled, Color::Green)),
        Span::raw("active  "),
        Span::styled("● ", led(rx_lit, Color::Red)),
        Span::raw("rx  "),
        Span::styled("● ", led(tx_lit, Color::Blue)),
        Span::raw("tx  "),
        Span::styled(
            if echo { "echo on" } else { "echo off" },
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
