use std::collections::VecDeque;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::coordinator::traits::ConsoleView;

/// How many terminated lines the console retains.
const MAX_LINES: usize = 2000;

/// Scrollback console buffer.
///
/// Bytes are split into lines on CR/LF; the raw bytes are kept so the hex
/// display mode can show exactly what came off the wire.
#[derive(Debug, Default)]
pub struct ConsoleBuffer {
    lines: VecDeque<Vec<u8>>,
    current: Vec<u8>,
    enabled: bool,
    hex_mode: bool,
}

impl ConsoleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn hex_mode(&self) -> bool {
        self.hex_mode
    }

    pub fn set_hex_mode(&mut self, hex_mode: bool) {
        self.hex_mode = hex_mode;
    }

    fn push_line(&mut self) {
        let line = std::mem::take(&mut self.current);
        self.lines.push_back(line);
        while self.lines.len() > MAX_LINES {
            self.lines.pop_front();
        }
    }

    fn render_line(&self, raw: &[u8]) -> String {
        if self.hex_mode {
            hex::encode_upper(raw)
                .as_bytes()
                .chunks(2)
                .map(|pair| std::str::from_utf8(pair).unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            String::from_utf8_lossy(raw).into_owned()
        }
    }

    /// Visible tail of the buffer, newest last.
    pub fn tail(&self, rows: usize) -> Vec<String> {
        let partial = usize::from(!self.current.is_empty());
        let mut out: Vec<String> = Vec::with_capacity(rows.min(self.lines.len() + partial));
        let skip = (self.lines.len() + partial).saturating_sub(rows);

        for raw in self.lines.iter().skip(skip.min(self.lines.len())) {
            out.push(self.render_line(raw));
        }
        if partial == 1 && out.len() < rows {
            out.push(self.render_line(&self.current));
        }
        out
    }
}

impl ConsoleView for ConsoleBuffer {
    fn put_data(&mut self, data: &[u8]) {
        for &byte in data {
            match byte {
                b'\r' | b'\n' => self.push_line(),
                _ => self.current.push(byte),
            }
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.current.clear();
    }

    fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

pub fn render_console(f: &mut Frame, area: Rect, console: &ConsoleBuffer) {
    let inner_rows = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = console
        .tail(inner_rows)
        .into_iter()
        .map(Line::from)
        .collect();

    let style = if console.is_enabled() {
        Style::default().fg(Color::White)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };

    let title = if console.hex_mode() {
        "Console (hex)"
    } else {
        "Console"
    };

    let paragraph = Paragraph::new(lines)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_data_splits_on_cr() {
        let mut console = ConsoleBuffer::new();
        console.put_data(b"AT\rOK\r");
        assert_eq!(console.tail(10), vec!["AT".to_string(), "OK".to_string()]);
    }

    #[test]
    fn test_partial_line_is_visible() {
        let mut console = ConsoleBuffer::new();
        console.put_data(b"prompt> ");
        assert_eq!(console.tail(10), vec!["prompt> ".to_string()]);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut console = ConsoleBuffer::new();
        console.put_data(b"one\rtwo");
        console.clear();
        assert!(console.tail(10).is_empty());
    }

    #[test]
    fn test_hex_mode_rendering() {
        let mut console = ConsoleBuffer::new();
        console.set_hex_mode(true);
        console.put_data(&[0x41, 0x54, 0x0D]);
        assert_eq!(console.tail(10), vec!["41 54".to_string()]);
    }

    #[test]
    fn test_scrollback_is_bounded() {
        let mut console = ConsoleBuffer::new();
        for _ in 0..(MAX_LINES + 100) {
            console.put_data(b"x\r");
        }
        assert_eq!(console.tail(usize::MAX).len(), MAX_LINES);
    }
}
