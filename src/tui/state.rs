/// Where typed characters currently land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputFocus {
    /// Default: characters edit the send line.
    SendLine,
    /// Characters edit the baud-rate text, applied on Enter.
    Baud,
}

/// View-only TUI state; everything with behavior lives in the coordinator.
#[derive(Debug)]
pub struct TuiState {
    pub focus: InputFocus,
    pub baud_text: String,
    pub selected_port: usize,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub terminal_size: (u16, u16),
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: InputFocus::SendLine,
            baud_text: String::new(),
            selected_port: 0,
            status_message: None,
            show_help: false,
            terminal_size: (80, 24),
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}
