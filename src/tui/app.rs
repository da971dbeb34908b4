use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::{
    core::coordinator::{SessionEvent, StderrDiagnostics, TerminalCoordinator},
    domain::{config::PropTermConfig, error::PropTermError},
    infrastructure::serial::{PortListWatcher, SerialPortRegistry, SerialSession},
};

use super::{
    state::{InputFocus, TuiState},
    ui::draw_ui,
    widgets::console::ConsoleBuffer,
};

/// The coordinator as wired for the real TUI.
pub type Coordinator =
    TerminalCoordinator<SerialSession, SerialPortRegistry, ConsoleBuffer, StderrDiagnostics>;

pub struct App {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    coordinator: Coordinator,
    session_events: mpsc::UnboundedReceiver<SessionEvent>,
    watcher: PortListWatcher,
    state: TuiState,
    should_quit: bool,
    last_tick: Instant,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &PropTermConfig) -> Result<Self, PropTermError> {
        // Setup terminal
        enable_raw_mode().map_err(|e| PropTermError::Tui(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| PropTermError::Tui(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| PropTermError::Tui(e.to_string()))?;

        let (event_sender, session_events) = mpsc::unbounded_channel();
        let session = SerialSession::new(config.terminal.clone(), event_sender);
        let registry = SerialPortRegistry::new();
        let watcher = PortListWatcher::spawn(
            registry.clone(),
            Duration::from_millis(config.global.registry_poll_ms),
        );

        let mut coordinator = TerminalCoordinator::new(
            session,
            registry,
            ConsoleBuffer::new(),
            StderrDiagnostics,
            "Propeller Terminal",
            Duration::from_millis(config.global.indicator_ms),
        );
        coordinator.set_echo(config.terminal.echo);

        // Configured port, or the first one the registry knows about
        let port = if config.terminal.port.is_empty() {
            coordinator.ports().first().cloned()
        } else {
            Some(config.terminal.port.clone())
        };
        if let Some(port) = port {
            coordinator.select_port(&port);
        }
        coordinator.set_baud_text(&config.terminal.baud_rate.to_string());
        coordinator.open();

        let mut state = TuiState::new();
        if coordinator.ports().is_empty() {
            state.set_status_message("No serial ports found".to_string());
        }

        Ok(Self {
            terminal,
            coordinator,
            session_events,
            watcher,
            state,
            should_quit: false,
            last_tick: Instant::now(),
            tick_rate: Duration::from_millis(config.global.tick_rate_ms),
        })
    }

    pub async fn run(&mut self) -> Result<(), PropTermError> {
        loop {
            // Handle input
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                if let Ok(event) = event::read() {
                    match event {
                        Event::Key(key) => self.handle_key_event(key),
                        Event::Resize(width, height) => {
                            self.state.terminal_size = (width, height);
                        }
                        _ => {}
                    }
                }
            }

            // Session and registry events
            self.drain_events();

            // Tick
            if self.last_tick.elapsed() >= self.tick_rate {
                self.coordinator.tick(Instant::now());
                self.last_tick = Instant::now();
            }

            // Draw UI
            self.terminal
                .draw(|f| draw_ui(f, &mut self.state, &self.coordinator))
                .map_err(|e| PropTermError::Tui(e.to_string()))?;

            if self.should_quit {
                break;
            }
        }

        self.coordinator.close();
        Ok(())
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.session_events.try_recv() {
            match event {
                SessionEvent::ReadyRead => self.coordinator.read_data(Instant::now()),
                SessionEvent::DeviceFree => self.coordinator.open(),
                SessionEvent::DeviceBusy => self.coordinator.close(),
                SessionEvent::Failed(reason) => {
                    self.state
                        .set_status_message(format!("Session failed: {}", reason));
                    self.coordinator.close();
                }
            }
        }

        if self.watcher.try_changed().is_some() {
            self.coordinator.update_ports();
            let count = self.coordinator.ports().len();
            if self.state.selected_port >= count {
                self.state.selected_port = 0;
            }
            self.state
                .set_status_message(format!("Port list changed: {} ports", count));
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        self.state.clear_status_message();

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.state.show_help {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
                self.state.toggle_help();
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => self.state.toggle_help(),
            KeyCode::Esc => {
                if self.state.focus == InputFocus::Baud {
                    self.state.focus = InputFocus::SendLine;
                    self.state.baud_text.clear();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::F(2) => self.cycle_port(),
            KeyCode::F(3) => {
                self.state.focus = InputFocus::Baud;
                self.state.baud_text = self.coordinator.baud_rate().to_string();
            }
            KeyCode::F(4) => {
                let echo = !self.coordinator.echo();
                self.coordinator.set_echo(echo);
                self.state
                    .set_status_message(format!("Echo {}", if echo { "on" } else { "off" }));
            }
            KeyCode::F(5) => {
                let active = !self.coordinator.is_enabled();
                self.coordinator.handle_enable(active);
                self.state.set_status_message(
                    if active { "Terminal active" } else { "Terminal paused" }.to_string(),
                );
            }
            KeyCode::F(6) => {
                let hex = !self.coordinator.console().hex_mode();
                self.coordinator.console_mut().set_hex_mode(hex);
            }
            KeyCode::F(7) => self.coordinator.clear_console(),
            KeyCode::Enter => match self.state.focus {
                InputFocus::SendLine => self.coordinator.submit_send_line(Instant::now()),
                InputFocus::Baud => {
                    let text = std::mem::take(&mut self.state.baud_text);
                    self.coordinator.set_baud_text(&text);
                    self.state.focus = InputFocus::SendLine;
                    self.state
                        .set_status_message(format!("Baud rate: {}", self.coordinator.baud_rate()));
                }
            },
            KeyCode::Backspace => match self.state.focus {
                InputFocus::SendLine => self.coordinator.input_backspace(),
                InputFocus::Baud => {
                    self.state.baud_text.pop();
                }
            },
            KeyCode::Char(c) => match self.state.focus {
                InputFocus::SendLine => self.coordinator.input_char(c),
                InputFocus::Baud => self.state.baud_text.push(c),
            },
            _ => {}
        }
    }

    fn cycle_port(&mut self) {
        let ports = self.coordinator.ports().to_vec();
        if ports.is_empty() {
            self.state
                .set_status_message("No serial ports found".to_string());
            return;
        }

        self.state.selected_port = (self.state.selected_port + 1) % ports.len();
        let port = &ports[self.state.selected_port];
        self.coordinator.select_port(port);
        self.state.set_status_message(format!("Port: {}", port));
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
