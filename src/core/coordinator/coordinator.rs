use std::time::{Duration, Instant};

use tracing::debug;

use super::indicator::ActivityIndicator;
use super::traits::{ConsoleView, Diagnostics, PortRegistry, Session};

/// Carriage return appended to every submitted send line.
const SEND_LINE_TERMINATOR: u8 = 0x0D;

/// Mediator between a serial session, the port registry and the console.
///
/// Reacts to registry/session events and user actions, one at a time, and
/// owns only presentation state: the two activity lights, the enabled and
/// echo flags, the displayed port list, and the send-line buffer. All real
/// serial work stays inside the [`Session`] implementation.
pub struct TerminalCoordinator<S, R, C, D> {
    session: S,
    registry: R,
    console: C,
    diagnostics: D,

    title: String,
    window_title: String,
    ports: Vec<String>,
    baud_rate: u32,
    enabled: bool,
    echo: bool,
    send_line: String,
    rx_indicator: ActivityIndicator,
    tx_indicator: ActivityIndicator,
}

impl<S, R, C, D> TerminalCoordinator<S, R, C, D>
where
    S: Session,
    R: PortRegistry,
    C: ConsoleView,
    D: Diagnostics,
{
    pub fn new(
        session: S,
        registry: R,
        console: C,
        diagnostics: D,
        title: impl Into<String>,
        indicator_hold: Duration,
    ) -> Self {
        let title = title.into();
        let mut coordinator = Self {
            session,
            registry,
            console,
            diagnostics,
            window_title: title.clone(),
            title,
            ports: Vec::new(),
            baud_rate: 0,
            enabled: false,
            echo: true,
            send_line: String::new(),
            rx_indicator: ActivityIndicator::new(indicator_hold),
            tx_indicator: ActivityIndicator::new(indicator_hold),
        };
        coordinator.update_ports();
        coordinator.console.clear();
        coordinator
    }

    /// Replace the displayed port list with the registry's current list.
    pub fn update_ports(&mut self) {
        self.ports = self.registry.list_ports();
        debug!("port list updated: {} ports", self.ports.len());
    }

    /// Push a port selection to the session and retitle the window.
    pub fn select_port(&mut self, name: &str) {
        debug!("port {}", name);
        self.session.set_port_name(name);
        self.window_title = format!("{} - {}", self.session.port_name(), self.title);
    }

    /// Parse baud-rate text and push it to the session. Malformed or zero
    /// input is reported on the diagnostic channel and otherwise ignored;
    /// the prior rate stays in effect.
    pub fn set_baud_text(&mut self, text: &str) {
        let baud = match text.trim().parse::<u32>() {
            Ok(baud) if baud > 0 => baud,
            _ => {
                self.diagnostics
                    .error(&format!("Baud rate invalid: {}", text));
                return;
            }
        };

        self.baud_rate = baud;
        self.session.set_baud_rate(baud);
        debug!("new baud rate: {}", baud);
    }

    /// Device is free: enable input, reapply port and baud configuration,
    /// unpause the session.
    pub fn open(&mut self) {
        self.console.enable(true);
        self.enabled = true;

        let port = self.session.port_name().to_string();
        if !port.is_empty() {
            self.select_port(&port);
        }
        self.session.unpause();
        if self.baud_rate > 0 {
            self.session.set_baud_rate(self.baud_rate);
        }
        debug!("terminal opened");
    }

    /// Device is busy or the terminal is shutting down: disable input,
    /// turn both lights off, pause the session.
    pub fn close(&mut self) {
        self.console.enable(false);
        self.enabled = false;
        self.rx_indicator.unlight();
        self.tx_indicator.unlight();
        self.session.pause();
        debug!("terminal closed");
    }

    /// Drain received bytes into the console, lighting the receive
    /// indicator.
    pub fn read_data(&mut self, now: Instant) {
        self.rx_indicator.light(now);
        let data = self.session.read_all();
        self.console.put_data(&data);
    }

    /// Write bytes to the session, lighting the transmit indicator and
    /// echoing to the console when echo is on. Rejected while disabled.
    pub fn write_data(&mut self, data: &[u8], now: Instant) {
        if !self.enabled {
            debug!("write of {} bytes dropped: terminal disabled", data.len());
            return;
        }

        self.tx_indicator.light(now);

        if let Err(e) = self.session.write(data) {
            self.diagnostics.error(&format!("write failed: {}", e));
            self.close();
            return;
        }

        if self.echo {
            self.console.put_data(data);
        }
    }

    /// Submit the send line: encode it, append a carriage return, write,
    /// then clear the line.
    pub fn submit_send_line(&mut self, now: Instant) {
        let mut data = std::mem::take(&mut self.send_line).into_bytes();
        data.push(SEND_LINE_TERMINATOR);
        self.write_data(&data, now);
    }

    /// Active toggle: checked opens the terminal, unchecked closes it.
    pub fn handle_enable(&mut self, checked: bool) {
        if checked {
            self.open();
        } else {
            self.close();
        }
    }

    /// Expire any due indicator deadlines.
    pub fn tick(&mut self, now: Instant) {
        self.rx_indicator.tick(now);
        self.tx_indicator.tick(now);
    }

    pub fn input_char(&mut self, c: char) {
        self.send_line.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.send_line.pop();
    }

    pub fn clear_console(&mut self) {
        self.console.clear();
    }

    pub fn rx_lit(&self) -> bool {
        self.rx_indicator.is_lit()
    }

    pub fn tx_lit(&self) -> bool {
        self.tx_indicator.is_lit()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn echo(&self) -> bool {
        self.echo
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    pub fn ports(&self) -> &[String] {
        &self.ports
    }

    pub fn send_line(&self) -> &str {
        &self.send_line
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn session(&self) -> &S {
        &self.session
    }
}
