use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use proptest::prelude::*;
use propterm::{
    ConsoleView, Diagnostics, PortRegistry, PropTermResult, Session, TerminalCoordinator,
};

/// Coordinator behavior tests against mock collaborators
#[derive(Debug, Default)]
struct RecordingSession {
    port: String,
    baud: u32,
    paused: bool,
    writes: Vec<Vec<u8>>,
    pending: Rc<RefCell<Vec<u8>>>,
}

impl Session for RecordingSession {
    fn set_port_name(&mut self, name: &str) {
        self.port = name.to_string();
    }

    fn set_baud_rate(&mut self, baud: u32) {
        self.baud = baud;
    }

    fn write(&mut self, data: &[u8]) -> PropTermResult<()> {
        self.writes.push(data.to_vec());
        Ok(())
    }

    fn read_all(&mut self) -> Vec<u8> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn unpause(&mut self) {
        self.paused = false;
    }

    fn port_name(&self) -> &str {
        &self.port
    }
}

struct FixedRegistry(Vec<String>);

impl PortRegistry for FixedRegistry {
    fn list_ports(&self) -> Vec<String> {
        self.0.clone()
    }
}

#[derive(Debug, Default)]
struct RecordingConsole {
    output: Vec<u8>,
    enabled: bool,
}

impl ConsoleView for RecordingConsole {
    fn put_data(&mut self, data: &[u8]) {
        self.output.extend_from_slice(data);
    }

    fn clear(&mut self) {
        self.output.clear();
    }

    fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[derive(Debug, Default)]
struct CountingDiagnostics {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Diagnostics for CountingDiagnostics {
    fn message(&mut self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }

    fn error(&mut self, text: &str) {
        self.lines.borrow_mut().push(format!("ERROR: {}", text));
    }
}

type TestCoordinator =
    TerminalCoordinator<RecordingSession, FixedRegistry, RecordingConsole, CountingDiagnostics>;

struct Fixture {
    coordinator: TestCoordinator,
    pending: Rc<RefCell<Vec<u8>>>,
    diag_lines: Rc<RefCell<Vec<String>>>,
}

fn fixture() -> Fixture {
    let pending = Rc::new(RefCell::new(Vec::new()));
    let diag_lines = Rc::new(RefCell::new(Vec::new()));

    let session = RecordingSession {
        pending: Rc::clone(&pending),
        ..RecordingSession::default()
    };
    let diagnostics = CountingDiagnostics {
        lines: Rc::clone(&diag_lines),
    };

    let mut coordinator = TerminalCoordinator::new(
        session,
        FixedRegistry(vec!["/dev/ttyUSB0".to_string(), "/dev/ttyACM0".to_string()]),
        RecordingConsole::default(),
        diagnostics,
        "Propeller Terminal",
        Duration::from_millis(100),
    );
    coordinator.open();

    Fixture {
        coordinator,
        pending,
        diag_lines,
    }
}

#[test]
fn valid_baud_updates_session() {
    let mut fx = fixture();
    fx.coordinator.set_baud_text("250000");
    assert_eq!(fx.coordinator.session().baud, 250000);
}

#[test]
fn invalid_baud_keeps_rate_and_reports_once() {
    let mut fx = fixture();
    fx.coordinator.set_baud_text("115200");
    let lines_before = fx.diag_lines.borrow().len();

    fx.coordinator.set_baud_text("not-a-number");

    assert_eq!(fx.coordinator.session().baud, 115200);
    assert_eq!(fx.diag_lines.borrow().len(), lines_before + 1);
}

#[test]
fn receive_lights_indicator_until_hold_expires() {
    let mut fx = fixture();
    let now = Instant::now();

    fx.pending.borrow_mut().extend_from_slice(b"OK\r");
    fx.coordinator.read_data(now);

    assert!(fx.coordinator.rx_lit());
    assert_eq!(fx.coordinator.console().output, b"OK\r");

    fx.coordinator.tick(now + Duration::from_millis(99));
    assert!(fx.coordinator.rx_lit());

    fx.coordinator.tick(now + Duration::from_millis(100));
    assert!(!fx.coordinator.rx_lit());
}

#[test]
fn receive_restart_extends_hold() {
    let mut fx = fixture();
    let now = Instant::now();

    fx.coordinator.read_data(now);
    fx.coordinator.read_data(now + Duration::from_millis(90));

    fx.coordinator.tick(now + Duration::from_millis(150));
    assert!(fx.coordinator.rx_lit());

    fx.coordinator.tick(now + Duration::from_millis(190));
    assert!(!fx.coordinator.rx_lit());
}

#[test]
fn busy_terminal_refuses_writes() {
    let mut fx = fixture();
    fx.coordinator.close();

    fx.coordinator.write_data(b"AT", Instant::now());

    assert!(fx.coordinator.session().writes.is_empty());
    assert!(!fx.coordinator.tx_lit());
}

#[test]
fn send_line_appends_carriage_return_and_clears() {
    let mut fx = fixture();
    fx.coordinator.input_char('A');
    fx.coordinator.input_char('T');

    fx.coordinator.submit_send_line(Instant::now());

    assert_eq!(fx.coordinator.session().writes, vec![vec![b'A', b'T', 0x0D]]);
    assert_eq!(fx.coordinator.send_line(), "");
    assert!(fx.coordinator.tx_lit());
}

#[test]
fn echo_controls_console_copy() {
    let mut fx = fixture();

    fx.coordinator.set_echo(true);
    fx.coordinator.write_data(b"ping", Instant::now());
    assert_eq!(fx.coordinator.console().output, b"ping");

    fx.coordinator.clear_console();
    fx.coordinator.set_echo(false);
    fx.coordinator.write_data(b"ping", Instant::now());
    assert!(fx.coordinator.console().output.is_empty());
}

#[test]
fn port_selection_updates_title() {
    let mut fx = fixture();
    fx.coordinator.select_port("/dev/ttyACM0");
    assert_eq!(
        fx.coordinator.window_title(),
        "/dev/ttyACM0 - Propeller Terminal"
    );
}

#[test]
fn enable_toggle_round_trip() {
    let mut fx = fixture();

    fx.coordinator.handle_enable(false);
    assert!(!fx.coordinator.is_enabled());
    assert!(fx.coordinator.session().paused);
    assert!(!fx.coordinator.console().enabled);

    fx.coordinator.handle_enable(true);
    assert!(fx.coordinator.is_enabled());
    assert!(!fx.coordinator.session().paused);
    assert!(fx.coordinator.console().enabled);
}

#[test]
fn port_list_comes_from_registry_in_order() {
    let fx = fixture();
    assert_eq!(fx.coordinator.ports(), &["/dev/ttyUSB0", "/dev/ttyACM0"]);
}

proptest! {
    #[test]
    fn any_valid_baud_is_pushed(baud in 1u32..=4_000_000) {
        let mut fx = fixture();
        fx.coordinator.set_baud_text(&baud.to_string());
        prop_assert_eq!(fx.coordinator.session().baud, baud);
        prop_assert_eq!(fx.diag_lines.borrow().len(), 0);
    }

    #[test]
    fn any_non_numeric_baud_is_rejected(text in "[a-zA-Z !@#%]{1,12}") {
        let mut fx = fixture();
        fx.coordinator.set_baud_text("9600");
        fx.coordinator.set_baud_text(&text);
        prop_assert_eq!(fx.coordinator.session().baud, 9600);
        prop_assert_eq!(fx.diag_lines.borrow().len(), 1);
    }
}
