//! PropTerm Library
//!
//! Serial terminal for microcontroller development. The core is the
//! [`TerminalCoordinator`], which mediates between a serial session, the
//! port registry and the console view; the TUI and CLI are thin surfaces
//! over it.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use crate::core::coordinator::{
    ActivityIndicator, ConsoleView, Diagnostics, PortRegistry, Session, SessionEvent,
    StderrDiagnostics, TerminalCoordinator,
};
pub use crate::domain::config::PropTermConfig;
pub use crate::domain::error::{PropTermError, PropTermResult};
pub use crate::infrastructure::serial::{SerialPortRegistry, SerialSession};
