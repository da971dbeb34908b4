// Coordinator module - Terminal session coordination
pub mod coordinator;
pub mod diag;
pub mod indicator;
pub mod traits;

pub use coordinator::TerminalCoordinator;
pub use diag::StderrDiagnostics;
pub use indicator::ActivityIndicator;
pub use traits::{ConsoleView, Diagnostics, PortRegistry, Session, SessionEvent};
