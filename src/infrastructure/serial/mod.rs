// Serial module - serialport-backed session and registry
pub mod registry;
pub mod session;

pub use registry::{PortListWatcher, SerialPortRegistry};
pub use session::SerialSession;
