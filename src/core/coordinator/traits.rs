use crate::domain::error::PropTermResult;

/// One open serial connection's configuration and data transfer.
///
/// All methods are non-blocking; the concrete implementation is expected
/// to hand actual I/O to background tasks. Asynchronous conditions are
/// delivered out of band as [`SessionEvent`]s by the session's owner.
pub trait Session {
    /// Request a port change. Takes effect on the next (re)open.
    fn set_port_name(&mut self, name: &str);

    /// Request a baud rate change. Takes effect on the next (re)open.
    fn set_baud_rate(&mut self, baud: u32);

    /// Queue bytes for transmission.
    fn write(&mut self, data: &[u8]) -> PropTermResult<()>;

    /// Drain all bytes received since the last call. Never blocks.
    fn read_all(&mut self) -> Vec<u8>;

    /// Stop forwarding received bytes and reject writes.
    fn pause(&mut self);

    /// Resume forwarding and accepting writes.
    fn unpause(&mut self);

    /// Currently configured port name.
    fn port_name(&self) -> &str;
}

/// Events a session delivers to its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Received bytes are waiting to be drained with `read_all`.
    ReadyRead,
    /// The underlying device was claimed elsewhere or the port failed.
    DeviceBusy,
    /// The underlying device is available again.
    DeviceFree,
    /// Unrecoverable session failure.
    Failed(String),
}

/// Enumerator of available serial device identifiers.
pub trait PortRegistry {
    /// Current port list, in presentation order.
    fn list_ports(&self) -> Vec<String>;
}

/// Display surface for terminal output.
pub trait ConsoleView {
    fn put_data(&mut self, data: &[u8]);
    fn clear(&mut self);
    fn enable(&mut self, enabled: bool);
}

/// Local diagnostic channel for operator-visible notices.
pub trait Diagnostics {
    fn message(&mut self, text: &str);
    fn error(&mut self, text: &str);
}
