use crate::core::coordinator::traits::{Session, SessionEvent};
use crate::domain::config::{FlowControlConfig, ParityConfig, TerminalConfig};
use crate::domain::error::{PropTermError, PropTermResult};
use serialport::SerialPort;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Serial-port backed [`Session`].
///
/// The open port lives behind background rx/tx tasks; the trait methods
/// only touch channels and never block. Changing the port or baud rate
/// tears the link down and reopens it, reporting the outcome as
/// [`SessionEvent::DeviceFree`] or [`SessionEvent::DeviceBusy`] on the
/// event channel handed in at construction.
pub struct SerialSession {
    port_name: String,
    baud_rate: u32,
    settings: TerminalConfig,
    paused: Arc<AtomicBool>,
    event_sender: mpsc::UnboundedSender<SessionEvent>,
    link: Option<SerialLink>,
}

/// Live connection state: channels into the rx/tx tasks.
struct SerialLink {
    tx_sender: mpsc::UnboundedSender<Vec<u8>>,
    data_receiver: mpsc::UnboundedReceiver<Vec<u8>>,
    tx_handle: tokio::task::JoinHandle<()>,
    rx_handle: tokio::task::JoinHandle<()>,
}

impl SerialSession {
    pub fn new(
        settings: TerminalConfig,
        event_sender: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        Self {
            port_name: settings.port.clone(),
            baud_rate: settings.baud_rate,
            settings,
            paused: Arc::new(AtomicBool::new(true)),
            event_sender,
            link: None,
        }
    }

    /// Tear down any existing link and open the configured port. Failure
    /// is reported as `DeviceBusy`, success as `DeviceFree`.
    pub fn reopen(&mut self) {
        self.teardown();

        if self.port_name.is_empty() {
            debug!("no port configured, staying idle");
            return;
        }

        match self.open_link() {
            Ok(link) => {
                self.link = Some(link);
                let _ = self.event_sender.send(SessionEvent::DeviceFree);
            }
            Err(e) => {
                warn!("failed to open {}: {}", self.port_name, e);
                let _ = self.event_sender.send(SessionEvent::DeviceBusy);
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.link.is_some()
    }

    fn teardown(&mut self) {
        if let Some(link) = self.link.take() {
            link.tx_handle.abort();
            link.rx_handle.abort();
            debug!("serial link on {} torn down", self.port_name);
        }
    }

    fn open_link(&self) -> PropTermResult<SerialLink> {
        let builder = serialport::new(&self.port_name, self.baud_rate)
            .data_bits(match self.settings.data_bits {
                5 => serialport::DataBits::Five,
                6 => serialport::DataBits::Six,
                7 => serialport::DataBits::Seven,
                8 => serialport::DataBits::Eight,
                other => {
                    return Err(PropTermError::Session {
                        message: format!("Invalid data bits: {}", other),
                    })
                }
            })
            .stop_bits(match self.settings.stop_bits {
                1 => serialport::StopBits::One,
                2 => serialport::StopBits::Two,
                other => {
                    return Err(PropTermError::Session {
                        message: format!("Invalid stop bits: {}", other),
                    })
                }
            })
            .parity(match self.settings.parity {
                ParityConfig::None => serialport::Parity::None,
                ParityConfig::Even => serialport::Parity::Even,
                ParityConfig::Odd => serialport::Parity::Odd,
            })
            .flow_control(match self.settings.flow_control {
                FlowControlConfig::None => serialport::FlowControl::None,
                FlowControlConfig::Software => serialport::FlowControl::Software,
                FlowControlConfig::Hardware => serialport::FlowControl::Hardware,
            })
            .timeout(Duration::from_millis(100));

        let port = builder.open()?;
        let open_id = uuid::Uuid::new_v4().simple().to_string();
        info!(
            "opened {} at {} baud (link {})",
            self.port_name, self.baud_rate, open_id
        );

        let port: Arc<tokio::sync::Mutex<Box<dyn SerialPort>>> =
            Arc::new(tokio::sync::Mutex::new(port));
        let (tx_sender, mut tx_receiver) = mpsc::unbounded_channel::<Vec<u8>>();
        let (data_sender, data_receiver) = mpsc::unbounded_channel::<Vec<u8>>();

        let port_tx = Arc::clone(&port);
        let port_rx = Arc::clone(&port);
        let paused_rx = Arc::clone(&self.paused);
        let events_rx = self.event_sender.clone();
        let events_tx = self.event_sender.clone();

        // TX task - drains queued writes into the port
        let tx_handle = tokio::spawn(async move {
            while let Some(data) = tx_receiver.recv().await {
                let mut port = port_tx.lock().await;
                match port.write_all(&data) {
                    Ok(()) => debug!("sent {} bytes over serial", data.len()),
                    Err(e) => {
                        error!("failed to write to serial port: {}", e);
                        let _ = events_tx.send(SessionEvent::Failed(e.to_string()));
                        break;
                    }
                }
            }
        });

        // RX task - polls the port and forwards received bytes
        let rx_handle = tokio::spawn(async move {
            let mut buffer = vec![0u8; 1024];

            loop {
                tokio::time::sleep(Duration::from_millis(10)).await;

                let mut port = port_rx.lock().await;
                match port.read(&mut buffer) {
                    Ok(0) => continue,
                    Ok(n) => {
                        if paused_rx.load(Ordering::Relaxed) {
                            // Paused sessions discard traffic instead of
                            // queueing it for a later unpause.
                            continue;
                        }
                        debug!("received {} bytes over serial", n);
                        if data_sender.send(buffer[..n].to_vec()).is_err() {
                            break;
                        }
                        let _ = events_rx.send(SessionEvent::ReadyRead);
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::TimedOut => continue,
                    Err(e) => {
                        error!("failed to read from serial port: {}", e);
                        let _ = events_rx.send(SessionEvent::Failed(e.to_string()));
                        break;
                    }
                }
            }
        });

        Ok(SerialLink {
            tx_sender,
            data_receiver,
            tx_handle,
            rx_handle,
        })
    }
}

impl Session for SerialSession {
    fn set_port_name(&mut self, name: &str) {
        if self.port_name == name && self.link.is_some() {
            return;
        }
        self.port_name = name.to_string();
        self.reopen();
    }

    fn set_baud_rate(&mut self, baud: u32) {
        if self.baud_rate == baud && self.link.is_some() {
            return;
        }
        self.baud_rate = baud;
        if self.link.is_some() || !self.port_name.is_empty() {
            self.reopen();
        }
    }

    fn write(&mut self, data: &[u8]) -> PropTermResult<()> {
        if self.paused.load(Ordering::Relaxed) {
            debug!("write of {} bytes dropped: session paused", data.len());
            return Ok(());
        }

        let link = self.link.as_ref().ok_or_else(|| PropTermError::Session {
            message: "no open serial link".to_string(),
        })?;

        link.tx_sender
            .send(data.to_vec())
            .map_err(|e| PropTermError::Session {
                message: format!("serial tx channel closed: {}", e),
            })
    }

    fn read_all(&mut self) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(link) = self.link.as_mut() {
            while let Ok(chunk) = link.data_receiver.try_recv() {
                out.extend_from_slice(&chunk);
            }
        }
        out
    }

    fn pause(&mut self) {
        self.paused.store(true, Ordering::Relaxed);
    }

    fn unpause(&mut self) {
        self.paused.store(false, Ordering::Relaxed);
        if self.link.is_none() && !self.port_name.is_empty() {
            self.reopen();
        }
    }

    fn port_name(&self) -> &str {
        &self.port_name
    }
}

impl Drop for SerialSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings(port: &str) -> TerminalConfig {
        TerminalConfig {
            port: port.to_string(),
            ..TerminalConfig::default()
        }
    }

    #[tokio::test]
    async fn test_open_invalid_port_reports_busy() {
        let (event_sender, mut event_receiver) = mpsc::unbounded_channel();
        let mut session = SerialSession::new(test_settings("/dev/null"), event_sender);

        session.reopen();
        assert!(!session.is_open());
        assert!(matches!(
            event_receiver.try_recv(),
            Ok(SessionEvent::DeviceBusy)
        ));
    }

    #[tokio::test]
    async fn test_empty_port_stays_idle() {
        let (event_sender, mut event_receiver) = mpsc::unbounded_channel();
        let mut session = SerialSession::new(test_settings(""), event_sender);

        session.reopen();
        assert!(!session.is_open());
        assert!(event_receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_write_while_paused_is_dropped() {
        let (event_sender, _event_receiver) = mpsc::unbounded_channel();
        let mut session = SerialSession::new(test_settings("/dev/null"), event_sender);

        session.pause();
        // Paused writes are dropped silently, open link or not
        assert!(session.write(b"AT").is_ok());
    }

    #[tokio::test]
    async fn test_write_without_link_fails() {
        let (event_sender, _event_receiver) = mpsc::unbounded_channel();
        let mut session = SerialSession::new(test_settings(""), event_sender);

        session.unpause();
        assert!(session.write(b"AT").is_err());
    }

    #[tokio::test]
    async fn test_read_all_without_link_is_empty() {
        let (event_sender, _event_receiver) = mpsc::unbounded_channel();
        let mut session = SerialSession::new(test_settings(""), event_sender);
        assert!(session.read_all().is_empty());
    }

    #[tokio::test]
    async fn test_port_name_tracks_requests() {
        let (event_sender, _event_receiver) = mpsc::unbounded_channel();
        let mut session = SerialSession::new(test_settings(""), event_sender);

        session.set_port_name("/dev/ttyUSB0");
        assert_eq!(session.port_name(), "/dev/ttyUSB0");
    }
}
