use crate::core::coordinator::traits::PortRegistry;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Port registry backed by the operating system's serial enumeration.
#[derive(Debug, Default, Clone)]
pub struct SerialPortRegistry;

impl SerialPortRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl PortRegistry for SerialPortRegistry {
    fn list_ports(&self) -> Vec<String> {
        match serialport::available_ports() {
            Ok(ports) => {
                let mut names: Vec<String> =
                    ports.into_iter().map(|info| info.port_name).collect();
                names.sort();
                names
            }
            Err(e) => {
                warn!("failed to enumerate serial ports: {}", e);
                Vec::new()
            }
        }
    }
}

/// Background watcher that polls the port list and reports changes.
pub struct PortListWatcher {
    change_receiver: mpsc::UnboundedReceiver<Vec<String>>,
    handle: tokio::task::JoinHandle<()>,
}

impl PortListWatcher {
    pub fn spawn(registry: SerialPortRegistry, poll_interval: Duration) -> Self {
        let (change_sender, change_receiver) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            let mut last = registry.list_ports();
            loop {
                tokio::time::sleep(poll_interval).await;
                let current = registry.list_ports();
                if current != last {
                    debug!("port list changed: {:?}", current);
                    last = current.clone();
                    if change_sender.send(current).is_err() {
                        break;
                    }
                }
            }
        });

        Self {
            change_receiver,
            handle,
        }
    }

    /// Next changed port list, if one arrived since the last poll.
    pub fn try_changed(&mut self) -> Option<Vec<String>> {
        self.change_receiver.try_recv().ok()
    }
}

impl Drop for PortListWatcher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_ports_is_sorted() {
        let ports = SerialPortRegistry::new().list_ports();
        let mut sorted = ports.clone();
        sorted.sort();
        assert_eq!(ports, sorted);
    }

    #[tokio::test]
    async fn test_watcher_starts_quiet() {
        let mut watcher =
            PortListWatcher::spawn(SerialPortRegistry::new(), Duration::from_millis(10));
        assert!(watcher.try_changed().is_none());
    }
}
