use crate::cli::args::{Args, Command};
use crate::cli::output::{ConsoleWriter, PortDetail};
use crate::domain::error::{PropTermError, PropTermResult};
use serialport::SerialPortType;

/// Execute a non-interactive CLI command.
pub async fn execute_command(args: Args) -> PropTermResult<()> {
    let writer = ConsoleWriter::new(args.output.clone());

    match args.command {
        Some(Command::Ports) => {
            let ports = enumerate_ports()?;
            writer.write_ports(&ports)?;
            Ok(())
        }
        Some(Command::Version) => {
            writer.write_message(&format!("propterm {}", env!("CARGO_PKG_VERSION")))?;
            Ok(())
        }
        Some(Command::Tui) | None => Err(PropTermError::Tui(
            "interactive mode is dispatched from main".to_string(),
        )),
    }
}

fn enumerate_ports() -> PropTermResult<Vec<PortDetail>> {
    let mut ports: Vec<PortDetail> = serialport::available_ports()?
        .into_iter()
        .map(|info| {
            let (port_type, description) = match info.port_type {
                SerialPortType::UsbPort(usb) => (
                    "USB".to_string(),
                    usb.product.unwrap_or_else(|| {
                        format!("{:04x}:{:04x}", usb.vid, usb.pid)
                    }),
                ),
                SerialPortType::BluetoothPort => ("Bluetooth".to_string(), String::new()),
                SerialPortType::PciPort => ("PCI".to_string(), String::new()),
                SerialPortType::Unknown => ("Unknown".to_string(), String::new()),
            };
            PortDetail {
                name: info.port_name,
                port_type,
                description,
            }
        })
        .collect();

    ports.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(ports)
}
