use crate::cli::args::OutputFormat;
use serde::Serialize;
use std::io;
use tabled::{Table, Tabled};

/// One enumerated serial port, ready for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct PortDetail {
    #[tabled(rename = "Port")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub port_type: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::PropTermError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn write_ports(&self, ports: &[PortDetail]) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                if ports.is_empty() {
                    println!("No serial ports found");
                }
                for port in ports {
                    println!("{} ({})", port.name, port.port_type);
                    if !port.description.is_empty() {
                        println!("  {}", port.description);
                    }
                }
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(ports)?;
                println!("{}", output);
            }
            OutputFormat::Table => {
                if !ports.is_empty() {
                    let table = Table::new(ports);
                    println!("{}", table);
                }
            }
            OutputFormat::Csv => {
                println!("name,type,description");
                for port in ports {
                    println!("{},{},{}", port.name, port.port_type, port.description);
                }
            }
        }
        Ok(())
    }

    pub fn write_message(&self, message: &str) -> Result<(), OutputError> {
        println!("{}", message);
        Ok(())
    }

    pub fn write_error(&self, error: &str) -> Result<(), OutputError> {
        eprintln!("Error: {}", error);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ports() -> Vec<PortDetail> {
        vec![PortDetail {
            name: "/dev/ttyUSB0".to_string(),
            port_type: "USB".to_string(),
            description: "FTDI adapter".to_string(),
        }]
    }

    #[test]
    fn test_json_serialization() {
        let ports = sample_ports();
        let json = serde_json::to_string(&ports).unwrap();
        assert!(json.contains("/dev/ttyUSB0"));
        assert!(json.contains("FTDI adapter"));
    }

    #[test]
    fn test_all_formats_write_cleanly() {
        let ports = sample_ports();
        for format in [
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Table,
            OutputFormat::Csv,
        ] {
            let writer = ConsoleWriter::new(format);
            assert!(writer.write_ports(&ports).is_ok());
        }
    }
}
