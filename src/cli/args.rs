use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Command line arguments for PropTerm
#[derive(Parser, Debug)]
#[command(
    name = "propterm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serial terminal for microcontroller development",
    long_about = "A serial terminal with receive/transmit activity indicators, \
                  local echo, and live port tracking, aimed at microcontroller \
                  bring-up and debugging."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Serial port to open (overrides configuration)
    #[arg(short, long, global = true)]
    pub port: Option<String>,

    /// Baud rate (overrides configuration)
    #[arg(short, long, global = true)]
    pub baud: Option<u32>,

    /// Output format for listing commands
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Command to execute (defaults to the interactive terminal)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive terminal (default)
    Tui,
    /// List available serial ports
    Ports,
    /// Display version information
    Version,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let args = Args::parse_from(["propterm"]);
        assert!(args.command.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_port_and_baud_overrides() {
        let args = Args::parse_from(["propterm", "--port", "/dev/ttyUSB0", "--baud", "9600"]);
        assert_eq!(args.port.as_deref(), Some("/dev/ttyUSB0"));
        assert_eq!(args.baud, Some(9600));
    }

    #[test]
    fn test_ports_subcommand() {
        let args = Args::parse_from(["propterm", "--output", "json", "ports"]);
        assert!(matches!(args.command, Some(Command::Ports)));
        assert!(matches!(args.output, OutputFormat::Json));
    }
}
