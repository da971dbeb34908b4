use serde::{Deserialize, Serialize};

/// PropTerm configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropTermConfig {
    /// Global settings
    #[serde(default)]
    pub global: GlobalConfig,
    /// Terminal/serial settings
    #[serde(default)]
    pub terminal: TerminalConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Activity indicator hold time in milliseconds
    #[serde(default = "default_indicator_ms")]
    pub indicator_ms: u64,
    /// Port registry poll interval in milliseconds
    #[serde(default = "default_registry_poll")]
    pub registry_poll_ms: u64,
}

/// Terminal connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Serial port path (empty means: first available)
    #[serde(default)]
    pub port: String,
    /// Baud rate
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    #[serde(default = "default_data_bits")]
    pub data_bits: u8,
    #[serde(default = "default_stop_bits")]
    pub stop_bits: u8,
    #[serde(default = "default_parity")]
    pub parity: ParityConfig,
    #[serde(default = "default_flow_control")]
    pub flow_control: FlowControlConfig,
    /// Echo sent bytes to the console
    #[serde(default = "default_echo")]
    pub echo: bool,
}

/// Parity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParityConfig {
    None,
    Odd,
    Even,
}

/// Flow control configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowControlConfig {
    None,
    Hardware,
    Software,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    50
}

fn default_indicator_ms() -> u64 {
    100
}

fn default_registry_poll() -> u64 {
    1000
}

fn default_baud_rate() -> u32 {
    115200
}

fn default_data_bits() -> u8 {
    8
}

fn default_stop_bits() -> u8 {
    1
}

fn default_parity() -> ParityConfig {
    ParityConfig::None
}

fn default_flow_control() -> FlowControlConfig {
    FlowControlConfig::None
}

fn default_echo() -> bool {
    true
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate(),
            indicator_ms: default_indicator_ms(),
            registry_poll_ms: default_registry_poll(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            port: String::new(),
            baud_rate: default_baud_rate(),
            data_bits: default_data_bits(),
            stop_bits: default_stop_bits(),
            parity: default_parity(),
            flow_control: default_flow_control(),
            echo: default_echo(),
        }
    }
}

impl Default for PropTermConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            terminal: TerminalConfig::default(),
        }
    }
}
