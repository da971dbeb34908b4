// Widgets module - TUI building blocks
pub mod console;
pub mod help;
pub mod leds;
pub mod status;
