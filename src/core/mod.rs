// Core module - Terminal session coordination
pub mod coordinator;
