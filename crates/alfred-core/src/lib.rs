//! Core Alfred library (config, logging, interrupt handling).

pub mod config;
pub mod interrupt;
pub mod logging;
