//! Logging utilities.
//!
//! The inspector reports through the `log` facade only: members it cannot
//! render, composites that were never registered and enum values it cannot
//! represent. This module wires those diagnostics to `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
