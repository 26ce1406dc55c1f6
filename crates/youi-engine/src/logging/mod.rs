//! Logger setup.
//!
//! Library code only talks to the `log` facade; binaries and tests call
//! [`init_logging`] once.

mod init;

pub use init::{LoggingConfig, init_logging};
