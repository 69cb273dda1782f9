//! Logging setup.
//!
//! Library code only talks to the `log` facade (camera clamps and fallbacks are
//! reported at debug level). Binaries and tests that want to see those messages
//! call [`init_logging`] once at startup.

mod init;

pub use init::{LoggingConfig, init_logging};
