//! Application initialization.
//!
//! This module provides logger setup for the binary; the library itself
//! only logs through the `log` facade and leaves initialization to the
//! embedding application.

mod logger;

pub use logger::init_logger_with;
