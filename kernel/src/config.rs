//! Kernel configuration and component composition
//!
//! Compile-time configuration selected by cargo features:
//! - `log-error` .. `log-trace`: boot log level (most verbose wins)
//! - `overflow-scroll`: console scrolls instead of wrapping

use log::LevelFilter;
use vga_console::{Attribute, ConsoleConfig};

/// Console component configuration
///
/// Legacy text buffer at `0xB8000`, green on black.
pub const CONSOLE: ConsoleConfig = ConsoleConfig::DEFAULT.with_color(Attribute::GREEN_ON_BLACK);

/// Boot log level
pub const LOG_LEVEL: LevelFilter = if cfg!(feature = "log-trace") {
    LevelFilter::Trace
} else if cfg!(feature = "log-debug") {
    LevelFilter::Debug
} else if cfg!(feature = "log-info") {
    LevelFilter::Info
} else if cfg!(feature = "log-warn") {
    LevelFilter::Warn
} else if cfg!(feature = "log-error") {
    LevelFilter::Error
} else {
    LevelFilter::Off
};
