//! `log` backend that renders records on the console
//!
//! `log::Log` needs a `Sync` global, so the installed console lives in a
//! `spin::Once<spin::Mutex<_>>`. Logging never spins on that lock: a record
//! that arrives while the console is held (for example a `trace!` emitted by
//! the console itself) is dropped.

use crate::color::{Attribute, Color};
use crate::console::Console;
use crate::{ConsoleError, Result};
use core::fmt::Write;
use log::{Level, LevelFilter, Log, Metadata, Record};
use spin::{Mutex, Once};

static CONSOLE: Once<Mutex<Console<'static>>> = Once::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let Some(console) = CONSOLE.get() else {
            return;
        };

        if let Some(mut console) = console.try_lock() {
            write_record(&mut console, record);
        }
    }

    fn flush(&self) {}
}

/// Install `console` as the global `log` backend
///
/// Takes ownership of the console; use [`with_console`] to reach it afterwards.
pub fn install(console: Console<'static>, level: LevelFilter) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|_| ConsoleError::LoggerAlreadySet)?;
    CONSOLE.call_once(|| Mutex::new(console));
    log::set_max_level(level);
    Ok(())
}

/// Run `f` on the installed console, if any
pub fn with_console<R>(f: impl FnOnce(&mut Console<'static>) -> R) -> Option<R> {
    let console = CONSOLE.get()?;
    let mut console = console.lock();
    Some(f(&mut console))
}

/// Render one record as `[LEVEL] message` on its own line
///
/// Only the level tag is colored; the previous attribute is restored before
/// the message.
pub fn write_record(console: &mut Console<'_>, record: &Record<'_>) {
    let saved = console.color();

    console.set_attribute(level_attribute(record.level(), saved));
    let _ = write!(console, "[{:<5}]", record.level());
    console.set_attribute(saved);

    let _ = write!(console, " {}", record.args());
    console.newline();
}

/// Attribute for a level tag, keeping the background of `base`
pub fn level_attribute(level: Level, base: Attribute) -> Attribute {
    match level {
        Level::Error => base.with_foreground(Color::LightRed),
        Level::Warn => base.with_foreground(Color::Yellow),
        Level::Info => base,
        Level::Debug | Level::Trace => base.with_foreground(Color::DarkGray),
    }
}
