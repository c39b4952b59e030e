//! VGA Console - text-mode console driver for the boot stage
//!
//! # Purpose
//! Drives an 80×25 grid of character cells mapped onto raw display memory
//! (the legacy text buffer at `0xB8000` on x86). It is the first thing the
//! kernel touches after `_start`, before any other initialization.
//!
//! # Integration Points
//! - Depends on: a memory-mapped text surface owned exclusively by the console
//! - Provides to: the kernel entry (`clear`), `log` records via [`logger`]
//! - No allocation, no interrupts, no locks in the write path
//!
//! # Architecture
//! - [`cell`]: 16-bit `(attribute << 8) | character` cells
//! - [`color`]: palette and `(background << 4) | foreground` attributes
//! - [`surface`]: bounds-checked volatile view over the cell region
//! - [`console`]: cursor, color and overflow handling
//! - [`config`]: compile-time defaults (cargo features)
//! - [`logger`]: `log::Log` backend on top of an installed console
//!
//! # Testing Strategy
//! - Unit tests: bind a console to a heap-allocated cell array on the host
//! - Integration tests: `tests/` exercise the public API end to end
//! - Benchmarks: `benches/console_bench.rs` (criterion)

#![no_std]

#[cfg(test)]
extern crate std;

pub mod cell;
pub mod color;
pub mod config;
pub mod console;
pub mod logger;
pub mod surface;

pub use cell::Cell;
pub use color::{Attribute, Color};
pub use config::{ConsoleConfig, OverflowPolicy};
pub use console::{Console, Position, REPLACEMENT_CHARACTER};
pub use surface::{Surface, CELL_COUNT, HEIGHT, VGA_TEXT_BUFFER, WIDTH};

use thiserror::Error;

/// Errors from binding the console or installing the logger
///
/// Writing to a bound console cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("Surface base address is null")]
    NullSurface,

    #[error("Surface base address {address:#x} is not cell-aligned")]
    MisalignedSurface { address: usize },

    #[error("A global logger is already installed")]
    LoggerAlreadySet,
}

pub type Result<T> = core::result::Result<T, ConsoleError>;
