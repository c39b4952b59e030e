//! Console configuration and compile-time defaults
//!
//! Like kernel component selection, the defaults here are composed at
//! compile time through cargo features:
//! - `overflow-scroll`: scroll the surface up when the cursor passes the last row
//! - (default): wrap the cursor back to the top row and overwrite
//!
//! Either policy can still be chosen at runtime with
//! [`Console::set_overflow`](crate::Console::set_overflow).

use crate::color::Attribute;
use crate::surface::VGA_TEXT_BUFFER;

/// What the cursor does after the last cell of the last row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Jump back to row 0 and overwrite from the top
    ///
    /// A character that runs off the last row leaves row 0 as it was; a
    /// newline that wraps blanks row 0 before the next line is written.
    Wrap,
    /// Move every row up by one, blank the last row and stay on it
    Scroll,
}

impl OverflowPolicy {
    /// Policy selected by cargo features
    #[cfg(feature = "overflow-scroll")]
    pub const DEFAULT: OverflowPolicy = OverflowPolicy::Scroll;

    #[cfg(not(feature = "overflow-scroll"))]
    pub const DEFAULT: OverflowPolicy = OverflowPolicy::Wrap;
}

impl Default for OverflowPolicy {
    fn default() -> Self {
        OverflowPolicy::DEFAULT
    }
}

/// Console binding parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Address of the first cell of the surface
    pub surface_base: usize,

    /// Attribute used by `clear` and subsequent writes
    pub color: Attribute,

    pub overflow: OverflowPolicy,
}

impl ConsoleConfig {
    /// Legacy text buffer, green on black, feature-selected overflow policy
    pub const DEFAULT: ConsoleConfig = ConsoleConfig {
        surface_base: VGA_TEXT_BUFFER,
        color: Attribute::GREEN_ON_BLACK,
        overflow: OverflowPolicy::DEFAULT,
    };

    pub const fn with_color(self, color: Attribute) -> Self {
        Self { color, ..self }
    }

    pub const fn with_overflow(self, overflow: OverflowPolicy) -> Self {
        Self { overflow, ..self }
    }

    pub const fn with_surface_base(self, surface_base: usize) -> Self {
        Self { surface_base, ..self }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig::DEFAULT
    }
}
