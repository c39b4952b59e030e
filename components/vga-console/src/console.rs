//! Text-mode console driver
//!
//! Owns the cursor, the active attribute and the overflow policy, and writes
//! through a [`Surface`]. There is exactly one `Console` per surface; callers
//! that need it take `&mut Console`.
//!
//! The write path cannot fail: every index is derived from `WIDTH`/`HEIGHT`
//! and the cursor invariant `row < HEIGHT && col < WIDTH`.

use crate::cell::Cell;
use crate::color::{Attribute, Color};
use crate::config::{ConsoleConfig, OverflowPolicy};
use crate::surface::{Surface, CELL_COUNT, HEIGHT, WIDTH};
use crate::Result;
use core::fmt;
use log::trace;

/// Rendered in place of characters outside printable ASCII
pub const REPLACEMENT_CHARACTER: u8 = 0xFE;

/// Cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Text-mode console bound to one surface
pub struct Console<'a> {
    surface: Surface<'a>,
    cursor: Position,
    color: Attribute,
    overflow: OverflowPolicy,
    /// The last `write_char` filled a row and moved the cursor to the next one
    line_wrapped: bool,
}

impl<'a> Console<'a> {
    /// Bind to `surface` with `color` as the active attribute
    ///
    /// The surface contents are left as they are; call [`clear`](Self::clear)
    /// to blank them.
    pub fn initialize(surface: Surface<'a>, color: Attribute) -> Self {
        Self {
            surface,
            cursor: Position::ORIGIN,
            color,
            overflow: OverflowPolicy::DEFAULT,
            line_wrapped: false,
        }
    }

    /// Bind to `surface` with the color and policy from `config`
    ///
    /// `config.surface_base` is ignored; the surface is already bound.
    pub fn from_config(surface: Surface<'a>, config: &ConsoleConfig) -> Self {
        let mut console = Self::initialize(surface, config.color);
        console.overflow = config.overflow;
        console
    }

    /// Blank every cell with the current attribute and home the cursor
    pub fn clear(&mut self) {
        self.surface.fill(0, CELL_COUNT, Cell::blank(self.color));
        self.cursor = Position::ORIGIN;
        self.line_wrapped = false;
        trace!("console cleared (attribute {:#04x})", self.color.as_byte());
    }

    /// Write `c` at the cursor and advance one column
    pub fn write_char(&mut self, c: u8) {
        let index = Surface::index(self.cursor.row, self.cursor.col);
        self.surface.write(index, Cell::new(c, self.color));

        self.cursor.col += 1;
        self.line_wrapped = self.cursor.col == WIDTH;
        if self.line_wrapped {
            self.cursor.col = 0;
            self.next_row();
        }
    }

    /// Move to column 0 of the next row
    ///
    /// Right after a `write_char` that filled a row the cursor is already at
    /// the start of the next row, so the newline is absorbed instead of
    /// leaving an empty row. Under [`OverflowPolicy::Wrap`] the row the line
    /// restarts on at the top is blanked first.
    pub fn newline(&mut self) {
        let wrapped_to_top = if core::mem::take(&mut self.line_wrapped) {
            self.overflow == OverflowPolicy::Wrap && self.cursor == Position::ORIGIN
        } else {
            self.cursor.col = 0;
            self.next_row()
        };

        if wrapped_to_top {
            self.surface.fill(0, WIDTH, Cell::blank(self.color));
        }
    }

    /// Write a string
    ///
    /// `\n` starts a new row. Anything outside printable ASCII is shown as
    /// [`REPLACEMENT_CHARACTER`], one cell per `char`.
    pub fn puts(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '\n' => self.newline(),
                ' '..='~' => self.write_char(c as u8),
                _ => self.write_char(REPLACEMENT_CHARACTER),
            }
        }
    }

    /// Set the attribute for subsequent writes; existing cells keep theirs
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color = Attribute::new(foreground, background);
        trace!("console color {:?} on {:?}", foreground, background);
    }

    /// Set an already packed attribute for subsequent writes
    pub fn set_attribute(&mut self, attribute: Attribute) {
        self.color = attribute;
    }

    /// Choose what happens after the last row
    pub fn set_overflow(&mut self, overflow: OverflowPolicy) {
        self.overflow = overflow;
    }

    /// Current write position
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Attribute applied to the next write
    pub fn color(&self) -> Attribute {
        self.color
    }

    /// Active overflow policy
    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Read back the cell at `(row, col)`
    ///
    /// # Panics
    /// If `row >= HEIGHT` or `col >= WIDTH`.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        match self.surface.get(row, col) {
            Some(cell) => cell,
            None => panic!("cell ({}, {}) out of bounds", row, col),
        }
    }

    /// Advance one row; returns true when the cursor wrapped to the top
    fn next_row(&mut self) -> bool {
        if self.cursor.row + 1 < HEIGHT {
            self.cursor.row += 1;
            return false;
        }

        match self.overflow {
            OverflowPolicy::Wrap => {
                self.cursor.row = 0;
                true
            }
            OverflowPolicy::Scroll => {
                self.scroll_up();
                self.cursor.row = HEIGHT - 1;
                false
            }
        }
    }

    fn scroll_up(&mut self) {
        self.surface.copy_forward(WIDTH, 0, CELL_COUNT - WIDTH);
        self.surface.fill(CELL_COUNT - WIDTH, CELL_COUNT, Cell::blank(self.color));
        trace!("console scrolled one row");
    }
}

impl Console<'static> {
    /// Bind to the display memory at `base`
    ///
    /// # Safety
    /// Same contract as [`Surface::from_address`].
    pub unsafe fn at_address(base: usize, color: Attribute) -> Result<Self> {
        let surface = unsafe { Surface::from_address(base)? };
        Ok(Self::initialize(surface, color))
    }

    /// Bind to `config.surface_base` with the rest of `config`
    ///
    /// # Safety
    /// Same contract as [`Surface::from_address`].
    pub unsafe fn from_config_address(config: &ConsoleConfig) -> Result<Self> {
        let surface = unsafe { Surface::from_address(config.surface_base)? };
        Ok(Self::from_config(surface, config))
    }
}

impl fmt::Write for Console<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.puts(s);
        Ok(())
    }
}
