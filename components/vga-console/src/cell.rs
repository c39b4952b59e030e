//! Character cells
//!
//! One cell is a 16-bit word `(attribute << 8) | character`. The character
//! byte sits at the lower address, so on x86 the `#[repr(C)]` layout and the
//! little-endian word agree. Cells are word-aligned like the hardware buffer.

use crate::color::Attribute;
use static_assertions::{assert_eq_align, assert_eq_size};

/// One character position of the text surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(2))]
pub struct Cell {
    pub character: u8,
    pub attribute: Attribute,
}

assert_eq_size!(Cell, u16);
assert_eq_align!(Cell, u16);

impl Cell {
    pub const fn new(character: u8, attribute: Attribute) -> Cell {
        Cell { character, attribute }
    }

    /// A space in the given attribute
    pub const fn blank(attribute: Attribute) -> Cell {
        Cell::new(b' ', attribute)
    }

    /// Hardware word encoding: `(attribute << 8) | character`
    pub const fn to_word(self) -> u16 {
        ((self.attribute.as_byte() as u16) << 8) | self.character as u16
    }

    pub const fn from_word(word: u16) -> Cell {
        Cell {
            character: (word & 0xFF) as u8,
            attribute: Attribute::from_byte((word >> 8) as u8),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::blank(Attribute::default())
    }
}
