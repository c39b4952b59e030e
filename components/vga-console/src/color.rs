//! Color palette and packed cell attributes
//!
//! A text-mode cell carries one attribute byte: the low nibble selects the
//! foreground color, the high nibble the background color.

/// The 16-entry text-mode palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl Color {
    const PALETTE: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::LightGray,
        Color::DarkGray,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::Pink,
        Color::Yellow,
        Color::White,
    ];

    /// Palette entry for a 4-bit index (upper bits are ignored)
    pub const fn from_nibble(value: u8) -> Color {
        Self::PALETTE[(value & 0x0F) as usize]
    }
}

/// Packed `(background << 4) | foreground` attribute byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Attribute(u8);

impl Attribute {
    /// Green text on a black background (`0x02`)
    pub const GREEN_ON_BLACK: Attribute = Attribute::new(Color::Green, Color::Black);

    /// Light gray text on a black background (`0x07`)
    pub const LIGHT_GRAY_ON_BLACK: Attribute = Attribute::new(Color::LightGray, Color::Black);

    /// Pack `(background << 4) | foreground`
    pub const fn new(foreground: Color, background: Color) -> Attribute {
        Attribute(((background as u8) << 4) | foreground as u8)
    }

    /// Wrap an already packed attribute byte
    pub const fn from_byte(value: u8) -> Attribute {
        Attribute(value)
    }

    /// The packed attribute byte
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Low nibble
    pub const fn foreground(self) -> Color {
        Color::from_nibble(self.0)
    }

    /// High nibble
    pub const fn background(self) -> Color {
        Color::from_nibble(self.0 >> 4)
    }

    /// Same background, different foreground
    pub const fn with_foreground(self, foreground: Color) -> Attribute {
        Attribute::new(foreground, self.background())
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute::GREEN_ON_BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_packing() {
        assert_eq!(Attribute::new(Color::Green, Color::Black).as_byte(), 0x02);
        assert_eq!(Attribute::new(Color::White, Color::Blue).as_byte(), 0x1F);
        assert_eq!(Attribute::new(Color::Black, Color::LightGray).as_byte(), 0x70);
    }

    #[test]
    fn test_attribute_unpacking() {
        let attr = Attribute::from_byte(0x4E);
        assert_eq!(attr.foreground(), Color::Yellow);
        assert_eq!(attr.background(), Color::Red);
    }

    #[test]
    fn test_with_foreground_keeps_background() {
        let attr = Attribute::new(Color::White, Color::Blue).with_foreground(Color::LightRed);
        assert_eq!(attr.foreground(), Color::LightRed);
        assert_eq!(attr.background(), Color::Blue);
    }

    #[test]
    fn test_palette_indices() {
        for value in 0u8..16 {
            assert_eq!(Color::from_nibble(value) as u8, value);
        }
        assert_eq!(Color::from_nibble(0xF2), Color::Green);
    }
}
