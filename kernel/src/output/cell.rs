/*
Copyright © 2024–2025 Mako and JayAndJef

This file is part of MyOS.

MyOS is free software: you can redistribute it and/or modify it under the terms of the GNU General
Public License as published by the Free Software Foundation, either version 3 of the License, or (at
your option) any later version.

MyOS is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the
implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public
License for more details.

You should have received a copy of the GNU General Public License along with MyOS. If not, see
<https://www.gnu.org/licenses/>.
*/

//! Encoding of VGA text-mode cells.
//!
//! A cell is 16 bits: the glyph in the low byte and the attribute in the high byte. The attribute
//! packs the foreground color in its low nibble and the background color in its high nibble.

/// The 16 colors of the VGA text-mode palette, with their hardware values.
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
    /// Every color, indexed by its hardware value.
    pub const ALL: [Color; 16] = [
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

    /// Decodes the low nibble of `value`. The high nibble is ignored.
    pub const fn from_nibble(value: u8) -> Self {
        Self::ALL[(value & 0x0F) as usize]
    }
}

impl TryFrom<u8> for Color {
    /// The rejected value.
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 0x0F {
            return Err(value);
        }
        Ok(Self::from_nibble(value))
    }
}

/// A packed foreground/background pair, the attribute byte of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Light gray on black, what the display shows after initialization.
    pub const DEFAULT: ColorCode = ColorCode::new(Color::LightGray, Color::Black);

    pub const fn new(foreground: Color, background: Color) -> Self {
        Self((foreground as u8) | (background as u8) << 4)
    }

    /// Every byte is a valid attribute, so this cannot fail.
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    pub const fn as_byte(self) -> u8 {
        self.0
    }

    pub const fn foreground(self) -> Color {
        Color::from_nibble(self.0)
    }

    pub const fn background(self) -> Color {
        Color::from_nibble(self.0 >> 4)
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One encoded character position of the text grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Cell(u16);

impl Cell {
    /// A space at the default attribute.
    pub const BLANK: Cell = Cell::blank(ColorCode::DEFAULT);

    pub const fn new(glyph: u8, color: ColorCode) -> Self {
        Self(glyph as u16 | (color.as_byte() as u16) << 8)
    }

    pub const fn blank(color: ColorCode) -> Self {
        Self::new(b' ', color)
    }

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn glyph(self) -> u8 {
        self.0 as u8
    }

    pub const fn color(self) -> ColorCode {
        ColorCode::from_byte((self.0 >> 8) as u8)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_code_packs_foreground_low() {
        let code = ColorCode::new(Color::Yellow, Color::Blue);
        assert_eq!(code.as_byte(), 0x1E);
        assert_eq!(ColorCode::DEFAULT.as_byte(), 0x07);
    }

    #[test]
    fn cell_layout_matches_hardware() {
        let cell = Cell::new(b'A', ColorCode::new(Color::White, Color::Red));
        assert_eq!(cell.raw(), 0x4F41);
    }

    #[test]
    fn cell_encoding_round_trips() {
        for glyph in 0..=u8::MAX {
            for foreground in Color::ALL {
                for background in Color::ALL {
                    let cell = Cell::from_raw(
                        Cell::new(glyph, ColorCode::new(foreground, background)).raw(),
                    );
                    assert_eq!(cell.glyph(), glyph);
                    assert_eq!(cell.color().foreground(), foreground);
                    assert_eq!(cell.color().background(), background);
                }
            }
        }
    }

    #[test]
    fn out_of_range_color_rejected() {
        assert_eq!(Color::try_from(14u8), Ok(Color::Yellow));
        assert_eq!(Color::try_from(16u8), Err(16));
        assert_eq!(Color::try_from(0xFFu8), Err(0xFF));
    }
}
