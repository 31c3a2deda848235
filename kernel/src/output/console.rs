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

use core::{ffi::CStr, fmt};

use crate::{info, trace};

use super::{
    buffer::{BUFFER_CELLS, BUFFER_HEIGHT, BUFFER_WIDTH, CellSink},
    cell::{Cell, ColorCode},
};

/// Upper bound on how far [`strlen`] looks for a terminator.
pub const MAX_STRING_SCAN: usize = BUFFER_CELLS * 4;

/// Represents errors that can occur during console operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// A coordinate outside the text grid.
    OutOfBounds,
    /// A write before [`Console::initialize`].
    NotInitialized,
    /// No NUL terminator within [`MAX_STRING_SCAN`] bytes or the end of the slice.
    UnterminatedInput,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::OutOfBounds => f.write_str("coordinate outside the text grid"),
            ConsoleError::NotInitialized => f.write_str("console used before initialization"),
            ConsoleError::UnterminatedInput => f.write_str("string has no terminator"),
        }
    }
}

/// Counts the bytes before the first NUL in `data`.
pub fn strlen(data: &[u8]) -> Result<usize, ConsoleError> {
    let limit = data.len().min(MAX_STRING_SCAN);
    data[..limit]
        .iter()
        .position(|&byte| byte == 0)
        .ok_or(ConsoleError::UnterminatedInput)
}

/// A position on the text grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A text console over an 80x25 grid of cells.
///
/// Tracks the cursor and the current attribute, wraps at the end of a line and scrolls when the
/// cursor moves past the last row. All output goes through the [`CellSink`], so the same writer
/// drives the VGA buffer or an in-memory grid.
pub struct Console<S: CellSink> {
    sink: S,
    cursor_row: usize,
    cursor_col: usize,
    color: ColorCode,
    initialized: bool,
    scrolls: u64,
}

impl<S: CellSink> Console<S> {
    /// Creates an uninitialized console. Every write fails until [`Console::initialize`] runs.
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            cursor_row: 0,
            cursor_col: 0,
            color: ColorCode::DEFAULT,
            initialized: false,
            scrolls: 0,
        }
    }

    /// Resets the cursor and attribute and blanks the whole grid.
    pub fn initialize(&mut self) {
        self.color = ColorCode::DEFAULT;
        self.fill_blank();
        self.initialized = true;
        info!("console initialized ({}x{})", BUFFER_WIDTH, BUFFER_HEIGHT);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Sets the attribute used by every following write.
    pub fn set_color(&mut self, color: ColorCode) {
        self.color = color;
    }

    pub fn color(&self) -> ColorCode {
        self.color
    }

    /// Blanks the grid with the current attribute and homes the cursor.
    ///
    /// Unlike [`Console::initialize`], the current attribute is kept.
    pub fn clear(&mut self) -> Result<(), ConsoleError> {
        self.ensure_initialized()?;
        self.fill_blank();
        Ok(())
    }

    /// Writes one cell without touching the cursor.
    pub fn put_char_at(
        &mut self,
        glyph: u8,
        color: ColorCode,
        col: usize,
        row: usize,
    ) -> Result<(), ConsoleError> {
        self.ensure_initialized()?;
        if col >= BUFFER_WIDTH || row >= BUFFER_HEIGHT {
            return Err(ConsoleError::OutOfBounds);
        }
        self.sink
            .write_cell(row * BUFFER_WIDTH + col, Cell::new(glyph, color));
        Ok(())
    }

    /// Writes a glyph at the cursor and advances it.
    ///
    /// `\n` moves to the start of the next line and `\r` to the start of the current one.
    pub fn put_char(&mut self, glyph: u8) -> Result<(), ConsoleError> {
        self.ensure_initialized()?;
        match glyph {
            b'\n' => {
                self.cursor_col = 0;
                self.advance_row();
            }
            b'\r' => self.cursor_col = 0,
            glyph => {
                self.put_char_at(glyph, self.color, self.cursor_col, self.cursor_row)?;
                self.cursor_col += 1;
                if self.cursor_col == BUFFER_WIDTH {
                    self.cursor_col = 0;
                    self.advance_row();
                }
            }
        }
        Ok(())
    }

    /// Shifts every row up by one, blanks the last row and puts the cursor at its start.
    pub fn scroll(&mut self) -> Result<(), ConsoleError> {
        self.ensure_initialized()?;
        self.shift_up();
        Ok(())
    }

    /// Writes every byte of `data` in order.
    pub fn write(&mut self, data: &[u8]) -> Result<(), ConsoleError> {
        self.ensure_initialized()?;
        for &glyph in data {
            self.put_char(glyph)?;
        }
        Ok(())
    }

    pub fn write_string(&mut self, data: &str) -> Result<(), ConsoleError> {
        self.write(data.as_bytes())
    }

    /// Writes the bytes of `data` up to its NUL terminator.
    pub fn write_terminated(&mut self, data: &[u8]) -> Result<(), ConsoleError> {
        self.ensure_initialized()?;
        let len = strlen(data)?;
        self.write(&data[..len])
    }

    pub fn write_cstr(&mut self, data: &CStr) -> Result<(), ConsoleError> {
        self.write(data.to_bytes())
    }

    pub fn cursor(&self) -> Position {
        Position {
            row: self.cursor_row,
            col: self.cursor_col,
        }
    }

    /// Number of times the grid has scrolled.
    pub fn scroll_count(&self) -> u64 {
        self.scrolls
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn ensure_initialized(&self) -> Result<(), ConsoleError> {
        if !self.initialized {
            return Err(ConsoleError::NotInitialized);
        }
        Ok(())
    }

    fn fill_blank(&mut self) {
        let blank = Cell::blank(self.color);
        for index in 0..BUFFER_CELLS {
            self.sink.write_cell(index, blank);
        }
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    fn advance_row(&mut self) {
        self.cursor_row += 1;
        if self.cursor_row == BUFFER_HEIGHT {
            self.shift_up();
        }
    }

    fn shift_up(&mut self) {
        for index in BUFFER_WIDTH..BUFFER_CELLS {
            let cell = self.sink.read_cell(index);
            self.sink.write_cell(index - BUFFER_WIDTH, cell);
        }

        let blank = Cell::blank(self.color);
        for index in BUFFER_CELLS - BUFFER_WIDTH..BUFFER_CELLS {
            self.sink.write_cell(index, blank);
        }

        self.cursor_row = BUFFER_HEIGHT - 1;
        self.cursor_col = 0;
        self.scrolls += 1;
        trace!("console scrolled ({} total)", self.scrolls);
    }
}

impl<S: CellSink> fmt::Write for Console<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s).map_err(|_| fmt::Error)
    }
}
