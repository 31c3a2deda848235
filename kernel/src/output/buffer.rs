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

use super::cell::Cell;

pub const BUFFER_WIDTH: usize = 80;
pub const BUFFER_HEIGHT: usize = 25;
pub const BUFFER_CELLS: usize = BUFFER_WIDTH * BUFFER_HEIGHT;

/// Storage a console writes its cells into.
///
/// Cells are addressed row-major, `index = row * BUFFER_WIDTH + col`. Callers must keep
/// `index < BUFFER_CELLS`; [`Console`](super::Console) checks coordinates before they get here.
pub trait CellSink {
    fn write_cell(&mut self, index: usize, cell: Cell);
    fn read_cell(&self, index: usize) -> Cell;
}

/// A text grid held in ordinary memory.
///
/// Backs consoles that are not attached to hardware, which is every console in the tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBuffer {
    cells: [Cell; BUFFER_CELLS],
}

impl MemoryBuffer {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::BLANK; BUFFER_CELLS],
        }
    }

    /// Returns the cell at the given coordinate, or `None` outside the grid.
    pub fn cell_at(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= BUFFER_WIDTH || row >= BUFFER_HEIGHT {
            return None;
        }
        Some(self.cells[row * BUFFER_WIDTH + col])
    }

    /// Glyphs of one row, without attributes.
    pub fn row_bytes(&self, row: usize) -> [u8; BUFFER_WIDTH] {
        let mut bytes = [0u8; BUFFER_WIDTH];
        let start = row * BUFFER_WIDTH;
        for (byte, cell) in bytes
            .iter_mut()
            .zip(&self.cells[start..start + BUFFER_WIDTH])
        {
            *byte = cell.glyph();
        }
        bytes
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellSink for MemoryBuffer {
    fn write_cell(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    fn read_cell(&self, index: usize) -> Cell {
        self.cells[index]
    }
}
