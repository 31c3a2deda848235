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

use core::ptr::NonNull;

use spin::Mutex;
use volatile::VolatilePtr;

use crate::debug;

use super::{
    buffer::{BUFFER_CELLS, CellSink},
    cell::Cell,
    console::Console,
};

/// Physical address of the VGA text buffer.
pub const VGA_PHYS_ADDR: u64 = 0xB8000;

/// The console on the VGA text buffer, once [`vga_init`] has run.
pub static VGA_CONSOLE: Mutex<Option<Console<VgaBuffer>>> = Mutex::new(None);

/// Installs and initializes the global console on the text buffer at `base`.
///
/// # Safety
///
/// Same contract as [`VgaBuffer::new`].
pub unsafe fn vga_init(base: NonNull<Cell>) {
    let mut console = Console::new(unsafe { VgaBuffer::new(base) });
    console.initialize();
    debug!("VGA console installed at {:p}", base);

    let mut lock = VGA_CONSOLE.lock();
    *lock = Some(console);
}

/// The memory-mapped VGA text buffer.
pub struct VgaBuffer {
    base: NonNull<Cell>,
}

unsafe impl Send for VgaBuffer {}

impl VgaBuffer {
    /// # Safety
    ///
    /// `base` must point to `BUFFER_CELLS` mapped, writable cells of text-mode memory that stay
    /// valid for the rest of the kernel's life, and nothing else may hold a `VgaBuffer` over them.
    pub unsafe fn new(base: NonNull<Cell>) -> Self {
        Self { base }
    }

    fn cell_ptr(&self, index: usize) -> VolatilePtr<'_, Cell> {
        debug_assert!(index < BUFFER_CELLS);
        unsafe { VolatilePtr::new(self.base.add(index)) }
    }
}

impl CellSink for VgaBuffer {
    fn write_cell(&mut self, index: usize, cell: Cell) {
        self.cell_ptr(index).write(cell);
    }

    fn read_cell(&self, index: usize) -> Cell {
        self.cell_ptr(index).read()
    }
}
