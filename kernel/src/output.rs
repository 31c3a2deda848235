pub mod buffer;
pub mod cell;
pub mod console;
pub mod macros;
pub mod vga;

#[cfg(test)]
mod tests;

pub use buffer::{BUFFER_HEIGHT, BUFFER_WIDTH, CellSink, MemoryBuffer};
pub use cell::{Cell, Color, ColorCode};
pub use console::{Console, ConsoleError, Position, strlen};
pub use vga::{VGA_CONSOLE, VGA_PHYS_ADDR, VgaBuffer, vga_init};
