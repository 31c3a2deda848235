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

//! MyOS kernel library: the VGA text console and the kernel's output plumbing.
//!
//! Built `no_std` for the kernel; tests run on the host with the standard harness against
//! [`output::MemoryBuffer`].

#![cfg_attr(not(test), no_std)]

pub mod meta;
pub mod output;
pub mod serial;

use core::arch::asm;

/// Halts the CPU forever.
pub fn hcf() -> ! {
    loop {
        unsafe {
            #[cfg(target_arch = "x86_64")]
            asm!("hlt");
        }
    }
}
