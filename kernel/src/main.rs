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

#![no_std]
#![no_main]

use core::{panic::PanicInfo, ptr::NonNull};

use kernel::{
    error, hcf, info,
    meta::{self, write_startup_banner},
    output::{Cell, Color, ColorCode, VGA_CONSOLE, VGA_PHYS_ADDR, vga_init},
    serial_println, warn,
};
use limine::{
    BaseRevision,
    request::{HhdmRequest, RequestsEndMarker, RequestsStartMarker},
};
use x86_64::VirtAddr;

#[unsafe(no_mangle)]
unsafe extern "C" fn kernel_main() -> ! {
    assert!(BASE_REVISION.is_supported());

    let physical_memory_offset = HHDM_REQUEST
        .get_response()
        .expect("Hhdm request failed")
        .offset();
    let vga_base = VirtAddr::new(physical_memory_offset + VGA_PHYS_ADDR);
    let vga_base = NonNull::new(vga_base.as_mut_ptr::<Cell>()).expect("VGA buffer at null");

    unsafe { vga_init(vga_base) };

    match VGA_CONSOLE.lock().as_mut() {
        Some(console) => {
            if let Err(err) = write_startup_banner(console) {
                error!("failed to write startup banner: {}", err);
                hcf();
            }
        }
        None => warn!("VGA console missing, startup banner skipped"),
    }

    info!("MyOS {} ready", meta::VERSION);

    hcf();
}

#[used]
#[unsafe(link_section = ".requests")]
pub static BASE_REVISION: BaseRevision = BaseRevision::new();

#[used]
#[unsafe(link_section = ".requests")]
static HHDM_REQUEST: HhdmRequest = HhdmRequest::new();

#[used]
#[unsafe(link_section = ".requests_start_marker")]
static _START_MARKER: RequestsStartMarker = RequestsStartMarker::new();
#[used]
#[unsafe(link_section = ".requests_end_marker")]
static _END_MARKER: RequestsEndMarker = RequestsEndMarker::new();

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!("{}", info);

    // The panic may have happened with the console locked.
    if let Some(mut lock) = VGA_CONSOLE.try_lock() {
        if let Some(console) = lock.as_mut() {
            use core::fmt::Write;
            console.set_color(ColorCode::new(Color::LightRed, Color::Black));
            let _ = writeln!(console, "{}", info);
        }
    }

    hcf();
}
