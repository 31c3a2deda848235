//! COM1 serial port, the sink for the kernel's log macros.

use conquer_once::spin::Lazy;
use spin::Mutex;
use uart_16550::SerialPort;

/// I/O port base of COM1.
pub const COM1: u16 = 0x3F8;

/// Serial port for writing log output, read by QEMU's `-serial stdio`.
pub static SERIAL1: Lazy<Mutex<SerialPort>> = Lazy::new(|| {
    let mut serial_port = unsafe { SerialPort::new(COM1) };
    serial_port.init();
    Mutex::new(serial_port)
});

/// Writes formatted text to COM1.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {{
        let _ = ::core::fmt::Write::write_fmt(
            &mut *$crate::serial::SERIAL1.lock(),
            format_args!($($arg)*)
        );
    }};
}

/// Writes formatted text and a newline to COM1.
#[macro_export]
macro_rules! serial_println {
    () => {
        $crate::serial_print!("\n");
    };
    ($($arg:tt)*) => {
        $crate::serial_print!("{}\n", format_args!($($arg)*));
    };
}
