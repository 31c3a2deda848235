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

//! The status text shown once the kernel is up.

use crate::output::{CellSink, Color, ColorCode, Console, ConsoleError};

pub const VERSION: &str = "v1.0";

/// Lines of the startup banner grouped by the foreground color they are written in.
const STARTUP_BANNER: &[(Color, &[&str])] = &[
    (Color::LightGreen, &["MyOS Kernel v1.0\n", "================\n\n"]),
    (
        Color::White,
        &["Kernel successfully loaded!\n", "System initialized.\n\n"],
    ),
    (
        Color::Yellow,
        &[
            "Features implemented:\n",
            "- VGA text mode output\n",
            "- Basic terminal functions\n",
            "- Screen scrolling\n",
            "- Color support\n\n",
        ],
    ),
    (Color::Cyan, &["System ready. Welcome to MyOS!\n"]),
];

/// Writes the startup banner to `console`. The background stays black throughout.
pub fn write_startup_banner<S: CellSink>(console: &mut Console<S>) -> Result<(), ConsoleError> {
    for &(foreground, lines) in STARTUP_BANNER {
        console.set_color(ColorCode::new(foreground, Color::Black));
        for line in lines {
            console.write_string(line)?;
        }
    }
    Ok(())
}
