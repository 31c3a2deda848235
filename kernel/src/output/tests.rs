//! Console behaviour against an in-memory grid.

use core::ffi::CStr;

use super::{
    BUFFER_HEIGHT, BUFFER_WIDTH, Cell, Color, ColorCode, Console, ConsoleError, MemoryBuffer,
    Position, console::MAX_STRING_SCAN, strlen,
};

fn fresh_console() -> Console<MemoryBuffer> {
    let mut console = Console::new(MemoryBuffer::new());
    console.initialize();
    console
}

fn row_text(console: &Console<MemoryBuffer>, row: usize) -> String {
    String::from_utf8_lossy(&console.sink().row_bytes(row))
        .trim_end()
        .to_string()
}

fn at(row: usize, col: usize) -> Position {
    Position { row, col }
}

#[test]
fn initialize_blanks_with_default_color() {
    let mut console = Console::new(MemoryBuffer::new());
    console.set_color(ColorCode::new(Color::Red, Color::Blue));
    console.initialize();

    assert_eq!(console.cursor(), at(0, 0));
    assert_eq!(console.color(), ColorCode::DEFAULT);
    assert!(console.sink().cells().iter().all(|&cell| cell == Cell::BLANK));
}

#[test]
fn writes_before_initialize_fail() {
    let mut console = Console::new(MemoryBuffer::new());

    assert_eq!(console.put_char(b'x'), Err(ConsoleError::NotInitialized));
    assert_eq!(console.write_string("x"), Err(ConsoleError::NotInitialized));
    assert_eq!(
        console.put_char_at(b'x', ColorCode::DEFAULT, 0, 0),
        Err(ConsoleError::NotInitialized)
    );
    assert_eq!(console.clear(), Err(ConsoleError::NotInitialized));
    assert_eq!(console.scroll(), Err(ConsoleError::NotInitialized));
    assert!(!console.is_initialized());
}

#[test]
fn empty_writes_before_initialize_fail() {
    let mut console = Console::new(MemoryBuffer::new());

    assert_eq!(console.write(&[]), Err(ConsoleError::NotInitialized));
    assert_eq!(console.write_string(""), Err(ConsoleError::NotInitialized));
    assert_eq!(
        console.write_terminated(b"\0"),
        Err(ConsoleError::NotInitialized)
    );
    assert_eq!(
        console.write_terminated(b"no end"),
        Err(ConsoleError::NotInitialized)
    );
}

#[test]
fn writes_line_and_moves_cursor() {
    let mut console = fresh_console();
    console.write_string("AB\n").unwrap();

    let buffer = console.sink();
    assert_eq!(buffer.cell_at(0, 0), Some(Cell::new(b'A', ColorCode::DEFAULT)));
    assert_eq!(buffer.cell_at(1, 0), Some(Cell::new(b'B', ColorCode::DEFAULT)));
    assert_eq!(console.cursor(), at(1, 0));
}

#[test]
fn carriage_return_keeps_row() {
    let mut console = fresh_console();
    console.write_string("hello\rj").unwrap();

    assert_eq!(row_text(&console, 0), "jello");
    assert_eq!(console.cursor(), at(0, 1));
}

#[test]
fn set_color_applies_to_later_writes() {
    let mut console = fresh_console();
    let green = ColorCode::new(Color::LightGreen, Color::Black);

    console.write_string("a").unwrap();
    console.set_color(green);
    console.write_string("b").unwrap();

    let buffer = console.sink();
    assert_eq!(buffer.cell_at(0, 0).unwrap().color(), ColorCode::DEFAULT);
    assert_eq!(buffer.cell_at(1, 0).unwrap().color(), green);
}

#[test]
fn wraps_after_full_line() {
    let mut console = fresh_console();
    console.write(&[b'x'; BUFFER_WIDTH]).unwrap();

    assert_eq!(console.cursor(), at(1, 0));
    assert_eq!(console.scroll_count(), 0);
}

#[test]
fn wrap_continues_on_next_row() {
    let mut console = fresh_console();
    console.write(&[b'x'; BUFFER_WIDTH]).unwrap();
    console.write_string("y").unwrap();

    assert_eq!(console.sink().cell_at(0, 1).unwrap().glyph(), b'y');
    assert_eq!(console.cursor(), at(1, 1));
}

#[test]
fn overflowing_grid_scrolls_once() {
    let mut console = fresh_console();
    for _ in 0..BUFFER_WIDTH * BUFFER_HEIGHT + 1 {
        console.put_char(b'#').unwrap();
    }

    assert_eq!(console.scroll_count(), 1);
    assert_eq!(console.cursor(), at(BUFFER_HEIGHT - 1, 1));
    assert_eq!(row_text(&console, BUFFER_HEIGHT - 1), "#");
    assert_eq!(row_text(&console, 0), "#".repeat(BUFFER_WIDTH));
}

#[test]
fn old_lines_scroll_off() {
    let mut console = fresh_console();
    for line in 0..=BUFFER_HEIGHT {
        console.write_string(&format!("line {line}\n")).unwrap();
    }

    for row in 0..BUFFER_HEIGHT {
        assert_ne!(row_text(&console, row), "line 0");
    }
    // The trailing newline of the last line scrolled once more.
    assert_eq!(
        row_text(&console, BUFFER_HEIGHT - 2),
        format!("line {BUFFER_HEIGHT}")
    );
    assert_eq!(row_text(&console, BUFFER_HEIGHT - 1), "");
    assert_eq!(console.cursor(), at(BUFFER_HEIGHT - 1, 0));
}

#[test]
fn unterminated_last_line_sits_on_bottom_row() {
    let mut console = fresh_console();
    for line in 0..BUFFER_HEIGHT {
        console.write_string(&format!("line {line}\n")).unwrap();
    }
    console.write_string("last").unwrap();

    assert_eq!(row_text(&console, 0), "line 1");
    assert_eq!(row_text(&console, BUFFER_HEIGHT - 1), "last");
    assert_eq!(console.scroll_count(), 1);
}

#[test]
fn scroll_blanks_last_row_with_current_color() {
    let mut console = fresh_console();
    console.write_string("top\nsecond").unwrap();
    let blue = ColorCode::new(Color::White, Color::Blue);
    console.set_color(blue);
    console.scroll().unwrap();

    assert_eq!(row_text(&console, 0), "second");
    assert_eq!(
        console.sink().cell_at(0, BUFFER_HEIGHT - 1),
        Some(Cell::blank(blue))
    );
    assert_eq!(console.cursor(), at(BUFFER_HEIGHT - 1, 0));
}

#[test]
fn cursor_stays_in_bounds() {
    let mut console = fresh_console();
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..20_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let glyph = match seed % 16 {
            0 => b'\n',
            1 => b'\r',
            n => b'a' + n as u8,
        };
        console.put_char(glyph).unwrap();

        let cursor = console.cursor();
        assert!(cursor.row < BUFFER_HEIGHT);
        assert!(cursor.col < BUFFER_WIDTH);
    }
}

#[test]
fn clear_keeps_current_color() {
    let mut console = fresh_console();
    console.write_string("text").unwrap();
    let yellow = ColorCode::new(Color::Yellow, Color::Black);
    console.set_color(yellow);
    console.clear().unwrap();

    assert_eq!(console.color(), yellow);
    assert_eq!(console.cursor(), at(0, 0));
    assert!(
        console
            .sink()
            .cells()
            .iter()
            .all(|&cell| cell == Cell::blank(yellow))
    );
}

#[test]
fn clear_is_idempotent() {
    let mut console = fresh_console();
    console.write_string("some\ntext").unwrap();
    console.clear().unwrap();
    let once = console.sink().clone();
    console.clear().unwrap();

    assert_eq!(console.sink(), &once);
}

#[test]
fn put_char_at_checks_bounds() {
    let mut console = fresh_console();

    assert_eq!(
        console.put_char_at(b'x', ColorCode::DEFAULT, BUFFER_WIDTH, 0),
        Err(ConsoleError::OutOfBounds)
    );
    assert_eq!(
        console.put_char_at(b'x', ColorCode::DEFAULT, 0, BUFFER_HEIGHT),
        Err(ConsoleError::OutOfBounds)
    );

    let red = ColorCode::new(Color::Red, Color::Black);
    console
        .put_char_at(b'z', red, BUFFER_WIDTH - 1, BUFFER_HEIGHT - 1)
        .unwrap();
    assert_eq!(
        console.sink().cell_at(BUFFER_WIDTH - 1, BUFFER_HEIGHT - 1),
        Some(Cell::new(b'z', red))
    );
    assert_eq!(console.cursor(), at(0, 0));
}

#[test]
fn strlen_stops_at_terminator() {
    assert_eq!(strlen(b"abc\0def"), Ok(3));
    assert_eq!(strlen(b"\0"), Ok(0));
    assert_eq!(strlen(b"abc"), Err(ConsoleError::UnterminatedInput));
    assert_eq!(strlen(b""), Err(ConsoleError::UnterminatedInput));
}

#[test]
fn strlen_gives_up_past_scan_limit() {
    let mut long = vec![b'a'; MAX_STRING_SCAN + 1];
    long.push(0);
    assert_eq!(strlen(&long), Err(ConsoleError::UnterminatedInput));

    long.truncate(MAX_STRING_SCAN - 1);
    long.push(0);
    assert_eq!(strlen(&long), Ok(MAX_STRING_SCAN - 1));
}

#[test]
fn write_terminated_stops_at_nul() {
    let mut console = fresh_console();
    console.write_terminated(b"ok\0ignored").unwrap();

    assert_eq!(row_text(&console, 0), "ok");
    assert_eq!(
        console.write_terminated(b"no end"),
        Err(ConsoleError::UnterminatedInput)
    );
    assert_eq!(row_text(&console, 0), "ok");
}

#[test]
fn write_cstr_writes_bytes() {
    let mut console = fresh_console();
    let text = CStr::from_bytes_with_nul(b"kernel\0").unwrap();
    console.write_cstr(text).unwrap();

    assert_eq!(row_text(&console, 0), "kernel");
}

#[test]
fn formats_through_fmt_write() {
    use core::fmt::Write;

    let mut console = fresh_console();
    write!(console, "{}+{}={}", 2, 2, 4).unwrap();

    assert_eq!(row_text(&console, 0), "2+2=4");
}

#[test]
fn fmt_write_reports_uninitialized_console() {
    use core::fmt::Write;

    let mut console = Console::new(MemoryBuffer::new());
    assert!(write!(console, "nope").is_err());
}
