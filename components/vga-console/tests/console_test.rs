//! Integration tests for the console driver
//!
//! These tests drive the public API the way the kernel does:
//! - Bind a surface
//! - Clear it
//! - Write characters and strings
//! - Read the cells back

use vga_console::*;

fn buffer() -> Box<[Cell; CELL_COUNT]> {
    Box::new([Cell::from_word(0xFFFF); CELL_COUNT])
}

/// Boot scenario: green on black, clear, one character
#[test]
fn test_boot_clear_then_write() {
    let mut cells = buffer();
    let mut console = Console::initialize(Surface::from_cells(&mut cells), Attribute::GREEN_ON_BLACK);

    console.clear();
    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            assert_eq!(console.cell(row, col).to_word(), 0x0220, "cell ({}, {})", row, col);
        }
    }

    console.write_char(b'A');
    assert_eq!(console.cell(0, 0), Cell::new(b'A', Attribute::from_byte(0x02)));
    assert_eq!(console.cursor(), Position::new(0, 1));

    drop(console);
    assert_eq!(cells[0].to_word(), 0x0241);
    assert!(cells[1..].iter().all(|cell| cell.to_word() == 0x0220));
}

/// One full row moves the cursor to the start of the next row
#[test]
fn test_full_row_advances_to_next_row() {
    let mut cells = buffer();
    let mut console = Console::initialize(Surface::from_cells(&mut cells), Attribute::GREEN_ON_BLACK);
    console.clear();

    console.puts(&"=".repeat(WIDTH));
    assert_eq!(console.cursor(), Position::new(1, 0));
}

/// Filling the whole surface twice with the wrap policy is idempotent
#[test]
fn test_full_surface_fill_wraps_to_origin() {
    let mut cells = buffer();
    let config = ConsoleConfig::DEFAULT.with_overflow(OverflowPolicy::Wrap);
    let mut console = Console::from_config(Surface::from_cells(&mut cells), &config);
    console.clear();

    let pattern = |i: usize| b'0' + (i % 10) as u8;
    for _ in 0..2 {
        for i in 0..CELL_COUNT {
            console.write_char(pattern(i));
        }
        assert_eq!(console.cursor(), Position::ORIGIN);
    }

    drop(console);
    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(*cell, Cell::new(pattern(i), Attribute::GREEN_ON_BLACK));
    }
}

/// Changing color leaves earlier cells alone
#[test]
fn test_set_color_applies_to_later_writes_only() {
    let mut cells = buffer();
    let mut console = Console::initialize(Surface::from_cells(&mut cells), Attribute::GREEN_ON_BLACK);
    console.clear();

    console.write_char(b'g');
    console.set_color(Color::White, Color::Red);
    console.write_char(b'w');

    assert_eq!(console.cell(0, 0).attribute, Attribute::new(Color::Green, Color::Black));
    assert_eq!(console.cell(0, 1).attribute, Attribute::new(Color::White, Color::Red));
    assert_eq!(console.color().as_byte(), 0x4F);
}

/// Clearing after a color change repaints everything in the new color
#[test]
fn test_clear_uses_current_color() {
    let mut cells = buffer();
    let mut console = Console::initialize(Surface::from_cells(&mut cells), Attribute::GREEN_ON_BLACK);
    console.puts("stale text");
    console.set_color(Color::LightGray, Color::Blue);
    console.clear();

    drop(console);
    assert!(cells.iter().all(|cell| *cell == Cell::blank(Attribute::from_byte(0x17))));
}

/// Scrolling keeps the most recent rows visible
#[test]
fn test_scrolling_log_output() {
    let mut cells = buffer();
    let config = ConsoleConfig::DEFAULT.with_overflow(OverflowPolicy::Scroll);
    let mut console = Console::from_config(Surface::from_cells(&mut cells), &config);
    console.clear();

    for line in 0..HEIGHT + 5 {
        console.puts(&format!("line {}\n", line));
    }

    assert_eq!(console.cursor(), Position::new(HEIGHT - 1, 0));
    let first: Vec<u8> = (0..7).map(|col| console.cell(0, col).character).collect();
    assert_eq!(first, b"line 6 ");
    let last: Vec<u8> = (0..7).map(|col| console.cell(HEIGHT - 2, col).character).collect();
    assert_eq!(last, b"line 29");
    assert_eq!(console.cell(HEIGHT - 1, 0), Cell::blank(Attribute::GREEN_ON_BLACK));
}

/// Binding by address goes through the same checks as the kernel entry
#[test]
fn test_bind_by_address() {
    let mut cells = buffer();
    let base = cells.as_mut_ptr() as usize;

    let mut console = unsafe { Console::at_address(base, Attribute::GREEN_ON_BLACK) }
        .expect("heap buffer is a valid surface");
    console.clear();
    console.write_char(b'K');
    drop(console);
    assert_eq!(cells[0], Cell::new(b'K', Attribute::GREEN_ON_BLACK));

    let err = unsafe { Console::at_address(base + 1, Attribute::GREEN_ON_BLACK) }.err();
    assert_eq!(err, Some(ConsoleError::MisalignedSurface { address: base + 1 }));

    let config = ConsoleConfig::DEFAULT.with_surface_base(0);
    let err = unsafe { Console::from_config_address(&config) }.err();
    assert_eq!(err, Some(ConsoleError::NullSurface));
}
