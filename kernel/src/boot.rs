//! Boot sequence
//!
//! Runs before any other initialization: no heap, no interrupts, only the
//! stack the bootloader left behind.

use crate::config;
use vga_console::{logger, Console, HEIGHT, WIDTH};

/// First Rust code after `_start`
///
/// 1. Bind the console to the text buffer
/// 2. Clear the screen
/// 3. Install the console as the `log` backend
pub fn kernel_main() -> ! {
    // SAFETY: the text buffer is identity-mapped at boot and nothing else
    // writes to it for the life of the kernel.
    let mut console = match unsafe { Console::from_config_address(&config::CONSOLE) } {
        Ok(console) => console,
        Err(_) => halt(),
    };

    console.clear();

    if logger::install(console, config::LOG_LEVEL).is_ok() {
        log::info!("Boredom OS: console ready ({}x{})", WIDTH, HEIGHT);
        log::debug!("console base {:#x}", config::CONSOLE.surface_base);
    }

    halt()
}

/// Park the CPU forever
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
