#![no_std]
#![no_main]

use core::panic::PanicInfo;

/// Kernel entry point - jumped to by the bootloader
///
/// Takes no arguments and never returns; there is no caller to return to.
#[no_mangle]
#[link_section = ".text._start"]
pub extern "C" fn _start() -> ! {
    boredom_kernel::boot::kernel_main()
}

/// Panic handler - report through the console logger, then halt
///
/// `log` only `try_lock`s the console, so a panic raised while the console
/// is held cannot deadlock here.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    log::error!("kernel panic: {}", info);
    boredom_kernel::boot::halt()
}
