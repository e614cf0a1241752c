// SPDX-License-Identifier: Unlicense

//! Panic handling.

#[cfg(all(not(test), target_os = "none"))]
use log::error;

/// Log panic information and halt the core.
///
/// The host notices a wedged DSP through its IPC timeout.
#[cfg(all(not(test), target_os = "none"))]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    match info.location() {
        None => error!("Panic: {}", info),
        Some(loc) => error!("Panic: {} (at {}:{})", info, loc.file(), loc.line()),
    };

    loop {
        core::hint::spin_loop();
    }
}
