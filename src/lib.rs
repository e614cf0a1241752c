// SPDX-License-Identifier: Unlicense

//! Platform bring-up for the audio DSP.
//!
//! Takes the DSP from reset to the point where host IPC, clocks and the SSP
//! serial-audio ports are usable, then tells the host the firmware is ready.
//!
//! All hardware access goes through the [`hal::Board`] seam so the same code
//! drives the live shim on target and a recording mock on the host.

#![no_std]
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate claim;

#[cfg(test)]
extern crate std;

pub mod boot;
pub mod clk;
pub mod debug;
pub mod hal;
pub mod interrupt;
pub mod ipc;
pub mod memory;
pub mod platform;
pub mod shim;
pub mod timer;
pub mod trace;
pub mod util;

mod panic;

pub use platform::Platform;
pub use util::result::{Error, Result};
