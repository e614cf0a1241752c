// SPDX-License-Identifier: Unlicense

//! The platform as seen by the rest of the firmware.
//!
//! [`Platform`] owns the board and exposes bring-up, the ready announcement,
//! the SSP dividers and the interrupt demultiplexer. The `*_status` forms
//! return the 0 / negative-errno codes the firmware ABI uses.

use crate::boot::{self, BootFailure, BootStep};
use crate::clk;
use crate::hal::Board;
use crate::interrupt;
use crate::ipc;
use crate::util::result::status;
use crate::Result;

use log::{error, info};

/// A board and its bring-up progress.
pub struct Platform<B: Board> {
    board: B,
    last_completed: Option<BootStep>,
}

impl<B: Board> Platform<B> {
    /// Wrap a board that has not been brought up.
    pub const fn new(board: B) -> Self {
        Self {
            board,
            last_completed: None,
        }
    }

    /// Bring the platform up.
    ///
    /// A failure leaves the hardware partly initialised; the caller must not
    /// continue booting.
    pub fn init(&mut self) -> core::result::Result<(), BootFailure> {
        self.last_completed = None;
        match boot::run(&mut self.board) {
            Ok(last) => {
                self.last_completed = last;
                info!("platform up");
                Ok(())
            }
            Err(failure) => {
                self.last_completed = failure.last_completed;
                Err(failure)
            }
        }
    }

    /// [`init`](Self::init) as an ABI status code.
    ///
    /// On a non-zero status the caller must halt or reset the core; nothing
    /// may run on a partly initialised platform.
    pub fn init_status(&mut self) -> i32 {
        match self.init() {
            Ok(()) => 0,
            Err(failure) => failure.errno(),
        }
    }

    /// Bring the platform up, or halt the core where bring-up stopped.
    ///
    /// The host notices a halted DSP through its IPC timeout.
    pub fn init_or_halt(&mut self) {
        if let Err(failure) = self.init() {
            error!("halting: {}", failure);
            loop {
                core::hint::spin_loop();
            }
        }
    }

    /// Last bring-up step that completed.
    pub fn last_completed(&self) -> Option<BootStep> {
        self.last_completed
    }

    /// Announce to the host that boot is complete.
    ///
    /// `boot_message` is accepted for the firmware ABI and only logged.
    pub fn boot_complete(&mut self, boot_message: u32) {
        ipc::boot_complete(&mut self.board, boot_message)
    }

    /// Program the M/N divider of an SSP port.
    pub fn ssp_set_mn(&mut self, port: u32, source_hz: u32, rate_hz: u32, bclk_fs: u32) -> Result<()> {
        clk::set_mn(&mut self.board, port, source_hz, rate_hz, bclk_fs)
    }

    /// [`ssp_set_mn`](Self::ssp_set_mn) as an ABI status code.
    pub fn ssp_set_mn_status(&mut self, port: u32, source_hz: u32, rate_hz: u32, bclk_fs: u32) -> i32 {
        status(self.ssp_set_mn(port, source_hz, rate_hz, bclk_fs))
    }

    /// Bypass the M/N divider of an SSP port.
    pub fn ssp_disable_mn(&mut self, port: u32) {
        clk::disable_mn(&mut self.board, port)
    }

    /// Clear peripheral interrupt status for `irq`.
    pub fn interrupt_clear(&mut self, irq: u32, mask: u32) {
        interrupt::clear(&mut self.board, irq, mask)
    }

    /// Peripheral interrupt mask register.
    pub fn interrupt_get_enabled(&self) -> u32 {
        interrupt::get_enabled(&self.board)
    }

    /// Mask lines of `irq`; a no-op on this platform.
    pub fn interrupt_mask(&mut self, irq: u32, mask: u32) {
        interrupt::mask(irq, mask)
    }

    /// Unmask lines of `irq`; a no-op on this platform.
    pub fn interrupt_unmask(&mut self, irq: u32, mask: u32) {
        interrupt::unmask(irq, mask)
    }

    /// The board, for inspection.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// The board, for collaborators that need it directly.
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }
}
