// SPDX-License-Identifier: Unlicense

//! Peripheral interrupt status and mask handling.
//!
//! The two external DMA controllers share PISR, one byte lane each. Status
//! bits are write-one-to-clear, so only the bits being cleared are written.

use crate::hal::{IntcTrait, ShimTrait};
use crate::shim::{ShimReg, PISR};

use log::trace;

/// SSP0 (level 1).
pub const IRQ_NUM_EXT_SSP0: u32 = 0;
/// SSP1 (level 1).
pub const IRQ_NUM_EXT_SSP1: u32 = 1;
/// OBFF (level 1).
pub const IRQ_NUM_EXT_OBFF: u32 = 2;
/// Host doorbell (level 1).
pub const IRQ_NUM_EXT_IA: u32 = 4;
/// Timer 1 (level 1).
pub const IRQ_NUM_TIMER1: u32 = 6;
/// Software 1 (level 1).
pub const IRQ_NUM_SOFTWARE1: u32 = 7;
/// External DMA controller 0 (level 1).
pub const IRQ_NUM_EXT_DMAC0: u32 = 8;
/// External DMA controller 1 (level 3).
pub const IRQ_NUM_EXT_DMAC1: u32 = 9;
/// Timer 2 (level 3).
pub const IRQ_NUM_TIMER2: u32 = 10;
/// Software 2 (level 3).
pub const IRQ_NUM_SOFTWARE2: u32 = 11;
/// Parity error (level 3).
pub const IRQ_NUM_EXT_PARITY: u32 = 12;
/// Timer 3, the external timer (level 5).
pub const IRQ_NUM_TIMER3: u32 = 13;
/// Non-maskable (level 7).
pub const IRQ_NUM_NMI: u32 = 14;

/// Clear `mask` in the status lane of `irq` and acknowledge it.
///
/// Only the external DMA lines have a lane; other lines are ignored.
pub fn clear<B>(board: &mut B, irq: u32, mask: u32)
where
    B: ShimTrait + IntcTrait,
{
    let lane = match irq {
        IRQ_NUM_EXT_DMAC0 => PISR::DMAC0,
        IRQ_NUM_EXT_DMAC1 => PISR::DMAC1,
        _ => {
            trace!("no status lane for irq {}", irq);
            return;
        }
    };
    // not confined to the lane: wide masks reach the next one
    board.write(ShimReg::Pisr, mask << lane.shift);
    board.interrupt_clear(irq);
}

/// Lines currently set in the peripheral interrupt mask.
pub fn get_enabled(shim: &impl ShimTrait) -> u32 {
    shim.read(ShimReg::Pimr)
}

/// Mask lines of `irq`. Not supported by this platform.
pub fn mask(irq: u32, mask: u32) {
    trace!("mask irq {} {:#x} ignored", irq, mask);
}

/// Unmask lines of `irq`. Not supported by this platform.
pub fn unmask(irq: u32, mask: u32) {
    trace!("unmask irq {} {:#x} ignored", irq, mask);
}
