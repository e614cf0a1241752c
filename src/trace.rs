// SPDX-License-Identifier: Unlicense

//! Boot checkpoint codes.
//!
//! Each code is handed to the trace collaborator just before the matching
//! step runs. Nothing reads them back; after a failed boot the last code
//! written tells where bring-up stopped.

const TRACE_BOOT_START: u32 = 0x1000;
const TRACE_BOOT_SYS: u32 = TRACE_BOOT_START + 0x200;
const TRACE_BOOT_PLATFORM: u32 = TRACE_BOOT_START + 0x300;

/// Boot checkpoint.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TracePoint {
    /// System work queue.
    SysWork = TRACE_BOOT_SYS + 0x100,
    /// Boot CPU frequency.
    SysCpuFreq = TRACE_BOOT_SYS + 0x200,
    /// Peripheral interrupt mask.
    PlatformIrq = TRACE_BOOT_PLATFORM + 0x110,
    /// Mailbox clear.
    PlatformMbox = TRACE_BOOT_PLATFORM + 0x120,
    /// Shim configuration.
    PlatformShim = TRACE_BOOT_PLATFORM + 0x130,
    /// External timer.
    PlatformTimer = TRACE_BOOT_PLATFORM + 0x150,
    /// Platform clocks.
    PlatformClock = TRACE_BOOT_PLATFORM + 0x160,
    /// SSP reference clock.
    PlatformSspFreq = TRACE_BOOT_PLATFORM + 0x170,
    /// Host IPC.
    PlatformIpc = TRACE_BOOT_PLATFORM + 0x180,
    /// DMA controllers.
    PlatformDma = TRACE_BOOT_PLATFORM + 0x1a0,
    /// SSP ports.
    PlatformSsp = TRACE_BOOT_PLATFORM + 0x1b0,
}

impl TracePoint {
    /// Raw code as written to the trace channel.
    pub const fn code(self) -> u32 {
        self as u32
    }
}
