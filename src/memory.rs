// SPDX-License-Identifier: Unlicense

//! Memory map of the host-shared mailbox.
//!
//! The mailbox sits at the top of DSP DRAM0 and is visible to the host
//! through the DSP BAR at [`MAILBOX_HOST_OFFSET`].

/// Base of DSP DRAM0.
pub const DRAM0_BASE: usize = 0x0040_0000;
/// Size of DSP DRAM0.
pub const DRAM0_SIZE: usize = 0x000a_0000;

/// Size of the mailbox window.
pub const MAILBOX_SIZE: usize = 0x2000;
/// DSP address of the mailbox window.
pub const MAILBOX_BASE: usize = DRAM0_BASE + DRAM0_SIZE - MAILBOX_SIZE;
/// Offset of the mailbox within the host's view of the DSP.
pub const MAILBOX_HOST_OFFSET: u32 = (MAILBOX_BASE - DRAM0_BASE) as u32;

/// Firmware to host messages.
pub const MAILBOX_OUTBOX_OFFSET: usize = 0x0;
/// Size of the outbox.
pub const MAILBOX_OUTBOX_SIZE: usize = 0x400;

/// Host to firmware messages.
pub const MAILBOX_INBOX_OFFSET: usize = MAILBOX_OUTBOX_OFFSET + MAILBOX_OUTBOX_SIZE;
/// Size of the inbox.
pub const MAILBOX_INBOX_SIZE: usize = 0x400;

/// Exception dump area.
pub const MAILBOX_EXCEPTION_OFFSET: usize = MAILBOX_INBOX_OFFSET + MAILBOX_INBOX_SIZE;
/// Size of the exception area.
pub const MAILBOX_EXCEPTION_SIZE: usize = 0x100;

/// Debug area.
pub const MAILBOX_DEBUG_OFFSET: usize = MAILBOX_EXCEPTION_OFFSET + MAILBOX_EXCEPTION_SIZE;
/// Size of the debug area.
pub const MAILBOX_DEBUG_SIZE: usize = 0x100;

/// Stream position area.
pub const MAILBOX_STREAM_OFFSET: usize = MAILBOX_DEBUG_OFFSET + MAILBOX_DEBUG_SIZE;
/// Size of the stream area.
pub const MAILBOX_STREAM_SIZE: usize = 0x200;

/// Early trace area, the remainder of the window.
pub const MAILBOX_TRACE_OFFSET: usize = MAILBOX_STREAM_OFFSET + MAILBOX_STREAM_SIZE;
/// Size of the trace area.
pub const MAILBOX_TRACE_SIZE: usize = MAILBOX_SIZE - MAILBOX_TRACE_OFFSET;

/// Largest single IPC message carried through the mailbox.
pub const IPC_MAX_MAILBOX_BYTES: usize = 0x100;
