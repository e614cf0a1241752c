// SPDX-License-Identifier: Unlicense

//! Telling the host the firmware has booted.
//!
//! The host driver polls nothing: it waits for the doorbell, then reads the
//! ready descriptor from the start of the outbox to learn where the mailbox
//! halves live. The descriptor is therefore a fixed, packed, little-endian
//! layout shared with the host driver.

use crate::clk::{ClockId, CLK_DEFAULT_CPU_HZ};
use crate::hal::{ClockTrait, MailboxTrait, ShimTrait};
use crate::memory::{
    IPC_MAX_MAILBOX_BYTES, MAILBOX_HOST_OFFSET, MAILBOX_INBOX_OFFSET, MAILBOX_INBOX_SIZE,
    MAILBOX_OUTBOX_OFFSET, MAILBOX_OUTBOX_SIZE,
};
use crate::shim::{ShimReg, IPCDH, IPCDL};
use crate::util::bitfield::Bitfield;

use log::{info, warn};

/// Doorbell command: firmware ready.
pub const IPC_FW_READY: u32 = 0x1 << 29;

/// Firmware name announced to the host.
pub const FW_NAME: &str = "REEF";

const NAME_LEN: usize = 5;
const DATE_LEN: usize = 11;
const TIME_LEN: usize = 8;
const HEADER_LEN: usize = 5 * 4;

/// Size of the embedded firmware information block.
pub const FW_INFO_SIZE: usize = NAME_LEN + DATE_LEN + TIME_LEN;

/// Identification of the running image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FwInfo {
    /// NUL padded ASCII name.
    pub name: [u8; NAME_LEN],
    /// Build date, `Mmm dd yyyy`.
    pub date: [u8; DATE_LEN],
    /// Build time, `hh:mm:ss`.
    pub time: [u8; TIME_LEN],
}

/// First message the host reads from the outbox.
///
/// Inbox and outbox are named from the host's side: the host's inbox is the
/// firmware's outbox.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReadyDescriptor {
    /// Host-visible offset of the firmware outbox.
    pub inbox_offset: u32,
    /// Host-visible offset of the firmware inbox.
    pub outbox_offset: u32,
    /// Size of the firmware outbox.
    pub inbox_size: u32,
    /// Size of the firmware inbox.
    pub outbox_size: u32,
    /// Size of `info`.
    pub fw_info_size: u32,
    /// Image identification.
    pub info: FwInfo,
}

/// Copy `src` into a fixed field, truncating or NUL padding.
const fn fixed<const N: usize>(src: &str) -> [u8; N] {
    let src = src.as_bytes();
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N && i < src.len() {
        out[i] = src[i];
        i += 1;
    }
    out
}

impl FwInfo {
    const fn byte(&self, i: usize) -> u8 {
        if i < NAME_LEN {
            self.name[i]
        } else if i < NAME_LEN + DATE_LEN {
            self.date[i - NAME_LEN]
        } else {
            self.time[i - NAME_LEN - DATE_LEN]
        }
    }
}

impl ReadyDescriptor {
    /// Wire image, padded with zeros to a full mailbox message.
    pub const fn to_bytes(&self) -> [u8; IPC_MAX_MAILBOX_BYTES] {
        let header = [
            self.inbox_offset,
            self.outbox_offset,
            self.inbox_size,
            self.outbox_size,
            self.fw_info_size,
        ];
        let mut buf = [0u8; IPC_MAX_MAILBOX_BYTES];

        let mut w = 0;
        while w < header.len() {
            let bytes = header[w].to_le_bytes();
            let mut i = 0;
            while i < 4 {
                buf[w * 4 + i] = bytes[i];
                i += 1;
            }
            w += 1;
        }

        let mut i = 0;
        while i < FW_INFO_SIZE {
            buf[HEADER_LEN + i] = self.info.byte(i);
            i += 1;
        }
        buf
    }
}

/// The descriptor of this image.
pub const READY: ReadyDescriptor = ReadyDescriptor {
    inbox_offset: MAILBOX_HOST_OFFSET + MAILBOX_OUTBOX_OFFSET as u32,
    outbox_offset: MAILBOX_HOST_OFFSET + MAILBOX_INBOX_OFFSET as u32,
    inbox_size: MAILBOX_OUTBOX_SIZE as u32,
    outbox_size: MAILBOX_INBOX_SIZE as u32,
    fw_info_size: FW_INFO_SIZE as u32,
    info: FwInfo {
        name: fixed(FW_NAME),
        date: fixed(env!("FW_BUILD_DATE")),
        time: fixed(env!("FW_BUILD_TIME")),
    },
};

/// [`READY`] as written to the outbox.
pub const READY_BYTES: [u8; IPC_MAX_MAILBOX_BYTES] = READY.to_bytes();

/// Doorbell low word announcing readiness.
pub const fn ready_doorbell() -> u32 {
    IPC_FW_READY | (MAILBOX_HOST_OFFSET >> 3)
}

/// Publish the ready descriptor and ring the host.
///
/// Relaxes the CPU clock on the way, since boot no longer needs it. Every call
/// sends the notification again; call once.
pub fn boot_complete<B>(board: &mut B, boot_message: u32)
where
    B: ShimTrait + MailboxTrait + ClockTrait,
{
    info!("boot complete, message {:#x}", boot_message);

    MailboxTrait::write(board, MAILBOX_OUTBOX_OFFSET, &READY_BYTES);

    if let Err(e) = board.set_freq(ClockId::Cpu, CLK_DEFAULT_CPU_HZ) {
        warn!("cpu clock stays at boot rate: {}", e);
    }

    let ipcdl: Bitfield<u32, IPCDL::Register> = IPCDL::MSG.val(ready_doorbell()).into();
    let ipcdh: Bitfield<u32, IPCDH::Register> = IPCDH::BUSY::SET.into();
    ShimTrait::write(board, ShimReg::Ipcdl, ipcdl.get());
    ShimTrait::write(board, ShimReg::Ipcdh, ipcdh.get());
}
