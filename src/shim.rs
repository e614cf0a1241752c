// SPDX-License-Identifier: Unlicense

//! DSP shim registers touched during bring-up.
//!
//! The shim is a block of 32-bit registers bridging the DSP core to the host
//! IPC doorbells, the peripheral interrupt fabric and the SSP clock dividers.
//! Registers are named by [`ShimReg`]; their bit-fields are declared below so
//! callers never build values from bare masks.

use enum_map::Enum;
use tock_registers::fields::FieldValue;
use tock_registers::register_bitfields;

/// Physical base of the shim register block.
pub const SHIM_BASE: usize = 0xFFFF_B000;

/// Shim registers used by the platform layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Enum)]
pub enum ShimReg {
    /// Peripheral interrupt status (W1C).
    Pisr,
    /// Peripheral interrupt mask.
    Pimr,
    /// IPC doorbell DSP to host, low word.
    Ipcdl,
    /// IPC doorbell DSP to host, high word.
    Ipcdh,
    /// Miscellaneous control.
    Misc,
    /// SSP0 divider, N.
    Ssp0Divl,
    /// SSP0 divider, M and control.
    Ssp0Divh,
    /// SSP1 divider, N.
    Ssp1Divl,
    /// SSP1 divider, M and control.
    Ssp1Divh,
    /// SSP2 divider, N.
    Ssp2Divl,
    /// SSP2 divider, M and control.
    Ssp2Divh,
}

impl ShimReg {
    /// Byte offset from [`SHIM_BASE`].
    pub const fn offset(self) -> usize {
        match self {
            Self::Pisr => 0x08,
            Self::Pimr => 0x10,
            Self::Ipcdl => 0x40,
            Self::Ipcdh => 0x44,
            Self::Misc => 0x88,
            Self::Ssp0Divl => 0xe8,
            Self::Ssp0Divh => 0xec,
            Self::Ssp1Divl => 0xf0,
            Self::Ssp1Divh => 0xf4,
            Self::Ssp2Divl => 0xf8,
            Self::Ssp2Divh => 0xfc,
        }
    }
}

register_bitfields! [u32,
    /// Peripheral interrupt status, one byte lane per external DMA controller.
    pub PISR [
        DMAC0 OFFSET(16) NUMBITS(8) [],
        DMAC1 OFFSET(24) NUMBITS(8) []
    ],
    /// Peripheral interrupt mask.
    pub PIMR [
        SSP0 OFFSET(3) NUMBITS(1) [],
        SSP1 OFFSET(4) NUMBITS(1) [],
        SSP2 OFFSET(5) NUMBITS(1) []
    ],
    /// Doorbell to host, low word: command and mailbox offset.
    pub IPCDL [
        MSG OFFSET(0) NUMBITS(32) []
    ],
    /// Doorbell to host, high word.
    pub IPCDH [
        DONE OFFSET(30) NUMBITS(1) [],
        BUSY OFFSET(31) NUMBITS(1) []
    ],
    /// Miscellaneous control; bring-up sets the three control bits.
    pub MISC [
        CTRL OFFSET(1) NUMBITS(3) []
    ],
    /// SSP divider high word.
    pub SSP_DIVH [
        M OFFSET(0) NUMBITS(24) [],
        UPD OFFSET(29) NUMBITS(1) [],
        ENA OFFSET(30) NUMBITS(1) [],
        BYP OFFSET(31) NUMBITS(1) []
    ]
];

/// Bits set in MISC during bring-up.
pub const MISC_BOOT_BITS: u32 = 0x0000_000e;

/// SSP lines masked in PIMR before the DAIs are probed.
pub const PIMR_SSP_MASK: u32 = 0x0000_0038;

/// MISC fields set during bring-up, [`MISC_BOOT_BITS`] as a field value.
pub fn misc_boot() -> FieldValue<u32, MISC::Register> {
    MISC::CTRL.val(0b111)
}

/// PIMR fields masking the SSP lines, [`PIMR_SSP_MASK`] as a field value.
pub fn pimr_ssp_masked() -> FieldValue<u32, PIMR::Register> {
    PIMR::SSP0::SET + PIMR::SSP1::SET + PIMR::SSP2::SET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_constants_match_masks() {
        assert_eq!(misc_boot().value, MISC_BOOT_BITS);
        assert_eq!(misc_boot().mask(), MISC_BOOT_BITS);
        assert_eq!(pimr_ssp_masked().value, PIMR_SSP_MASK);
        assert_eq!(pimr_ssp_masked().mask(), PIMR_SSP_MASK);
        assert_eq!(IPCDH::BUSY::SET.value, 0x8000_0000);
        assert_eq!(PISR::DMAC1.val(0xff).value, 0xff00_0000);
    }

    #[test]
    fn register_map() {
        assert_eq!(SHIM_BASE, 0xffff_b000);
        let map = [
            (ShimReg::Pisr, 0x08),
            (ShimReg::Pimr, 0x10),
            (ShimReg::Ipcdl, 0x40),
            (ShimReg::Ipcdh, 0x44),
            (ShimReg::Misc, 0x88),
            (ShimReg::Ssp0Divl, 0xe8),
            (ShimReg::Ssp0Divh, 0xec),
            (ShimReg::Ssp1Divl, 0xf0),
            (ShimReg::Ssp1Divh, 0xf4),
            (ShimReg::Ssp2Divl, 0xf8),
            (ShimReg::Ssp2Divh, 0xfc),
        ];
        for (reg, offset) in map.iter() {
            assert_eq!(reg.offset(), *offset, "{:?}", reg);
        }
    }

    #[test]
    fn divider_offsets_pair_up() {
        assert_eq!(ShimReg::Ssp0Divh.offset() - ShimReg::Ssp0Divl.offset(), 4);
        assert_eq!(ShimReg::Ssp2Divl.offset(), 0xf8);
    }
}
