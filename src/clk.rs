// SPDX-License-Identifier: Unlicense

//! Platform clocks and the SSP M/N bit-clock dividers.
//!
//! Each SSP port derives its bit clock from the 25 MHz reference through an
//! M/N divider. Only the combinations listed in [`SSP_MN_CONF`] are known to
//! be exact, so a request either matches an entry or is refused.

use crate::hal::ShimTrait;
use crate::shim::{ShimReg, SSP_DIVH};
use crate::util::bitfield::Bitfield;
use crate::{Error, Result};

use core::convert::TryFrom;
use log::{debug, trace};

/// Clocks the platform can set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClockId {
    /// DSP core clock.
    Cpu,
    /// SSP reference clock.
    Ssp,
}

/// CPU clock while booting.
pub const CLK_MAX_CPU_HZ: u32 = 343_000_000;
/// CPU clock once boot is complete.
pub const CLK_DEFAULT_CPU_HZ: u32 = 32_000_000;
/// SSP reference clock set at boot.
pub const CLK_SSP_HZ: u32 = 25_000_000;

/// One known-good divider setting.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockDividerEntry {
    /// Reference clock feeding the divider.
    pub source_clock_hz: u32,
    /// Bit clocks per frame.
    pub bit_clock_ratio: u32,
    /// Frame rate.
    pub sample_rate_hz: u32,
    /// Divider M, programmed in the high register.
    pub m: u32,
    /// Divider N, programmed in the low register.
    pub n: u32,
}

const fn entry(source: u32, bclk_fs: u32, rate: u32, m: u32, n: u32) -> ClockDividerEntry {
    ClockDividerEntry {
        source_clock_hz: source,
        bit_clock_ratio: bclk_fs,
        sample_rate_hz: rate,
        m,
        n,
    }
}

/// Supported divider settings; first match wins.
pub const SSP_MN_CONF: [ClockDividerEntry; 5] = [
    entry(25_000_000, 24, 48_000, 1152, 25000), // 1.152MHz
    entry(25_000_000, 32, 48_000, 1536, 25000), // 1.536MHz
    entry(25_000_000, 64, 48_000, 3072, 25000), // 3.072MHz
    entry(25_000_000, 400, 48_000, 96, 125),    // 19.2MHz
    entry(25_000_000, 400, 44_100, 441, 625),   // 17.64MHz
];

/// SSP ports with an M/N divider.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SspPort {
    /// Port 0.
    Ssp0,
    /// Port 1.
    Ssp1,
    /// Port 2.
    Ssp2,
}

impl SspPort {
    /// Divider N register.
    pub const fn divl(self) -> ShimReg {
        match self {
            Self::Ssp0 => ShimReg::Ssp0Divl,
            Self::Ssp1 => ShimReg::Ssp1Divl,
            Self::Ssp2 => ShimReg::Ssp2Divl,
        }
    }

    /// Divider M and control register.
    pub const fn divh(self) -> ShimReg {
        match self {
            Self::Ssp0 => ShimReg::Ssp0Divh,
            Self::Ssp1 => ShimReg::Ssp1Divh,
            Self::Ssp2 => ShimReg::Ssp2Divh,
        }
    }
}

impl TryFrom<u32> for SspPort {
    type Error = Error;

    fn try_from(port: u32) -> Result<Self> {
        match port {
            0 => Ok(Self::Ssp0),
            1 => Ok(Self::Ssp1),
            2 => Ok(Self::Ssp2),
            _ => Err(Error::UnsupportedDevice),
        }
    }
}

/// Find the divider setting for a clock combination.
pub fn lookup(source_hz: u32, rate_hz: u32, bclk_fs: u32) -> Option<&'static ClockDividerEntry> {
    SSP_MN_CONF.iter().find(|e| {
        e.source_clock_hz == source_hz && e.sample_rate_hz == rate_hz && e.bit_clock_ratio == bclk_fs
    })
}

/// Program the M/N divider of `port` for the given clocks.
///
/// N goes to the low register first; writing the high register with UPD set
/// latches both. Nothing is written unless the configuration matches a table
/// entry and the port exists.
pub fn set_mn(
    shim: &mut impl ShimTrait,
    port: u32,
    source_hz: u32,
    rate_hz: u32,
    bclk_fs: u32,
) -> Result<()> {
    let mn = lookup(source_hz, rate_hz, bclk_fs).ok_or(Error::InvalidConfiguration)?;
    let port = SspPort::try_from(port)?;

    let divh: Bitfield<u32, SSP_DIVH::Register> =
        (SSP_DIVH::ENA::SET + SSP_DIVH::UPD::SET + SSP_DIVH::M.val(mn.m)).into();
    debug!("{:?} m {} n {} for {} Hz x {}", port, mn.m, mn.n, rate_hz, bclk_fs);

    shim.write(port.divl(), mn.n);
    shim.write(port.divh(), divh.get());
    Ok(())
}

/// Put the divider of `port` into bypass.
///
/// Ports without a divider are ignored.
pub fn disable_mn(shim: &mut impl ShimTrait, port: u32) {
    match SspPort::try_from(port) {
        Ok(port) => {
            let divh: Bitfield<u32, SSP_DIVH::Register> =
                (SSP_DIVH::BYP::SET + SSP_DIVH::UPD::SET).into();
            shim.write(port.divh(), divh.get());
        }
        Err(_) => trace!("no divider on port {}", port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::test::MockBoard;

    const ENA: u32 = 1 << 30;
    const UPD: u32 = 1 << 29;
    const BYP: u32 = 1 << 31;

    #[test]
    fn platform_rates() {
        assert_eq!(CLK_MAX_CPU_HZ, 343_000_000);
        assert_eq!(CLK_DEFAULT_CPU_HZ, 32_000_000);
        assert_eq!(CLK_SSP_HZ, 25_000_000);
    }

    #[test]
    fn every_entry_programs_its_pair() {
        for e in SSP_MN_CONF.iter() {
            let mut board = MockBoard::new();
            assert_ok!(set_mn(
                &mut board,
                1,
                e.source_clock_hz,
                e.sample_rate_hz,
                e.bit_clock_ratio
            ));
            assert_eq!(
                board.shim_writes(),
                [
                    (ShimReg::Ssp1Divl, e.n),
                    (ShimReg::Ssp1Divh, ENA | UPD | e.m)
                ]
            );
        }
    }

    #[test]
    fn reference_scenario() {
        let mut board = MockBoard::new();
        assert_ok!(set_mn(&mut board, 0, 25_000_000, 48_000, 24));
        assert_eq!(board.register(ShimReg::Ssp0Divl), 25000);
        assert_eq!(board.register(ShimReg::Ssp0Divh), ENA | UPD | 1152);
    }

    #[test]
    fn unmatched_writes_nothing() {
        let mut board = MockBoard::new();
        assert_eq!(
            set_mn(&mut board, 0, 24_576_000, 48_000, 64),
            Err(Error::InvalidConfiguration)
        );
        assert_eq!(
            set_mn(&mut board, 0, 25_000_000, 44_100, 24),
            Err(Error::InvalidConfiguration)
        );
        assert!(board.events().is_empty());
    }

    #[test]
    fn unknown_port() {
        let mut board = MockBoard::new();
        assert_eq!(
            set_mn(&mut board, 3, 25_000_000, 48_000, 24),
            Err(Error::UnsupportedDevice)
        );
        assert!(board.events().is_empty());
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup(25_000_000, 44_100, 400).map(|e| e.m), Some(441));
        assert_none!(lookup(25_000_001, 48_000, 24));
    }

    #[test]
    fn disable_bypasses() {
        let mut board = MockBoard::new();
        assert_ok!(set_mn(&mut board, 2, 25_000_000, 48_000, 64));
        disable_mn(&mut board, 2);
        let divh = Bitfield::<u32, SSP_DIVH::Register>::new(board.register(ShimReg::Ssp2Divh));
        assert!(divh.is_set(SSP_DIVH::BYP));
        assert!(divh.is_set(SSP_DIVH::UPD));
        assert_eq!(board.register(ShimReg::Ssp2Divh), BYP | UPD);
        // N is left as it was
        assert_eq!(board.register(ShimReg::Ssp2Divl), 25000);
    }

    #[test]
    fn disable_unknown_port_is_ignored() {
        let mut board = MockBoard::new();
        disable_mn(&mut board, 7);
        assert!(board.events().is_empty());
    }
}
