// SPDX-License-Identifier: Unlicense

#[macro_use]
extern crate claim;

use libplatform::clk::{SspPort, SSP_MN_CONF};
use libplatform::hal::test::MockBoard;
use libplatform::shim::ShimReg;
use libplatform::{Error, Platform};

use core::convert::TryFrom;

const BYP: u32 = 1 << 31;
const ENA: u32 = 1 << 30;
const UPD: u32 = 1 << 29;

#[test]
fn every_table_entry_on_every_port() {
    for port in 0..3 {
        let ssp = assert_ok!(SspPort::try_from(port));
        for e in SSP_MN_CONF.iter() {
            let mut platform = Platform::new(MockBoard::new());
            assert_eq!(
                platform.ssp_set_mn_status(port, e.source_clock_hz, e.sample_rate_hz, e.bit_clock_ratio),
                0
            );
            assert_eq!(
                platform.board().shim_writes(),
                [(ssp.divl(), e.n), (ssp.divh(), ENA | UPD | e.m)]
            );
        }
    }
}

#[test]
fn port_zero_reference() {
    let mut platform = Platform::new(MockBoard::new());
    assert_ok!(platform.ssp_set_mn(0, 25_000_000, 48_000, 24));
    assert_eq!(platform.board().register(ShimReg::Ssp0Divl), 25000);
    assert_eq!(platform.board().register(ShimReg::Ssp0Divh), ENA | UPD | 1152);
}

#[test]
fn port_three_unsupported() {
    let mut platform = Platform::new(MockBoard::new());
    assert_eq!(
        platform.ssp_set_mn(3, 25_000_000, 48_000, 24),
        Err(Error::UnsupportedDevice)
    );
    assert_eq!(platform.ssp_set_mn_status(3, 25_000_000, 48_000, 24), -19);
    assert!(platform.board().events().is_empty());
}

#[test]
fn absent_triples_rejected() {
    let absent = [
        (25_000_000, 48_000, 16),
        (25_000_000, 96_000, 64),
        (24_576_000, 48_000, 32),
        (25_000_000, 44_100, 64),
        (0, 0, 0),
    ];
    let mut platform = Platform::new(MockBoard::new());
    for &(source, rate, ratio) in absent.iter() {
        assert_eq!(
            platform.ssp_set_mn(1, source, rate, ratio),
            Err(Error::InvalidConfiguration)
        );
    }
    assert_eq!(platform.ssp_set_mn_status(1, 0, 0, 0), -22);
    assert!(platform.board().events().is_empty());
}

#[test]
fn disable_overrides_any_prior_state() {
    let mut board = MockBoard::new();
    board.preset(ShimReg::Ssp1Divh, 0xffff_ffff);
    let mut platform = Platform::new(board);
    platform.ssp_disable_mn(1);
    assert_eq!(platform.board().register(ShimReg::Ssp1Divh), BYP | UPD);

    assert_ok!(platform.ssp_set_mn(0, 25_000_000, 48_000, 400));
    platform.ssp_disable_mn(0);
    let divh = platform.board().register(ShimReg::Ssp0Divh);
    assert_eq!(divh & (BYP | UPD), BYP | UPD);
    assert_eq!(divh & ENA, 0);
}
