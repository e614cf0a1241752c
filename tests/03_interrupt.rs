// SPDX-License-Identifier: Unlicense

use libplatform::hal::test::{Event, MockBoard};
use libplatform::interrupt::*;
use libplatform::shim::ShimReg;
use libplatform::Platform;

#[test]
fn dma_lines_clear_their_lane() {
    for &mask in [0x01, 0x80, 0xff].iter() {
        let mut platform = Platform::new(MockBoard::new());
        platform.interrupt_clear(IRQ_NUM_EXT_DMAC0, mask);
        platform.interrupt_clear(IRQ_NUM_EXT_DMAC1, mask);
        assert_eq!(
            platform.board().events(),
            [
                Event::ShimWrite(ShimReg::Pisr, mask << 16),
                Event::IntcClear(IRQ_NUM_EXT_DMAC0),
                Event::ShimWrite(ShimReg::Pisr, mask << 24),
                Event::IntcClear(IRQ_NUM_EXT_DMAC1),
            ]
        );
    }
}

#[test]
fn other_lines_do_nothing() {
    let mut platform = Platform::new(MockBoard::new());
    let others = [
        IRQ_NUM_EXT_SSP0,
        IRQ_NUM_EXT_SSP1,
        IRQ_NUM_EXT_OBFF,
        IRQ_NUM_EXT_IA,
        IRQ_NUM_TIMER1,
        IRQ_NUM_SOFTWARE1,
        IRQ_NUM_TIMER2,
        IRQ_NUM_SOFTWARE2,
        IRQ_NUM_EXT_PARITY,
        IRQ_NUM_TIMER3,
        IRQ_NUM_NMI,
    ];
    for &irq in others.iter() {
        platform.interrupt_clear(irq, 0xff);
    }
    assert!(platform.board().events().is_empty());
}

#[test]
fn mask_and_unmask_are_stubs() {
    let mut board = MockBoard::new();
    board.preset(ShimReg::Pimr, 0x38);
    let mut platform = Platform::new(board);
    platform.interrupt_mask(IRQ_NUM_EXT_SSP0, 1);
    platform.interrupt_unmask(IRQ_NUM_EXT_DMAC0, 0xff);
    assert!(platform.board().events().is_empty());
    assert_eq!(platform.interrupt_get_enabled(), 0x38);
}
