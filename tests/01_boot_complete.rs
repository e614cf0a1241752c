// SPDX-License-Identifier: Unlicense

#[macro_use]
extern crate claim;


use libplatform::clk::{ClockId, CLK_DEFAULT_CPU_HZ};
use libplatform::hal::test::{Event, Fault, MockBoard};
use libplatform::ipc::{ready_doorbell, READY, READY_BYTES};
use libplatform::memory::{IPC_MAX_MAILBOX_BYTES, MAILBOX_INBOX_OFFSET};
use libplatform::shim::ShimReg;
use libplatform::Platform;

fn booted() -> Platform<MockBoard> {
    test_logger::init();
    let mut platform = Platform::new(MockBoard::new());
    assert_ok!(platform.init());
    platform.board_mut().clear_events();
    platform
}

#[test]
fn descriptor_then_doorbell() {
    let mut platform = booted();
    platform.boot_complete(0x1234);

    let board = platform.board();
    assert_eq!(&board.mailbox()[..IPC_MAX_MAILBOX_BYTES], &READY_BYTES[..]);
    // nothing beyond the message
    assert!(board.mailbox()[IPC_MAX_MAILBOX_BYTES..].iter().all(|&b| b == 0));

    let written = assert_some!(board.position(|e| matches!(e, Event::MailboxWrite { .. })));
    let ipcdl = assert_some!(board.position(|e| *e == Event::ShimWrite(ShimReg::Ipcdl, ready_doorbell())));
    let ipcdh = assert_some!(board.position(|e| *e == Event::ShimWrite(ShimReg::Ipcdh, 0x8000_0000)));
    assert!(written < ipcdl);
    assert!(ipcdl < ipcdh);
    assert_some!(board.position(|e| *e == Event::SetFreq(ClockId::Cpu, CLK_DEFAULT_CPU_HZ)));
}

#[test]
fn descriptor_points_at_the_mailbox_halves() {
    assert_eq!(READY.inbox_offset, 0x0009_e000);
    assert_eq!(READY.outbox_offset, 0x0009_e000 + MAILBOX_INBOX_OFFSET as u32);
    assert_eq!(READY.inbox_size, 0x400);
    assert_eq!(READY.outbox_size, 0x400);
    assert_eq!(&READY.info.name, b"REEF\0");
    assert_eq!(READY.info.date.len() + READY.info.time.len(), 19);
}

#[test]
fn message_is_not_encoded() {
    let mut a = booted();
    let mut b = booted();
    a.boot_complete(0);
    b.boot_complete(0xdead_beef);
    assert_eq!(a.board().mailbox(), b.board().mailbox());
    assert_eq!(a.board().events(), b.board().events());
}

#[test]
fn relax_failure_still_announces() {
    let mut platform = booted();
    platform.board_mut().inject(Fault::SetFreq(ClockId::Cpu));
    platform.boot_complete(0);
    assert_eq!(platform.board().register(ShimReg::Ipcdl), ready_doorbell());
    assert_eq!(platform.board().register(ShimReg::Ipcdh), 0x8000_0000);
}
