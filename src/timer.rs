// SPDX-License-Identifier: Unlicense

//! The external timer that clocks the system work queue.

use crate::clk::ClockId;
use crate::interrupt::IRQ_NUM_TIMER3;

/// Hardware timers of the DSP.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerId {
    /// Core timer 0.
    Timer0,
    /// Core timer 1.
    Timer1,
    /// Shim external timer.
    Timer2,
}

/// A hardware timer and the line it interrupts on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExternalTimer {
    /// Which timer.
    pub id: TimerId,
    /// Interrupt line raised on expiry.
    pub irq: u32,
}

/// Clock-change notifications a time source subscribes to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NotifierId {
    /// SSP clock frequency changed.
    SspFreq,
}

/// Time source for the system work queue.
///
/// The queue re-derives its tick from `clock` whenever `notifier` fires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorkQueueTimesource {
    /// Timer driving the queue.
    pub timer: ExternalTimer,
    /// Clock the timer counts.
    pub clock: ClockId,
    /// Notification followed for frequency changes.
    pub notifier: NotifierId,
}

/// The platform's external timer, started once at boot and never stopped.
pub const PLATFORM_EXT_TIMER: ExternalTimer = ExternalTimer {
    id: TimerId::Timer2,
    irq: IRQ_NUM_TIMER3,
};

/// Time source handed to the system work queue.
pub const PLATFORM_GENERIC_QUEUE: WorkQueueTimesource = WorkQueueTimesource {
    timer: PLATFORM_EXT_TIMER,
    clock: ClockId::Ssp,
    notifier: NotifierId::SspFreq,
};
