// SPDX-License-Identifier: Unlicense

//! Seams between the platform layer and the hardware or firmware around it.
//!
//! Register and mailbox access are traits so the live shim and the host-side
//! mock are interchangeable. The remaining traits are the entry points of
//! collaborating firmware subsystems, which this crate only calls in order.

use crate::clk::ClockId;
use crate::shim::ShimReg;
use crate::timer::{ExternalTimer, WorkQueueTimesource};
use crate::trace::TracePoint;
use crate::util::bitfield::Bitfield;
use crate::util::locked::Locked;
use crate::Result;

use tock_registers::{fields::FieldValue, RegisterLongName};

/// Live hardware abstraction layer, memory-mapped.
pub mod live;


/// 32-bit register access to the DSP shim.
pub trait ShimTrait {
    /// Read a register.
    fn read(&self, reg: ShimReg) -> u32;

    /// Write a register.
    fn write(&mut self, reg: ShimReg, value: u32);

    /// Read-modify-write: change the fields named in `field`, keeping all
    /// other bits.
    fn modify<R: RegisterLongName>(&mut self, reg: ShimReg, field: FieldValue<u32, R>) {
        let mut value = Bitfield::<u32, R>::new(self.read(reg));
        value.modify(field);
        self.write(reg, value.get());
    }
}

/// Byte access to the host-shared mailbox window.
///
/// Offsets are relative to the start of the window. Callers pass
/// compile-time layout offsets; out-of-range access is a programming error.
pub trait MailboxTrait {
    /// Zero `len` bytes from `offset`.
    fn zero(&mut self, offset: usize, len: usize);

    /// Copy `bytes` into the window at `offset`.
    fn write(&mut self, offset: usize, bytes: &[u8]);
}

/// Boot checkpoint emission.
pub trait TraceTrait {
    /// Record that bring-up is about to run the step for `point`.
    fn trace_point(&mut self, point: TracePoint);
}

/// Hardware timer control.
pub trait TimerTrait {
    /// Start `timer` counting.
    fn timer_start(&mut self, timer: &ExternalTimer) -> Result<()>;
}

/// Clock subsystem.
pub trait ClockTrait {
    /// Establish the platform clock tree state.
    fn clocks_init(&mut self) -> Result<()>;

    /// Set `clock` to `hz`.
    fn set_freq(&mut self, clock: ClockId, hz: u32) -> Result<()>;
}

/// System work queue.
pub trait WorkQueueTrait {
    /// Initialise the system work queue on `source`.
    fn init_system_workq(&mut self, source: &WorkQueueTimesource) -> Result<()>;
}

/// Host IPC mechanism.
pub trait IpcTrait {
    /// Initialise host IPC.
    fn ipc_init(&mut self) -> Result<()>;
}

/// DMA controller identifiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DmaId {
    /// First external DMA controller.
    Dmac0,
    /// Second external DMA controller.
    Dmac1,
}

/// DMA controller driver.
pub trait DmaTrait {
    /// Handle to a DMA controller instance.
    type Dma;

    /// Look up the controller `id`.
    fn dma_get(&mut self, id: DmaId) -> Option<Self::Dma>;

    /// Probe a controller.
    fn dma_probe(&mut self, dma: &mut Self::Dma) -> Result<()>;
}

/// Kinds of digital audio interface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DaiType {
    /// Synchronous serial port.
    Ssp,
}

/// DAI driver.
pub trait DaiTrait {
    /// Handle to a DAI instance.
    type Dai;

    /// Look up DAI `index` of kind `kind`.
    fn dai_get(&mut self, kind: DaiType, index: u32) -> Option<Self::Dai>;

    /// Probe a DAI.
    fn dai_probe(&mut self, dai: &mut Self::Dai) -> Result<()>;
}

/// Generic interrupt controller.
pub trait IntcTrait {
    /// Acknowledge `irq` at the controller.
    fn interrupt_clear(&mut self, irq: u32);
}

/// Everything platform bring-up needs from the board.
pub trait Board:
    ShimTrait
    + MailboxTrait
    + TraceTrait
    + TimerTrait
    + ClockTrait
    + WorkQueueTrait
    + IpcTrait
    + DmaTrait
    + DaiTrait
    + IntcTrait
{
}

impl<B> Board for B where
    B: ShimTrait
        + MailboxTrait
        + TraceTrait
        + TimerTrait
        + ClockTrait
        + WorkQueueTrait
        + IpcTrait
        + DmaTrait
        + DaiTrait
        + IntcTrait
{
}

/// A locked shim can be shared between driver contexts after boot.
impl<S: ShimTrait> ShimTrait for &Locked<S> {
    fn read(&self, reg: ShimReg) -> u32 {
        self.lock().read(reg)
    }

    fn write(&mut self, reg: ShimReg, value: u32) {
        self.lock().write(reg, value)
    }

    fn modify<R: RegisterLongName>(&mut self, reg: ShimReg, field: FieldValue<u32, R>) {
        self.lock().modify(reg, field)
    }
}
