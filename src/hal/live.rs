// SPDX-License-Identifier: Unlicense

//! Memory-mapped shim and mailbox.

use super::{
    ClockTrait, DaiTrait, DaiType, DmaId, DmaTrait, IntcTrait, IpcTrait, MailboxTrait, ShimTrait,
    TimerTrait, TraceTrait, WorkQueueTrait,
};
use crate::clk::ClockId;
use crate::memory::{MAILBOX_BASE, MAILBOX_SIZE};
use crate::shim::{ShimReg, IPCDH, IPCDL, MISC, PIMR, PISR, SHIM_BASE, SSP_DIVH};
use crate::timer::{ExternalTimer, WorkQueueTimesource};
use crate::trace::TracePoint;
use crate::util::locked::Locked;
use crate::Result;

use tock_registers::fields::FieldValue;
use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::ReadWrite;
use tock_registers::{register_structs, RegisterLongName};

use core::ptr;

register_structs! {
    /// Layout of the shim register block.
    pub ShimRegisters {
        (0x000 => _reserved0),
        (0x008 => pisr: ReadWrite<u32, PISR::Register>),
        (0x00c => _reserved1),
        (0x010 => pimr: ReadWrite<u32, PIMR::Register>),
        (0x014 => _reserved2),
        (0x040 => ipcdl: ReadWrite<u32, IPCDL::Register>),
        (0x044 => ipcdh: ReadWrite<u32, IPCDH::Register>),
        (0x048 => _reserved3),
        (0x088 => misc: ReadWrite<u32, MISC::Register>),
        (0x08c => _reserved4),
        (0x0e8 => ssp0_divl: ReadWrite<u32>),
        (0x0ec => ssp0_divh: ReadWrite<u32, SSP_DIVH::Register>),
        (0x0f0 => ssp1_divl: ReadWrite<u32>),
        (0x0f4 => ssp1_divh: ReadWrite<u32, SSP_DIVH::Register>),
        (0x0f8 => ssp2_divl: ReadWrite<u32>),
        (0x0fc => ssp2_divh: ReadWrite<u32, SSP_DIVH::Register>),
        (0x100 => @END),
    }
}

/// The shim register block.
pub struct LiveShim {
    base: *const ShimRegisters,
}

unsafe impl Sync for LiveShim {}
unsafe impl Send for LiveShim {}

impl LiveShim {
    /// The shim at its fixed physical address.
    pub const fn fixed() -> Self {
        unsafe { Self::at(SHIM_BASE as *const ShimRegisters) }
    }

    /// The shim at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to a register block, or memory standing in for
    /// one, that outlives the returned value.
    pub const unsafe fn at(base: *const ShimRegisters) -> Self {
        Self { base }
    }

    fn regs(&self) -> &ShimRegisters {
        unsafe { &*self.base }
    }
}

impl ShimTrait for LiveShim {
    fn read(&self, reg: ShimReg) -> u32 {
        let regs = self.regs();
        match reg {
            ShimReg::Pisr => regs.pisr.get(),
            ShimReg::Pimr => regs.pimr.get(),
            ShimReg::Ipcdl => regs.ipcdl.get(),
            ShimReg::Ipcdh => regs.ipcdh.get(),
            ShimReg::Misc => regs.misc.get(),
            ShimReg::Ssp0Divl => regs.ssp0_divl.get(),
            ShimReg::Ssp0Divh => regs.ssp0_divh.get(),
            ShimReg::Ssp1Divl => regs.ssp1_divl.get(),
            ShimReg::Ssp1Divh => regs.ssp1_divh.get(),
            ShimReg::Ssp2Divl => regs.ssp2_divl.get(),
            ShimReg::Ssp2Divh => regs.ssp2_divh.get(),
        }
    }

    fn write(&mut self, reg: ShimReg, value: u32) {
        let regs = self.regs();
        match reg {
            ShimReg::Pisr => regs.pisr.set(value),
            ShimReg::Pimr => regs.pimr.set(value),
            ShimReg::Ipcdl => regs.ipcdl.set(value),
            ShimReg::Ipcdh => regs.ipcdh.set(value),
            ShimReg::Misc => regs.misc.set(value),
            ShimReg::Ssp0Divl => regs.ssp0_divl.set(value),
            ShimReg::Ssp0Divh => regs.ssp0_divh.set(value),
            ShimReg::Ssp1Divl => regs.ssp1_divl.set(value),
            ShimReg::Ssp1Divh => regs.ssp1_divh.set(value),
            ShimReg::Ssp2Divl => regs.ssp2_divl.set(value),
            ShimReg::Ssp2Divh => regs.ssp2_divh.set(value),
        }
    }
}

/// The host-shared mailbox window.
pub struct LiveMailbox {
    base: *mut u8,
}

unsafe impl Sync for LiveMailbox {}
unsafe impl Send for LiveMailbox {}

impl LiveMailbox {
    /// The mailbox at its fixed DSP address.
    pub const fn fixed() -> Self {
        unsafe { Self::at(MAILBOX_BASE as *mut u8) }
    }

    /// The mailbox at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to `MAILBOX_SIZE` writable bytes that outlive the
    /// returned value.
    pub const unsafe fn at(base: *mut u8) -> Self {
        Self { base }
    }
}

impl MailboxTrait for LiveMailbox {
    fn zero(&mut self, offset: usize, len: usize) {
        debug_assert!(offset + len <= MAILBOX_SIZE);
        for i in offset..offset + len {
            unsafe { ptr::write_volatile(self.base.add(i), 0) };
        }
    }

    fn write(&mut self, offset: usize, bytes: &[u8]) {
        debug_assert!(offset + bytes.len() <= MAILBOX_SIZE);
        for (i, b) in bytes.iter().enumerate() {
            unsafe { ptr::write_volatile(self.base.add(offset + i), *b) };
        }
    }
}

/// Shim shared by bring-up and, later, the interface drivers.
pub static SHIM: Locked<LiveShim> = Locked::new(LiveShim::fixed());

/// Mailbox shared by bring-up and IPC.
pub static MAILBOX: Locked<LiveMailbox> = Locked::new(LiveMailbox::fixed());

/// The live board: memory-mapped hardware plus the firmware's collaborators.
///
/// `C` supplies the collaborator entry points; register and mailbox access
/// go through [`SHIM`] and [`MAILBOX`].
pub struct LiveBoard<C> {
    services: C,
}

impl<C> LiveBoard<C> {
    /// Bind the collaborators to the live hardware.
    pub const fn new(services: C) -> Self {
        Self { services }
    }
}

impl<C> ShimTrait for LiveBoard<C> {
    fn read(&self, reg: ShimReg) -> u32 {
        (&SHIM).read(reg)
    }

    fn write(&mut self, reg: ShimReg, value: u32) {
        (&SHIM).write(reg, value)
    }

    fn modify<R: RegisterLongName>(&mut self, reg: ShimReg, field: FieldValue<u32, R>) {
        (&SHIM).modify(reg, field)
    }
}

impl<C> MailboxTrait for LiveBoard<C> {
    fn zero(&mut self, offset: usize, len: usize) {
        MAILBOX.lock().zero(offset, len)
    }

    fn write(&mut self, offset: usize, bytes: &[u8]) {
        MAILBOX.lock().write(offset, bytes)
    }
}

impl<C: TraceTrait> TraceTrait for LiveBoard<C> {
    fn trace_point(&mut self, point: TracePoint) {
        self.services.trace_point(point)
    }
}

impl<C: TimerTrait> TimerTrait for LiveBoard<C> {
    fn timer_start(&mut self, timer: &ExternalTimer) -> Result<()> {
        self.services.timer_start(timer)
    }
}

impl<C: ClockTrait> ClockTrait for LiveBoard<C> {
    fn clocks_init(&mut self) -> Result<()> {
        self.services.clocks_init()
    }

    fn set_freq(&mut self, clock: ClockId, hz: u32) -> Result<()> {
        self.services.set_freq(clock, hz)
    }
}

impl<C: WorkQueueTrait> WorkQueueTrait for LiveBoard<C> {
    fn init_system_workq(&mut self, source: &WorkQueueTimesource) -> Result<()> {
        self.services.init_system_workq(source)
    }
}

impl<C: IpcTrait> IpcTrait for LiveBoard<C> {
    fn ipc_init(&mut self) -> Result<()> {
        self.services.ipc_init()
    }
}

impl<C: DmaTrait> DmaTrait for LiveBoard<C> {
    type Dma = C::Dma;

    fn dma_get(&mut self, id: DmaId) -> Option<Self::Dma> {
        self.services.dma_get(id)
    }

    fn dma_probe(&mut self, dma: &mut Self::Dma) -> Result<()> {
        self.services.dma_probe(dma)
    }
}

impl<C: DaiTrait> DaiTrait for LiveBoard<C> {
    type Dai = C::Dai;

    fn dai_get(&mut self, kind: DaiType, index: u32) -> Option<Self::Dai> {
        self.services.dai_get(kind, index)
    }

    fn dai_probe(&mut self, dai: &mut Self::Dai) -> Result<()> {
        self.services.dai_probe(dai)
    }
}

impl<C: IntcTrait> IntcTrait for LiveBoard<C> {
    fn interrupt_clear(&mut self, irq: u32) {
        self.services.interrupt_clear(irq)
    }
}
