// SPDX-License-Identifier: Unlicense

//! Platform bring-up sequence.
//!
//! Bring-up is a fixed list of steps. Each step relies on the hardware state
//! left by the ones before it, so the list runs in order, once, and stops at
//! the first failure. A checkpoint is traced before every step; after a
//! failed boot the last checkpoint shows where it stopped.
//!
//! There is no guard against running the sequence twice: a second run clears
//! the mailbox and repeats every step.

use crate::clk::{ClockId, CLK_MAX_CPU_HZ, CLK_SSP_HZ};
use crate::hal::{Board, DaiType, DmaId};
use crate::memory::MAILBOX_SIZE;
use crate::shim::{self, ShimReg};
use crate::timer::{PLATFORM_EXT_TIMER, PLATFORM_GENERIC_QUEUE};
use crate::trace::TracePoint;
use crate::{Error, Result};

use core::fmt;
use log::{debug, error, info};

/// A bring-up step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BootStep {
    /// Clear the mailbox so early readers never see stale data.
    Mailbox,
    /// Set the miscellaneous shim control bits.
    Shim,
    /// Start the external timer.
    Timer,
    /// Initialise platform clocks.
    Clock,
    /// Initialise the system work queue on the external timer.
    WorkQueue,
    /// Run the CPU flat out while booting.
    CpuFreq,
    /// Set the SSP reference clock.
    SspFreq,
    /// Initialise host IPC.
    Ipc,
    /// Get and probe the DMA controllers.
    Dma,
    /// Mask the SSP interrupt lines.
    IrqMask,
    /// Get and probe the SSP ports.
    Dai,
}

/// Bring-up order.
pub const BOOT_STEPS: [BootStep; 11] = [
    BootStep::Mailbox,
    BootStep::Shim,
    BootStep::Timer,
    BootStep::Clock,
    BootStep::WorkQueue,
    BootStep::CpuFreq,
    BootStep::SspFreq,
    BootStep::Ipc,
    BootStep::Dma,
    BootStep::IrqMask,
    BootStep::Dai,
];

/// DMA controllers probed at boot, in order.
pub const DMA_CONTROLLERS: [DmaId; 2] = [DmaId::Dmac0, DmaId::Dmac1];

/// Number of SSP DAIs probed at boot.
pub const SSP_DAI_COUNT: u32 = 2;

impl BootStep {
    /// Checkpoint traced before the step.
    pub const fn checkpoint(self) -> TracePoint {
        match self {
            Self::Mailbox => TracePoint::PlatformMbox,
            Self::Shim => TracePoint::PlatformShim,
            Self::Timer => TracePoint::PlatformTimer,
            Self::Clock => TracePoint::PlatformClock,
            Self::WorkQueue => TracePoint::SysWork,
            Self::CpuFreq => TracePoint::SysCpuFreq,
            Self::SspFreq => TracePoint::PlatformSspFreq,
            Self::Ipc => TracePoint::PlatformIpc,
            Self::Dma => TracePoint::PlatformDma,
            Self::IrqMask => TracePoint::PlatformIrq,
            Self::Dai => TracePoint::PlatformSsp,
        }
    }
}

/// Where and why bring-up stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BootFailure {
    /// Step that failed.
    pub step: BootStep,
    /// Last step that completed, if any.
    pub last_completed: Option<BootStep>,
    /// Error from the failing step.
    pub cause: Error,
}

impl BootFailure {
    /// Status code for the firmware ABI.
    pub const fn errno(&self) -> i32 {
        self.cause.errno()
    }
}

impl fmt::Display for BootFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} failed ({}) after {:?}",
            self.step, self.cause, self.last_completed
        )
    }
}

/// Run every step in order.
///
/// Returns the last step completed, or where bring-up stopped.
pub fn run<B: Board>(board: &mut B) -> core::result::Result<Option<BootStep>, BootFailure> {
    info!("init");
    BOOT_STEPS
        .iter()
        .try_fold(None, |last_completed, &step| -> core::result::Result<_, BootFailure> {
            board.trace_point(step.checkpoint());
            debug!("{:?}", step);
            run_step(board, step).map_err(|cause| {
                let failure = BootFailure {
                    step,
                    last_completed,
                    cause,
                };
                error!("{}", failure);
                failure
            })?;
            Ok(Some(step))
        })
}

fn run_step<B: Board>(board: &mut B, step: BootStep) -> Result<()> {
    match step {
        BootStep::Mailbox => {
            board.zero(0, MAILBOX_SIZE);
            Ok(())
        }
        BootStep::Shim => {
            board.modify(ShimReg::Misc, shim::misc_boot());
            Ok(())
        }
        BootStep::Timer => board.timer_start(&PLATFORM_EXT_TIMER),
        BootStep::Clock => board.clocks_init(),
        BootStep::WorkQueue => board.init_system_workq(&PLATFORM_GENERIC_QUEUE),
        BootStep::CpuFreq => board.set_freq(ClockId::Cpu, CLK_MAX_CPU_HZ),
        BootStep::SspFreq => board.set_freq(ClockId::Ssp, CLK_SSP_HZ),
        BootStep::Ipc => board.ipc_init(),
        BootStep::Dma => probe_dma(board),
        BootStep::IrqMask => {
            board.modify(ShimReg::Pimr, shim::pimr_ssp_masked());
            Ok(())
        }
        BootStep::Dai => probe_ssp(board),
    }
}

fn probe_dma<B: Board>(board: &mut B) -> Result<()> {
    for &id in DMA_CONTROLLERS.iter() {
        let mut dma = board.dma_get(id).ok_or(Error::DeviceNotFound)?;
        board.dma_probe(&mut dma)?;
    }
    Ok(())
}

fn probe_ssp<B: Board>(board: &mut B) -> Result<()> {
    for index in 0..SSP_DAI_COUNT {
        let mut dai = board
            .dai_get(DaiType::Ssp, index)
            .ok_or(Error::DeviceNotFound)?;
        board.dai_probe(&mut dai)?;
    }
    Ok(())
}
