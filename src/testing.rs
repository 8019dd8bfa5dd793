//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the HAL on the
//! host without hardware access: a behavioral model of the transceiver's
//! SPI protocol, mock control pins, and a mock tick timer.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{self, OutputPin, StatefulOutputPin};
use embedded_hal::spi::{self, SpiBus};

use crate::hal::clock::{SymbolPrescaler, TickTimer};

// =============================================================================
// Transceiver Chip Model
// =============================================================================

/// Per-transaction protocol phase, reset on each slave-select assert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    /// Waiting for the command byte
    Idle,
    /// Serving reads of one register
    RegRead(u8),
    /// Next byte stores into one register
    RegWrite(u8),
    /// Next byte clocked out is the frame length
    FrameReadLen,
    /// Serving frame payload bytes
    FrameReadData(usize),
    /// Next byte clocked in is the declared frame length
    FrameWriteLen,
    /// Storing frame payload bytes
    FrameWriteData,
    /// Next byte is the SRAM start address (`true` = write access)
    SramAddr(bool),
    /// Serving SRAM bytes from an offset
    SramRead(usize),
    /// Storing SRAM bytes at an offset
    SramWrite(usize),
}

/// Behavioral model of the chip's SPI protocol.
///
/// Decodes command bytes and serves register, frame-buffer, and SRAM
/// accesses byte by byte, exactly as the bus clocks them. Ignores traffic
/// while slave-select is deasserted.
#[derive(Debug)]
struct ChipModel {
    regs: [u8; 0x40],
    frame: Vec<u8>,
    sram: [u8; 0x80],
    /// Served instead of the real frame length, for corruption tests
    frame_len_override: Option<u8>,
    /// First byte of every transaction
    cmd_log: Vec<u8>,
    ss_low: bool,
    xfer: Transfer,
}

impl ChipModel {
    fn new() -> Self {
        Self {
            regs: [0; 0x40],
            frame: Vec::new(),
            sram: [0; 0x80],
            frame_len_override: None,
            cmd_log: Vec::new(),
            ss_low: false,
            xfer: Transfer::Idle,
        }
    }

    /// Clock one byte out to the chip, returning the byte clocked back in
    fn exchange(&mut self, out: u8) -> u8 {
        if !self.ss_low {
            return 0;
        }

        match self.xfer {
            Transfer::Idle => {
                self.cmd_log.push(out);
                self.xfer = match out {
                    0x20 => Transfer::FrameReadLen,
                    0x60 => Transfer::FrameWriteLen,
                    0x00 => Transfer::SramAddr(false),
                    0x40 => Transfer::SramAddr(true),
                    cmd if cmd & 0xC0 == 0xC0 => Transfer::RegWrite(cmd & 0x3F),
                    cmd if cmd & 0xC0 == 0x80 => Transfer::RegRead(cmd & 0x3F),
                    _ => Transfer::Idle,
                };
                0
            }
            Transfer::RegRead(addr) => self.regs[addr as usize],
            Transfer::RegWrite(addr) => {
                self.regs[addr as usize] = out;
                self.xfer = Transfer::Idle;
                0
            }
            Transfer::FrameReadLen => {
                self.xfer = Transfer::FrameReadData(0);
                self.frame_len_override
                    .unwrap_or(self.frame.len() as u8)
            }
            Transfer::FrameReadData(i) => {
                self.xfer = Transfer::FrameReadData(i + 1);
                self.frame.get(i).copied().unwrap_or(0)
            }
            Transfer::FrameWriteLen => {
                self.frame.clear();
                self.xfer = Transfer::FrameWriteData;
                0
            }
            Transfer::FrameWriteData => {
                self.frame.push(out);
                0
            }
            Transfer::SramAddr(write) => {
                let offset = out as usize;
                self.xfer = if write {
                    Transfer::SramWrite(offset)
                } else {
                    Transfer::SramRead(offset)
                };
                0
            }
            Transfer::SramRead(i) => {
                self.xfer = Transfer::SramRead(i + 1);
                self.sram.get(i).copied().unwrap_or(0)
            }
            Transfer::SramWrite(i) => {
                if let Some(slot) = self.sram.get_mut(i) {
                    *slot = out;
                }
                self.xfer = Transfer::SramWrite(i + 1);
                0
            }
        }
    }
}

/// Shared handle to one [`ChipModel`] instance.
///
/// Clones of the handle (and the SPI/pin mocks derived from it) all see
/// the same chip state, so a test can drive the driver through one clone
/// and inspect hardware effects through another.
#[derive(Debug, Clone)]
pub struct ChipHandle {
    chip: Rc<RefCell<ChipModel>>,
}

impl ChipHandle {
    pub fn new() -> Self {
        Self {
            chip: Rc::new(RefCell::new(ChipModel::new())),
        }
    }

    /// SPI bus mock attached to this chip
    pub fn spi(&self) -> MockSpi {
        MockSpi {
            chip: Rc::clone(&self.chip),
        }
    }

    /// Slave-select pin mock attached to this chip
    pub fn ss_pin(&self) -> MockSsPin {
        MockSsPin {
            chip: Rc::clone(&self.chip),
        }
    }

    /// Set a register value directly (simulated hardware event)
    pub fn set_reg(&self, addr: u8, value: u8) {
        self.chip.borrow_mut().regs[addr as usize] = value;
    }

    /// Current value of a register
    pub fn reg(&self, addr: u8) -> u8 {
        self.chip.borrow().regs[addr as usize]
    }

    /// Contents of the frame buffer
    pub fn frame(&self) -> Vec<u8> {
        self.chip.borrow().frame.clone()
    }

    /// Serve this length byte on the next frame read, regardless of the
    /// real buffer contents
    pub fn set_frame_len_override(&self, len: u8) {
        self.chip.borrow_mut().frame_len_override = Some(len);
    }

    /// First command byte of every transaction so far
    pub fn cmd_log(&self) -> Vec<u8> {
        self.chip.borrow().cmd_log.clone()
    }

    /// Whether slave-select is currently asserted (low)
    pub fn ss_asserted(&self) -> bool {
        self.chip.borrow().ss_low
    }
}

impl Default for ChipHandle {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Mock SPI Bus
// =============================================================================

/// SPI bus mock clocking bytes through the attached [`ChipModel`]
#[derive(Debug)]
pub struct MockSpi {
    chip: Rc<RefCell<ChipModel>>,
}

impl spi::ErrorType for MockSpi {
    type Error = Infallible;
}

impl SpiBus<u8> for MockSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let mut chip = self.chip.borrow_mut();
        for word in words {
            *word = chip.exchange(0);
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut chip = self.chip.borrow_mut();
        for &word in words {
            chip.exchange(word);
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        let mut chip = self.chip.borrow_mut();
        let len = read.len().max(write.len());
        for i in 0..len {
            let out = write.get(i).copied().unwrap_or(0);
            let response = chip.exchange(out);
            if let Some(slot) = read.get_mut(i) {
                *slot = response;
            }
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let mut chip = self.chip.borrow_mut();
        for word in words {
            *word = chip.exchange(*word);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// Mock Pins
// =============================================================================

/// Slave-select pin mock; asserting it arms the chip's command decoder
#[derive(Debug)]
pub struct MockSsPin {
    chip: Rc<RefCell<ChipModel>>,
}

impl digital::ErrorType for MockSsPin {
    type Error = Infallible;
}

impl OutputPin for MockSsPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut chip = self.chip.borrow_mut();
        chip.ss_low = true;
        chip.xfer = Transfer::Idle;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut chip = self.chip.borrow_mut();
        chip.ss_low = false;
        chip.xfer = Transfer::Idle;
        Ok(())
    }
}

/// Plain level-holding pin mock for reset, sleep/trigger, and auxiliary
/// lines. Clones share one level so tests can observe driver writes.
#[derive(Debug, Clone, Default)]
pub struct MockPin {
    level: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pin level (for test verification)
    pub fn is_high(&self) -> bool {
        self.level.get()
    }
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

// =============================================================================
// Mock Tick Timer
// =============================================================================

#[derive(Debug, Default)]
struct TimerState {
    count: u32,
    prescaler: Option<SymbolPrescaler>,
    capture_irq: bool,
    overflow_irq: bool,
}

/// Tick timer mock with an externally settable counter.
///
/// Clones share one state so a test can advance the counter while the
/// symbol clock owns another clone.
#[derive(Debug, Clone, Default)]
pub struct MockTimer {
    state: Rc<RefCell<TimerState>>,
}

impl MockTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the counter to a value (for test verification)
    pub fn set_count(&self, count: u32) {
        self.state.borrow_mut().count = count;
    }

    /// Prescaler selected by `configure`, if any
    pub fn prescaler(&self) -> Option<SymbolPrescaler> {
        self.state.borrow().prescaler
    }

    pub fn capture_interrupt_enabled(&self) -> bool {
        self.state.borrow().capture_irq
    }

    pub fn overflow_interrupt_enabled(&self) -> bool {
        self.state.borrow().overflow_irq
    }
}

impl TickTimer for MockTimer {
    fn configure(&mut self, prescaler: SymbolPrescaler) {
        self.state.borrow_mut().prescaler = Some(prescaler);
    }

    fn count(&self) -> u32 {
        self.state.borrow().count
    }

    fn enable_capture_interrupt(&mut self) {
        self.state.borrow_mut().capture_irq = true;
    }

    fn disable_capture_interrupt(&mut self) {
        self.state.borrow_mut().capture_irq = false;
    }

    fn enable_overflow_interrupt(&mut self) {
        self.state.borrow_mut().overflow_irq = true;
    }

    fn disable_overflow_interrupt(&mut self) {
        self.state.borrow_mut().overflow_irq = false;
    }
}
