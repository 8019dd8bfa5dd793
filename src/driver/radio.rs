//! Radio bus driver: register, subregister, frame, and SRAM access.
//!
//! All chip access flows through a single [`Radio`] handle owning the SPI
//! bus and the control lines. The SPI bus, the slave-select line, and every
//! chip register are one shared resource with no built-in locking, so every
//! transaction runs inside a critical section: the interrupt handler's own
//! bus use cannot interleave with a half-finished sequence. Slave-select is
//! asserted before the command byte and deasserted on every exit path,
//! including error returns.
//!
//! Operations are synchronous and blocking. There is no cancellation: a
//! transaction runs to completion once started. Timeouts, if needed, are
//! the caller's responsibility.

use embedded_hal::digital::{OutputPin, StatefulOutputPin};
use embedded_hal::spi::SpiBus;

use crate::driver::status::{InterruptStatus, TracStatus};
use crate::error::{BusError, Error, FrameError, Result};
use crate::hal::pins::{ControlPins, NoAux};
use crate::regs::{BusCommand, Field, MAX_FRAME_LENGTH, MIN_FRAME_LENGTH, Subregister, reg};

#[inline]
fn spi_err<E>(_: E) -> Error {
    BusError::Spi.into()
}

// =============================================================================
// Radio Driver
// =============================================================================

/// Owning handle for the radio's SPI bus and control lines.
///
/// Generic over the SPI bus and pin implementations. `SpiBus` is required
/// rather than `SpiDevice` because slave-select framing is part of the
/// chip protocol and is managed here.
#[derive(Debug)]
pub struct Radio<SPI, RST, SLP, SS, AUX = NoAux> {
    spi: SPI,
    pins: ControlPins<RST, SLP, SS, AUX>,
}

impl<SPI, RST, SLP, SS, AUX> Radio<SPI, RST, SLP, SS, AUX>
where
    SPI: SpiBus,
    RST: StatefulOutputPin,
    SLP: StatefulOutputPin,
    SS: OutputPin,
    AUX: OutputPin,
{
    /// Take ownership of the bus and control lines.
    ///
    /// Slave-select is deasserted so the first transaction starts from a
    /// known framing state.
    pub fn new(spi: SPI, mut pins: ControlPins<RST, SLP, SS, AUX>) -> Result<Self> {
        pins.ss_deassert()?;
        Ok(Self { spi, pins })
    }

    /// Run one slave-select-bracketed bus sequence with interrupts masked.
    ///
    /// Slave-select is deasserted and the interrupt mask restored on every
    /// exit path; a transfer error still closes the transaction.
    fn transaction<R>(&mut self, f: impl FnOnce(&mut SPI) -> Result<R>) -> Result<R> {
        critical_section::with(|_| {
            self.pins.ss_assert()?;
            let result = f(&mut self.spi);
            let deassert = self.pins.ss_deassert();
            let value = result?;
            deassert?;
            Ok(value)
        })
    }

    // =========================================================================
    // Register Access
    // =========================================================================

    /// Read one chip register
    pub fn register_read(&mut self, address: u8) -> Result<u8> {
        self.transaction(|spi| {
            let mut buf = [BusCommand::register_read(address), 0];
            spi.transfer_in_place(&mut buf).map_err(spi_err)?;
            Ok(buf[1])
        })
    }

    /// Write one chip register
    pub fn register_write(&mut self, address: u8, value: u8) -> Result<()> {
        self.transaction(|spi| {
            spi.write(&[BusCommand::register_write(address), value])
                .map_err(spi_err)
        })
    }

    // =========================================================================
    // Subregister Access
    // =========================================================================

    /// Read a bit-field, normalized to bit 0
    pub fn subregister_read(&mut self, sr: Subregister) -> Result<u8> {
        let raw = self.register_read(sr.addr)?;
        Ok(sr.extract(raw))
    }

    /// Write a bit-field, leaving all other register bits unchanged.
    ///
    /// This is a read-modify-write of the containing register and is not
    /// atomic against a concurrent interrupt-driven access to the same
    /// register; callers mutating shared registers from both main-line
    /// code and an interrupt handler must serialize explicitly.
    pub fn subregister_write(&mut self, sr: Subregister, value: u8) -> Result<()> {
        let raw = self.register_read(sr.addr)?;
        self.register_write(sr.addr, sr.insert(raw, value))
    }

    /// Read a named field from the descriptor table
    pub fn field_read(&mut self, field: Field) -> Result<u8> {
        self.subregister_read(field.subregister())
    }

    /// Write a named field from the descriptor table
    pub fn field_write(&mut self, field: Field, value: u8) -> Result<()> {
        self.subregister_write(field.subregister(), value)
    }

    // =========================================================================
    // Frame Transfer
    // =========================================================================

    /// Write a frame to the chip's frame buffer.
    ///
    /// The payload length is validated against the 3..=127 byte bound
    /// before any bus traffic; the chip command itself carries no length
    /// field, so the framing here is authoritative.
    pub fn frame_write(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() < MIN_FRAME_LENGTH as usize {
            return Err(FrameError::TooShort.into());
        }
        if payload.len() > MAX_FRAME_LENGTH as usize {
            return Err(FrameError::TooLong.into());
        }

        self.transaction(|spi| {
            spi.write(&[BusCommand::FrameWrite as u8, payload.len() as u8])
                .map_err(spi_err)?;
            spi.write(payload).map_err(spi_err)
        })
    }

    /// Read a frame from the chip's frame buffer into `dest`.
    ///
    /// The hardware-reported length is re-validated against the 3..=127
    /// byte bound before it touches `dest`; an out-of-bound value signals
    /// a corrupted or desynchronized transaction and aborts with
    /// [`FrameError`] (slave-select is still released). Returns the frame
    /// length on success.
    pub fn frame_read(&mut self, dest: &mut [u8]) -> Result<u8> {
        self.transaction(|spi| {
            let mut phr = [BusCommand::FrameRead as u8];
            spi.transfer_in_place(&mut phr).map_err(spi_err)?;

            spi.read(&mut phr).map_err(spi_err)?;
            let len = phr[0];
            if len < MIN_FRAME_LENGTH {
                return Err(FrameError::TooShort.into());
            }
            if len > MAX_FRAME_LENGTH {
                return Err(FrameError::TooLong.into());
            }
            let Some(dest) = dest.get_mut(..len as usize) else {
                return Err(FrameError::BufferTooSmall.into());
            };

            spi.read(dest).map_err(spi_err)?;
            Ok(len)
        })
    }

    // =========================================================================
    // SRAM Access
    // =========================================================================

    /// Read `dest.len()` bytes from chip SRAM starting at `address`
    pub fn sram_read(&mut self, address: u8, dest: &mut [u8]) -> Result<()> {
        self.transaction(|spi| {
            spi.write(&[BusCommand::SramRead as u8, address])
                .map_err(spi_err)?;
            spi.read(dest).map_err(spi_err)
        })
    }

    /// Write `data` into chip SRAM starting at `address`
    pub fn sram_write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        self.transaction(|spi| {
            spi.write(&[BusCommand::SramWrite as u8, address])
                .map_err(spi_err)?;
            spi.write(data).map_err(spi_err)
        })
    }

    // =========================================================================
    // Status Decoding
    // =========================================================================

    /// Read and decode the interrupt status register.
    ///
    /// Multiple event bits may be set in one read; the handler must act
    /// on each of them.
    pub fn irq_status(&mut self) -> Result<InterruptStatus> {
        let raw = self.register_read(reg::IRQ_STATUS)?;
        Ok(InterruptStatus::from_raw(raw))
    }

    /// Decode the outcome of the last transmit attempt
    pub fn trac_status(&mut self) -> Result<TracStatus> {
        let raw = self.field_read(Field::TracStatus)?;
        Ok(TracStatus::from_raw(raw))
    }

    /// Current state of the PLL-lock status bit
    pub fn pll_lock_flag(&mut self) -> Result<bool> {
        Ok(self.field_read(Field::IrqPllLock)? != 0)
    }

    /// Clear the PLL-lock status bit
    pub fn clear_pll_lock_flag(&mut self) -> Result<()> {
        self.field_write(Field::IrqPllLock, 0)
    }

    // =========================================================================
    // Control Lines
    // =========================================================================

    /// Pull the RST line high (release reset)
    pub fn set_rst_high(&mut self) -> Result<()> {
        Ok(self.pins.set_rst_high()?)
    }

    /// Pull the RST line low (hold the chip in reset)
    pub fn set_rst_low(&mut self) -> Result<()> {
        Ok(self.pins.set_rst_low()?)
    }

    /// Current level of the RST line
    pub fn rst_is_high(&mut self) -> Result<bool> {
        Ok(self.pins.rst_is_high()?)
    }

    /// Pull the SLP_TR line high
    pub fn set_slptr_high(&mut self) -> Result<()> {
        Ok(self.pins.set_slptr_high()?)
    }

    /// Pull the SLP_TR line low
    pub fn set_slptr_low(&mut self) -> Result<()> {
        Ok(self.pins.set_slptr_low()?)
    }

    /// Current level of the SLP_TR line
    pub fn slptr_is_high(&mut self) -> Result<bool> {
        Ok(self.pins.slptr_is_high()?)
    }

    /// Direct access to the control lines
    pub fn pins(&mut self) -> &mut ControlPins<RST, SLP, SS, AUX> {
        &mut self.pins
    }

    /// Release the bus and control lines
    pub fn free(self) -> (SPI, ControlPins<RST, SLP, SS, AUX>) {
        (self.spi, self.pins)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
