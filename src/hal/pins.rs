//! Discrete control lines of the radio transceiver.
//!
//! Four lines are controlled: reset (RST), sleep/trigger (SLP_TR),
//! slave-select (SS), and a board-specific auxiliary line (CW test mode on
//! boards that wire it). Reset and sleep/trigger support level readback;
//! slave-select additionally gets assert/deassert helpers that bracket one
//! SPI transaction.
//!
//! Operations are unconditional hardware writes. Sequencing is the
//! caller's responsibility: slave-select must be asserted before and
//! deasserted after a bus transaction, which [`crate::driver::Radio`]
//! handles internally.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::error::BusError;

// =============================================================================
// Control Pin Bundle
// =============================================================================

/// The radio's discrete control lines.
///
/// Generic over `embedded-hal` pin implementations so the same driver runs
/// on any port wiring; see [`crate::boards`] for the known board maps.
#[derive(Debug)]
pub struct ControlPins<RST, SLP, SS, AUX = NoAux> {
    rst: RST,
    slptr: SLP,
    ss: SS,
    aux: AUX,
}

impl<RST, SLP, SS> ControlPins<RST, SLP, SS, NoAux>
where
    RST: StatefulOutputPin,
    SLP: StatefulOutputPin,
    SS: OutputPin,
{
    /// Bundle the three mandatory lines on a board without an auxiliary pin
    pub fn without_aux(rst: RST, slptr: SLP, ss: SS) -> Self {
        Self {
            rst,
            slptr,
            ss,
            aux: NoAux,
        }
    }
}

impl<RST, SLP, SS, AUX> ControlPins<RST, SLP, SS, AUX>
where
    RST: StatefulOutputPin,
    SLP: StatefulOutputPin,
    SS: OutputPin,
    AUX: OutputPin,
{
    /// Bundle all four control lines
    pub fn new(rst: RST, slptr: SLP, ss: SS, aux: AUX) -> Self {
        Self {
            rst,
            slptr,
            ss,
            aux,
        }
    }

    // =========================================================================
    // Reset Line
    // =========================================================================

    /// Pull the RST line high (release reset)
    pub fn set_rst_high(&mut self) -> Result<(), BusError> {
        self.rst.set_high().map_err(|_| BusError::Pin)
    }

    /// Pull the RST line low (hold the chip in reset)
    pub fn set_rst_low(&mut self) -> Result<(), BusError> {
        self.rst.set_low().map_err(|_| BusError::Pin)
    }

    /// Current level of the RST line
    pub fn rst_is_high(&mut self) -> Result<bool, BusError> {
        self.rst.is_set_high().map_err(|_| BusError::Pin)
    }

    // =========================================================================
    // Sleep/Trigger Line
    // =========================================================================

    /// Pull the SLP_TR line high
    pub fn set_slptr_high(&mut self) -> Result<(), BusError> {
        self.slptr.set_high().map_err(|_| BusError::Pin)
    }

    /// Pull the SLP_TR line low
    pub fn set_slptr_low(&mut self) -> Result<(), BusError> {
        self.slptr.set_low().map_err(|_| BusError::Pin)
    }

    /// Current level of the SLP_TR line
    pub fn slptr_is_high(&mut self) -> Result<bool, BusError> {
        self.slptr.is_set_high().map_err(|_| BusError::Pin)
    }

    // =========================================================================
    // Slave-Select Line
    // =========================================================================

    /// Assert slave-select (active low), opening a bus transaction
    pub fn ss_assert(&mut self) -> Result<(), BusError> {
        self.ss.set_low().map_err(|_| BusError::Pin)
    }

    /// Deassert slave-select, closing the bus transaction
    pub fn ss_deassert(&mut self) -> Result<(), BusError> {
        self.ss.set_high().map_err(|_| BusError::Pin)
    }

    // =========================================================================
    // Auxiliary Line
    // =========================================================================

    /// Pull the auxiliary line high
    pub fn set_aux_high(&mut self) -> Result<(), BusError> {
        self.aux.set_high().map_err(|_| BusError::Pin)
    }

    /// Pull the auxiliary line low
    pub fn set_aux_low(&mut self) -> Result<(), BusError> {
        self.aux.set_low().map_err(|_| BusError::Pin)
    }

    /// Release the pins
    pub fn free(self) -> (RST, SLP, SS, AUX) {
        (self.rst, self.slptr, self.ss, self.aux)
    }
}

// =============================================================================
// Auxiliary Pin Placeholder
// =============================================================================

/// Placeholder for boards without the auxiliary control line.
///
/// Implements `OutputPin` as a no-op so [`ControlPins`] stays uniform
/// across board revisions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAux;

impl ErrorType for NoAux {
    type Error = Infallible;
}

impl OutputPin for NoAux {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
