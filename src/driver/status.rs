//! Interrupt status and transmit-result decoding.
//!
//! The interrupt handler reads the interrupt status register once and
//! decodes every set bit; multiple events may be pending simultaneously
//! and each must be handled. The transmit-result (TRAC) code is a
//! three-bit field with a hardware-reserved gap in its value space that
//! decoding must preserve.

use crate::regs::{
    IRQ_BAT_LOW, IRQ_PLL_LOCK, IRQ_PLL_UNLOCK, IRQ_RX_START, IRQ_TRX_END, IRQ_TRX_UR,
};

// =============================================================================
// Interrupt Status
// =============================================================================

/// Interrupt status flags parsed from the interrupt status register.
///
/// This structure provides a convenient way to check which events
/// have occurred without manually parsing the raw register bits.
///
/// # Example
///
/// ```ignore
/// // Inside the radio interrupt handler:
/// let status = InterruptStatus::from_raw(radio.register_read(reg::IRQ_STATUS)?);
/// if status.trx_end {
///     // Frame completed
/// }
/// if status.rx_start {
///     // Reception started; timestamp it
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// Battery voltage below the configured threshold
    pub bat_low: bool,
    /// Frame buffer underrun during transmit
    pub trx_underrun: bool,
    /// Frame transmission/reception completed
    pub trx_end: bool,
    /// Start of frame reception detected
    pub rx_start: bool,
    /// PLL lost lock
    pub pll_unlock: bool,
    /// PLL acquired lock
    pub pll_lock: bool,
}

impl InterruptStatus {
    /// Create from a raw interrupt status register value
    #[inline]
    pub fn from_raw(status: u8) -> Self {
        Self {
            bat_low: (status & IRQ_BAT_LOW) != 0,
            trx_underrun: (status & IRQ_TRX_UR) != 0,
            trx_end: (status & IRQ_TRX_END) != 0,
            rx_start: (status & IRQ_RX_START) != 0,
            pll_unlock: (status & IRQ_PLL_UNLOCK) != 0,
            pll_lock: (status & IRQ_PLL_LOCK) != 0,
        }
    }

    /// Convert back to the raw bit layout
    #[inline]
    pub fn to_raw(&self) -> u8 {
        let mut val = 0u8;
        if self.bat_low {
            val |= IRQ_BAT_LOW;
        }
        if self.trx_underrun {
            val |= IRQ_TRX_UR;
        }
        if self.trx_end {
            val |= IRQ_TRX_END;
        }
        if self.rx_start {
            val |= IRQ_RX_START;
        }
        if self.pll_unlock {
            val |= IRQ_PLL_UNLOCK;
        }
        if self.pll_lock {
            val |= IRQ_PLL_LOCK;
        }
        val
    }

    /// Check if any event is pending
    #[inline]
    pub fn any(&self) -> bool {
        self.bat_low
            || self.trx_underrun
            || self.trx_end
            || self.rx_start
            || self.pll_unlock
            || self.pll_lock
    }

    /// Check if any error-class event is pending
    #[inline]
    pub fn has_error(&self) -> bool {
        self.bat_low || self.trx_underrun || self.pll_unlock
    }
}

// =============================================================================
// Transmit Result (TRAC) Status
// =============================================================================

/// Chip-reported outcome of a transmit attempt.
///
/// The discriminants are chip-defined and not contiguous: value 4 is a
/// hardware-reserved gap and value 6 is unused. Raw values outside the
/// enumerated set decode to [`TracStatus::Unknown`] rather than being
/// coerced to any specific known outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TracStatus {
    /// Transmit completed successfully (0)
    Success,
    /// Transmit succeeded; peer signalled pending data (1)
    SuccessDataPending,
    /// Transmit succeeded; acknowledgement outstanding (2)
    SuccessWaitForAck,
    /// Channel access failed after CSMA-CA retries (3)
    ChannelAccessFailure,
    /// No acknowledgement received (5)
    NoAck,
    /// Invalid transmit attempt (7)
    Invalid,
    /// Raw value outside the enumerated set (4, 6, or out of field range)
    Unknown(u8),
}

impl TracStatus {
    /// Decode the raw three-bit field value
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => TracStatus::Success,
            1 => TracStatus::SuccessDataPending,
            2 => TracStatus::SuccessWaitForAck,
            3 => TracStatus::ChannelAccessFailure,
            5 => TracStatus::NoAck,
            7 => TracStatus::Invalid,
            other => TracStatus::Unknown(other),
        }
    }

    /// True for any of the success outcomes
    pub const fn is_success(&self) -> bool {
        matches!(
            self,
            TracStatus::Success | TracStatus::SuccessDataPending | TracStatus::SuccessWaitForAck
        )
    }

    /// Returns a human-readable description of the outcome
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TracStatus::Success => "success",
            TracStatus::SuccessDataPending => "success, data pending",
            TracStatus::SuccessWaitForAck => "success, waiting for ack",
            TracStatus::ChannelAccessFailure => "channel access failure",
            TracStatus::NoAck => "no ack",
            TracStatus::Invalid => "invalid",
            TracStatus::Unknown(_) => "unknown status code",
        }
    }
}

impl core::fmt::Display for TracStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
