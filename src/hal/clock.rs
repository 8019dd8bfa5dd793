//! Symbol clock: symbol-accurate timekeeping on a free-running counter.
//!
//! The radio's timing (carrier-sense windows, backoff, ack waits) is
//! measured in symbol periods. A hardware counter is configured so one tick
//! equals a fixed real-time unit; the prescaler, the microseconds-per-unit
//! scale, and the wraparound mask are derived from the CPU clock frequency
//! at initialization and stay immutable afterwards.
//!
//! The counter free-runs and wraps at its mask boundary. Elapsed-time
//! computation accounts for wraparound with `(end - start) & mask`.

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Derived Configuration
// =============================================================================

/// Counter prescaler selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SymbolPrescaler {
    /// CPU clock divided by 8
    Div8,
    /// CPU clock divided by 64
    Div64,
    /// CPU clock divided by 256
    Div256,
}

/// Constants derived from the CPU clock frequency.
///
/// Selected once by [`SymbolClockConfig::from_cpu_hz`]; immutable for the
/// process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SymbolClockConfig {
    /// Prescaler feeding the tick counter
    pub prescaler: SymbolPrescaler,
    /// Microseconds represented by one counter unit
    pub us_per_symbol: u32,
    /// Wraparound mask sizing the counter range to the achievable resolution
    pub symbol_mask: u32,
}

impl SymbolClockConfig {
    /// Derive the configuration for a CPU clock frequency in Hz.
    ///
    /// The supported set is 1, 4, 8, and 16 MHz. Anything else is a fatal
    /// configuration error: callers must halt before the clock runs.
    pub const fn from_cpu_hz(cpu_hz: u32) -> ConfigResult<Self> {
        match cpu_hz {
            16_000_000 => Ok(Self {
                prescaler: SymbolPrescaler::Div256,
                us_per_symbol: 1,
                symbol_mask: 0xFFFF_FFFF,
            }),
            8_000_000 => Ok(Self {
                prescaler: SymbolPrescaler::Div64,
                us_per_symbol: 2,
                symbol_mask: 0x7FFF_FFFF,
            }),
            4_000_000 => Ok(Self {
                prescaler: SymbolPrescaler::Div64,
                us_per_symbol: 1,
                symbol_mask: 0xFFFF_FFFF,
            }),
            1_000_000 => Ok(Self {
                prescaler: SymbolPrescaler::Div8,
                us_per_symbol: 2,
                symbol_mask: 0x7FFF_FFFF,
            }),
            _ => Err(ConfigError::UnsupportedCpuClock),
        }
    }
}

// =============================================================================
// Tick Timer Trait
// =============================================================================

/// Hardware seam for the tick counter peripheral.
///
/// Implement this for the MCU timer that captures radio events. The two
/// interrupt sources are independently maskable so the driver can silence
/// one event class while still receiving the other.
pub trait TickTimer {
    /// Configure the counter to free-run at the given prescaler
    fn configure(&mut self, prescaler: SymbolPrescaler);

    /// Current counter value
    fn count(&self) -> u32;

    /// Enable the capture-on-event interrupt source
    fn enable_capture_interrupt(&mut self);

    /// Disable the capture-on-event interrupt source
    fn disable_capture_interrupt(&mut self);

    /// Enable the counter-overflow interrupt source
    fn enable_overflow_interrupt(&mut self);

    /// Disable the counter-overflow interrupt source
    fn disable_overflow_interrupt(&mut self);
}

// =============================================================================
// Symbol Clock
// =============================================================================

/// Symbol-accurate clock over a [`TickTimer`].
///
/// Constructed only through [`SymbolClock::init`], so a value of this type
/// is always in the running state with a valid derived configuration.
#[derive(Debug)]
pub struct SymbolClock<T: TickTimer> {
    timer: T,
    config: SymbolClockConfig,
}

impl<T: TickTimer> SymbolClock<T> {
    /// Derive the configuration from `cpu_hz` and start the counter.
    ///
    /// Fails fast with [`ConfigError::UnsupportedCpuClock`] for any
    /// frequency outside the supported set.
    pub fn init(mut timer: T, cpu_hz: u32) -> ConfigResult<Self> {
        let config = SymbolClockConfig::from_cpu_hz(cpu_hz)?;
        timer.configure(config.prescaler);
        Ok(Self { timer, config })
    }

    /// The derived configuration
    pub fn config(&self) -> SymbolClockConfig {
        self.config
    }

    /// Current counter value, masked to the usable range
    pub fn now(&self) -> u32 {
        self.timer.count() & self.config.symbol_mask
    }

    /// Ticks elapsed since `start`, correct across one wraparound
    pub fn ticks_since(&self, start: u32) -> u32 {
        self.now().wrapping_sub(start) & self.config.symbol_mask
    }

    /// Microseconds elapsed since `start`, correct across one wraparound
    pub fn elapsed_us(&self, start: u32) -> u32 {
        self.ticks_since(start)
            .wrapping_mul(self.config.us_per_symbol)
    }

    /// Enable the radio-event (capture) interrupt source
    pub fn enable_radio_interrupt(&mut self) {
        self.timer.enable_capture_interrupt();
    }

    /// Disable the radio-event (capture) interrupt source
    pub fn disable_radio_interrupt(&mut self) {
        self.timer.disable_capture_interrupt();
    }

    /// Enable the overflow interrupt source
    pub fn enable_overflow_interrupt(&mut self) {
        self.timer.enable_overflow_interrupt();
    }

    /// Disable the overflow interrupt source
    pub fn disable_overflow_interrupt(&mut self) {
        self.timer.disable_overflow_interrupt();
    }

    /// Direct access to the underlying timer
    pub fn timer(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Release the timer
    pub fn free(self) -> T {
        self.timer
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
