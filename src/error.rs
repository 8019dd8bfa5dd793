//! Error types for the AT86RF23x HAL
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Initialization and configuration failures
//! - [`FrameError`]: Frame length and buffer violations
//! - [`BusError`]: SPI/pin transport failures
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and initialization errors
///
/// These errors occur while deriving the symbol-clock constants at startup.
/// They are fatal: the driver never reaches its running state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// CPU clock frequency is not in the supported set (1/4/8/16 MHz)
    UnsupportedCpuClock,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::UnsupportedCpuClock => "unsupported CPU clock frequency",
        }
    }
}

// =============================================================================
// Frame Errors
// =============================================================================

/// Frame length and buffer errors
///
/// A link-layer frame must carry between 3 and 127 bytes. Lengths outside
/// that range are rejected before any bus traffic (write path) or any
/// buffer indexing (read path). A hardware-reported length out of bound
/// signals a corrupted or desynchronized transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Frame length below the 3-byte minimum
    TooShort,
    /// Frame length above the 127-byte maximum
    TooLong,
    /// Destination buffer smaller than the received frame
    BufferTooSmall,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FrameError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FrameError::TooShort => "frame shorter than 3 bytes",
            FrameError::TooLong => "frame longer than 127 bytes",
            FrameError::BufferTooSmall => "buffer too small for frame",
        }
    }
}

// =============================================================================
// Bus Errors
// =============================================================================

/// SPI bus and control-line transport errors
///
/// The protocol assumes a responsive chip; these variants only surface
/// failures reported by the underlying `embedded-hal` implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// SPI transfer failed
    Spi,
    /// Control line (reset, sleep/trigger, slave-select) operation failed
    Pin,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BusError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BusError::Spi => "SPI transfer failed",
            BusError::Pin => "control line operation failed",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::UnsupportedCpuClock)) => { /* ... */ }
///     Err(Error::Frame(FrameError::TooLong)) => { /* ... */ }
///     Err(Error::Bus(BusError::Spi)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Frame length/buffer error
    Frame(FrameError),
    /// Bus transport error
    Bus(BusError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Frame(e) => write!(f, "frame: {}", e.as_str()),
            Error::Bus(e) => write!(f, "bus: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<FrameError> for Error {
    fn from(e: FrameError) -> Self {
        Error::Frame(e)
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

/// Result type alias for HAL operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
