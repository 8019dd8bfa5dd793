//! Hardware Abstraction Layer
//!
//! This module holds the hardware seams of the driver: the discrete control
//! lines and the symbol-accurate tick counter.
//!
//! # Modules
//!
//! - [`pins`]: Reset, sleep/trigger, slave-select, and auxiliary lines
//! - [`clock`]: Symbol clock configuration and control
//!
//! The SPI bus itself is taken as any `embedded_hal::spi::SpiBus`
//! implementation; slave-select framing is managed by the driver, not the
//! SPI peripheral.

pub mod clock;
pub mod pins;

// Re-export commonly used types
pub use clock::{SymbolClock, SymbolClockConfig, SymbolPrescaler, TickTimer};
pub use pins::{ControlPins, NoAux};
