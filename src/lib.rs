//! AT86RF23x Radio HAL
//!
//! A `no_std`, `no_alloc` hardware abstraction layer for AT86RF23x-class
//! IEEE 802.15.4 radio transceivers attached over SPI plus discrete
//! control lines (reset, sleep/trigger, slave-select, and a board
//! auxiliary pin).
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **Driver Layer** ([`driver::radio`]): Register, subregister, frame,
//!    and SRAM access over the shared SPI bus
//! 2. **Status Layer** ([`driver::status`]): Interrupt-status and
//!    transmit-result decoding for the radio interrupt handler
//! 3. **HAL Layer** ([`hal`]): Control lines and the symbol-accurate tick
//!    counter
//!
//! The upper MAC/PHY protocol logic builds on these primitives; it is not
//! part of this crate, and neither is the chip's register-map semantics
//! beyond the generic access mechanism.
//!
//! # Concurrency
//!
//! There is a single execution context plus preemptive interrupt handlers.
//! The SPI bus, the slave-select line, and every chip register are one
//! shared resource: every multi-step bus sequence runs inside a
//! `critical-section` scope, with the interrupt mask restored on all exit
//! paths. Subregister read-modify-write spans two transactions and is not
//! atomic against an ISR touching the same register; such callers must
//! serialize explicitly.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public data types
//!
//! # Example
//!
//! ```ignore
//! use ph_at86rf_hal::{ControlPins, Radio, SymbolClock, regs};
//!
//! // SPI bus and pins come from your MCU HAL
//! let pins = ControlPins::new(rst, slptr, ss, cw);
//! let mut radio = Radio::new(spi, pins)?;
//!
//! // Symbol clock derived from the CPU frequency; unsupported values
//! // fail fast before anything runs
//! let mut clock = SymbolClock::init(timer, 8_000_000)?;
//! clock.enable_radio_interrupt();
//!
//! radio.register_write(regs::reg::TRX_CTRL_0, 0x19)?;
//! radio.frame_write(&payload)?;
//!
//! // Inside the radio ISR:
//! let status = radio.irq_status()?;
//! if status.trx_end {
//!     let trac = radio.trac_status()?;
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live in Cargo.toml [lints]; these mirror the ones we
// always want enforced locally.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]

// =============================================================================
// Modules
// =============================================================================

pub mod boards;
pub mod driver;
pub mod error;
pub mod hal;
pub mod regs;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::radio::Radio;
pub use driver::status::{InterruptStatus, TracStatus};
pub use error::{BusError, ConfigError, ConfigResult, Error, FrameError, Result};
pub use hal::clock::{SymbolClock, SymbolClockConfig, SymbolPrescaler, TickTimer};
pub use hal::pins::{ControlPins, NoAux};
pub use regs::{BusCommand, Field, MAX_FRAME_LENGTH, MIN_FRAME_LENGTH, Subregister};

// Re-export board types
pub use boards::{BoardPinMap, BoardRevision, Port, PortPin};
