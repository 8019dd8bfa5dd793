//! Radio driver layer.
//!
//! # Modules
//!
//! - [`radio`]: The owning bus handle with register, subregister, frame,
//!   and SRAM access
//! - [`status`]: Interrupt status and transmit-result decoding

pub mod radio;
pub mod status;

// Re-export commonly used types
pub use radio::Radio;
pub use status::{InterruptStatus, TracStatus};
