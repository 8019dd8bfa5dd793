//! AT86RF23x register map data: addresses, bus commands, interrupt masks,
//! and subregister (bit-field) descriptors.
//!
//! Everything in this module is data, not logic. The access functions in
//! [`crate::driver::radio`] are generic over these descriptors; nothing is
//! hard-coded per field.

// =============================================================================
// Register Addresses
// =============================================================================

/// Register addresses used by the HAL itself.
///
/// Only the generic access mechanism lives in this crate; the full register
/// map (channel, power, addressing) belongs to the MAC layer on top.
pub mod reg {
    /// Transceiver status register
    pub const TRX_STATUS: u8 = 0x01;
    /// Transceiver state control register (also carries TRAC status)
    pub const TRX_STATE: u8 = 0x02;
    /// Transceiver control register 0
    pub const TRX_CTRL_0: u8 = 0x03;
    /// Interrupt mask register
    pub const IRQ_MASK: u8 = 0x0E;
    /// Interrupt status register
    pub const IRQ_STATUS: u8 = 0x0F;
    /// Voltage regulator control register
    pub const VREG_CTRL: u8 = 0x10;
    /// Battery monitor register
    pub const BATMON: u8 = 0x11;
    /// Part number register
    pub const PART_NUM: u8 = 0x1C;
    /// Version number register
    pub const VERSION_NUM: u8 = 0x1D;
}

// =============================================================================
// SPI Bus Commands
// =============================================================================

/// First-byte commands of the SPI protocol.
///
/// Register commands carry the register address in their low six bits;
/// frame and SRAM commands are fixed bytes followed by clocked data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BusCommand {
    /// Register read: `0x80 | address`
    RegisterRead = 0x80,
    /// Register write: `0xC0 | address`
    RegisterWrite = 0xC0,
    /// Frame buffer read
    FrameRead = 0x20,
    /// Frame buffer write
    FrameWrite = 0x60,
    /// SRAM read (followed by a start address byte)
    SramRead = 0x00,
    /// SRAM write (followed by a start address byte)
    SramWrite = 0x40,
}

impl BusCommand {
    /// Command byte for a register read of `address`
    #[inline]
    pub const fn register_read(address: u8) -> u8 {
        BusCommand::RegisterRead as u8 | address
    }

    /// Command byte for a register write of `address`
    #[inline]
    pub const fn register_write(address: u8) -> u8 {
        BusCommand::RegisterWrite as u8 | address
    }
}

// =============================================================================
// Interrupt Status Masks
// =============================================================================

/// Battery voltage below threshold
pub const IRQ_BAT_LOW: u8 = 0x80;
/// Frame buffer underrun during transmit
pub const IRQ_TRX_UR: u8 = 0x40;
/// Frame transmission/reception completed
pub const IRQ_TRX_END: u8 = 0x08;
/// Start of frame reception detected
pub const IRQ_RX_START: u8 = 0x04;
/// PLL lost lock
pub const IRQ_PLL_UNLOCK: u8 = 0x02;
/// PLL acquired lock
pub const IRQ_PLL_LOCK: u8 = 0x01;

// =============================================================================
// Frame Length Bounds
// =============================================================================

/// A frame should be at least 3 bytes
pub const MIN_FRAME_LENGTH: u8 = 0x03;
/// A frame should be no more than 127 bytes
pub const MAX_FRAME_LENGTH: u8 = 0x7F;

// =============================================================================
// Subregister Descriptors
// =============================================================================

/// A bit-field within a chip register.
///
/// The mask selects the bits that belong to the field; the position is the
/// shift that normalizes the field to bit 0. Writing a subregister never
/// alters register bits outside its mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Subregister {
    /// Address of the containing register
    pub addr: u8,
    /// Bits belonging to the field (must be one contiguous run)
    pub mask: u8,
    /// Index of the mask's lowest set bit
    pub position: u8,
}

impl Subregister {
    /// Create a descriptor, checking the mask/position invariants.
    ///
    /// # Panics
    ///
    /// Panics if the mask is empty or non-contiguous, or if the position
    /// does not equal the index of the mask's lowest set bit. Descriptors
    /// are compile-time constants, so a violation fails the build.
    pub const fn new(addr: u8, mask: u8, position: u8) -> Self {
        assert!(mask != 0, "subregister mask must be non-empty");
        assert!(
            position == mask.trailing_zeros() as u8,
            "position must index the mask's lowest set bit"
        );
        let run = (mask >> position) as u16;
        assert!(
            run & (run + 1) == 0,
            "subregister mask must be a contiguous run of bits"
        );
        Self {
            addr,
            mask,
            position,
        }
    }

    /// Extract the field value from a raw register read
    #[inline]
    pub const fn extract(self, raw: u8) -> u8 {
        (raw & self.mask) >> self.position
    }

    /// Merge a field value into a raw register value.
    ///
    /// Bits outside the mask are taken from `raw` unchanged; value bits
    /// that do not fit the field are dropped.
    #[inline]
    pub const fn insert(self, raw: u8, value: u8) -> u8 {
        (raw & !self.mask) | ((value << self.position) & self.mask)
    }
}

/// Named subregister fields used by the HAL.
///
/// The descriptor table is fixed per logical field and indexed by this
/// enumeration; callers never construct ad hoc mask/position pairs for
/// these fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// Current transceiver state (TRX_STATUS[4:0])
    TrxStatus,
    /// State transition command (TRX_STATE[4:0])
    TrxCmd,
    /// Transmit result code (TRX_STATE[7:5])
    TracStatus,
    /// PLL-lock bit of the interrupt status register (IRQ_STATUS[0])
    IrqPllLock,
}

impl Field {
    /// Descriptor for this field
    pub const fn subregister(self) -> Subregister {
        match self {
            Field::TrxStatus => Subregister::new(reg::TRX_STATUS, 0x1F, 0),
            Field::TrxCmd => Subregister::new(reg::TRX_STATE, 0x1F, 0),
            Field::TracStatus => Subregister::new(reg::TRX_STATE, 0xE0, 5),
            Field::IrqPllLock => Subregister::new(reg::IRQ_STATUS, IRQ_PLL_LOCK, 0),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
