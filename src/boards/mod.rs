//! Board wiring tables.
//!
//! Each supported board revision routes the transceiver's control and SPI
//! lines to different MCU port pins. The maps here are pure configuration
//! data, resolved once at startup by a board-identifier constant; nothing
//! in the driver depends on them beyond the pin implementations the
//! application constructs from them.

// =============================================================================
// Port/Pin Addressing
// =============================================================================

/// MCU GPIO port identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// Port B
    B,
    /// Port D
    D,
}

/// One GPIO line: port plus pin index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortPin {
    /// GPIO port
    pub port: Port,
    /// Pin index within the port
    pub pin: u8,
}

impl PortPin {
    const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }
}

// =============================================================================
// Board Pin Maps
// =============================================================================

/// Complete wiring of the transceiver to a board revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardPinMap {
    /// Slave-select line
    pub ss: PortPin,
    /// SPI master-out line
    pub mosi: PortPin,
    /// SPI master-in line
    pub miso: PortPin,
    /// SPI clock line
    pub sck: PortPin,
    /// Transceiver reset line
    pub rst: PortPin,
    /// Transceiver interrupt line
    pub irq: PortPin,
    /// Sleep/trigger line
    pub slptr: PortPin,
    /// Continuous-wave test mode line, on boards that wire it
    pub cw: Option<PortPin>,
    /// Index of the timer used as the symbol tick counter
    pub tick_timer: u8,
}

/// Supported board revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardRevision {
    /// Raven board, revision D
    RavenD,
    /// Raven USB stick, revision C
    RavenUsbC,
    /// Radio controller board, revision B
    RcbB,
}

impl BoardRevision {
    /// Wiring table for this revision
    pub const fn pin_map(self) -> BoardPinMap {
        match self {
            BoardRevision::RavenD => BoardPinMap {
                ss: PortPin::new(Port::B, 4),
                mosi: PortPin::new(Port::B, 5),
                miso: PortPin::new(Port::B, 6),
                sck: PortPin::new(Port::B, 7),
                rst: PortPin::new(Port::B, 1),
                irq: PortPin::new(Port::D, 6),
                slptr: PortPin::new(Port::B, 3),
                cw: Some(PortPin::new(Port::B, 0)),
                tick_timer: 3,
            },
            BoardRevision::RavenUsbC => BoardPinMap {
                ss: PortPin::new(Port::B, 0),
                mosi: PortPin::new(Port::B, 2),
                miso: PortPin::new(Port::B, 3),
                sck: PortPin::new(Port::B, 1),
                rst: PortPin::new(Port::B, 5),
                irq: PortPin::new(Port::D, 4),
                slptr: PortPin::new(Port::B, 4),
                cw: Some(PortPin::new(Port::B, 7)),
                tick_timer: 3,
            },
            BoardRevision::RcbB => BoardPinMap {
                ss: PortPin::new(Port::B, 0),
                mosi: PortPin::new(Port::B, 2),
                miso: PortPin::new(Port::B, 3),
                sck: PortPin::new(Port::B, 1),
                rst: PortPin::new(Port::B, 5),
                irq: PortPin::new(Port::D, 4),
                slptr: PortPin::new(Port::B, 4),
                cw: None,
                tick_timer: 3,
            },
        }
    }

    /// Whether this revision wires the continuous-wave test line
    pub const fn has_cw_mode(self) -> bool {
        self.pin_map().cw.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
