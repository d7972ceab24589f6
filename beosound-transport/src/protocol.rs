//! Wire protocol constants and report layouts for the BeoSound 5 panel
//!
//! Two report shapes exist:
//!
//! ```text
//! Input (device -> host), at least 6 bytes:
//!   [0] selection wheel delta   (i8)
//!   [1] secondary wheel delta   (i8)
//!   [2] laser position          (u8, 0..=128 after clamping)
//!   [3] buttons                 (bits 4..7: right, left, go, power)
//!   [4] reserved
//!   [5] reserved
//!
//! Output (host -> device), exactly 2 bytes:
//!   [0] report ID (always 0)
//!   [1] status byte
//! ```
//!
//! The offsets were reverse-engineered from device behaviour. Reserved bytes
//! are carried through untouched since other panel revisions may use them.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Minimum length of a valid input report
pub const INPUT_REPORT_LEN: usize = 6;

/// Length of an outgoing status command
pub const OUTPUT_REPORT_LEN: usize = 2;

/// Report ID prefixed to every outgoing command
pub const OUTPUT_REPORT_ID: u8 = 0x00;

/// Laser pointer absolute axis range
pub mod laser {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 128;
}

/// Button bits in input byte 3. Bits 0..3 carry nothing.
pub mod button {
    pub const RIGHT: u8 = 1 << 4;
    pub const LEFT: u8 = 1 << 5;
    pub const GO: u8 = 1 << 6;
    pub const POWER: u8 = 1 << 7;

    /// All bits the decoder looks at
    pub const MASK: u8 = RIGHT | LEFT | GO | POWER;
}

/// Bits of the outgoing status byte
pub mod status {
    /// Screen backlight on
    pub const SCREEN: u8 = 0b0100_0000;
    /// Indicator LED steady on
    pub const LED_SOLID: u8 = 0b1000_0000;
    /// Indicator LED blinking
    pub const LED_BLINK: u8 = 0b0001_0000;

    /// Both indicator bits
    pub const LED_MASK: u8 = LED_SOLID | LED_BLINK;

    /// Status at session start: screen on, indicator off
    pub const DEFAULT: u8 = SCREEN;

    /// Human-readable summary of a status byte
    pub fn describe(byte: u8) -> String {
        let screen = if byte & SCREEN != 0 { "on" } else { "off" };
        let indicator = match (byte & LED_SOLID != 0, byte & LED_BLINK != 0) {
            (false, false) => "off",
            (true, false) => "solid",
            (false, true) => "blink",
            (true, true) => "INVALID(solid+blink)",
        };
        format!("screen={screen} indicator={indicator}")
    }
}

/// Fixed-offset view over the first six bytes of an input report
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoBytes, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct RawInputReport {
    pub selection_wheel: i8,
    pub secondary_wheel: i8,
    pub laser: u8,
    pub buttons: u8,
    pub reserved: [u8; 2],
}

impl RawInputReport {
    /// Read the fixed layout from the front of `data`.
    ///
    /// Returns `None` if fewer than [`INPUT_REPORT_LEN`] bytes are present.
    /// Trailing bytes are ignored.
    pub fn parse(data: &[u8]) -> Option<Self> {
        Self::read_from_prefix(data).ok().map(|(report, _rest)| report)
    }
}

/// Outgoing status command: report ID followed by the status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoBytes, Immutable)]
#[repr(C)]
pub struct OutgoingCommand {
    report_id: u8,
    status: u8,
}

impl OutgoingCommand {
    /// Build the command carrying `status`
    pub const fn new(status: u8) -> Self {
        Self {
            report_id: OUTPUT_REPORT_ID,
            status,
        }
    }

    /// Status byte carried by this command
    pub const fn status(&self) -> u8 {
        self.status
    }

    /// Wire bytes, ready for an output report write
    pub fn to_bytes(&self) -> [u8; OUTPUT_REPORT_LEN] {
        zerocopy::transmute!(*self)
    }
}
