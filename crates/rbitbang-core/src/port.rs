//! The driver boundary: pin flags, bit modes, and the port trait
//!
//! A `BitbangPort` is one opened device. The trait methods mirror the D2XX
//! calls the demonstration makes, so a hardware backend is a thin mapping
//! and a stub backend can stand in for the sequence tests.

use crate::status::Status;
use bitflags::bitflags;
use core::fmt;

bitflags! {
    /// The eight UART pins repurposed as GPIOs in bit-bang mode.
    ///
    /// Bit positions follow the data-bus order of the FT232 family: D0 is
    /// TXD through D7 is RI. A set bit in the output mask drives that pin;
    /// a clear bit leaves it as an input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Pins: u8 {
        /// D0, transmit data
        const TXD = 1 << 0;
        /// D1, receive data
        const RXD = 1 << 1;
        /// D2, request to send
        const RTS = 1 << 2;
        /// D3, clear to send
        const CTS = 1 << 3;
        /// D4, data terminal ready
        const DTR = 1 << 4;
        /// D5, data set ready
        const DSR = 1 << 5;
        /// D6, data carrier detect
        const DCD = 1 << 6;
        /// D7, ring indicator
        const RI = 1 << 7;
    }
}

/// Bit mode selected through set-bit-mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitMode {
    /// UART operation; the output mask is ignored
    Reset,
    /// Asynchronous bit-bang, outputs clocked by the baud-rate generator
    AsyncBitbang,
    /// Synchronous bit-bang, pins sampled on every write clock
    SyncBitbang,
}

impl BitMode {
    /// The mode value as the driver encodes it.
    pub const fn value(self) -> u8 {
        match self {
            Self::Reset => 0x00,
            Self::AsyncBitbang => 0x01,
            Self::SyncBitbang => 0x04,
        }
    }
}

impl fmt::Display for BitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reset => "UART (reset)",
            Self::AsyncBitbang => "asynchronous bit-bang",
            Self::SyncBitbang => "synchronous bit-bang",
        };
        write!(f, "{}", name)
    }
}

/// One opened device, hardware or stub.
///
/// Methods map one-to-one onto the driver boundary: every call blocks until
/// the driver answers and yields a [`Status`] on failure. After `close`
/// succeeds the port must refuse further operations.
pub trait BitbangPort {
    /// Select a bit mode and, for bit-bang modes, which pins are outputs.
    fn set_bit_mode(&mut self, outputs: Pins, mode: BitMode) -> Result<(), Status>;

    /// Program the baud-rate generator. In bit-bang mode the pin clock runs
    /// at a fixed multiple of this rate.
    fn set_baud_rate(&mut self, baud_rate: u32) -> Result<(), Status>;

    /// Queue output samples, one byte per pin-clock tick. Returns how many
    /// bytes the driver accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize, Status>;

    /// Sample the instantaneous state of the data pins.
    ///
    /// This is the driver's get-bit-mode call, which despite its name reads
    /// pin levels rather than the configured mode.
    fn read_pins(&mut self) -> Result<u8, Status>;

    /// Release the device. The handle is invalid afterwards.
    fn close(&mut self) -> Result<(), Status>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pins_is_full_mask() {
        assert_eq!(Pins::all().bits(), 0xFF);
    }

    #[test]
    fn test_bit_mode_values() {
        assert_eq!(BitMode::Reset.value(), 0x00);
        assert_eq!(BitMode::AsyncBitbang.value(), 0x01);
        assert_eq!(BitMode::SyncBitbang.value(), 0x04);
    }
}
