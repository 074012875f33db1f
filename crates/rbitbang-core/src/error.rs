//! Error types for the bit-bang sequencer

use crate::status::Status;
use thiserror::Error;

/// Sequencer errors, one variant per failure class.
///
/// Driver-originated variants carry the [`Status`] the driver reported, so
/// the numeric code always appears in the rendered message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The driver could not claim the device
    #[error("failed to open device {index}: {status}")]
    Open {
        /// Index the open was attempted with
        index: u32,
        /// Status the driver reported
        #[source]
        status: Status,
    },

    /// Selecting the bit mode failed
    #[error("failed to select bit mode: {status}")]
    SetBitMode {
        /// Status the driver reported
        #[source]
        status: Status,
    },

    /// Programming the baud-rate generator failed
    #[error("failed to set baud rate to {baud}: {status}")]
    SetBaudRate {
        /// Rate that was rejected
        baud: u32,
        /// Status the driver reported
        #[source]
        status: Status,
    },

    /// A write call failed outright
    #[error("write failed: {status}")]
    Write {
        /// Status the driver reported
        #[source]
        status: Status,
    },

    /// Sampling the pin state failed
    #[error("failed to sample pin state: {status}")]
    ReadPins {
        /// Status the driver reported
        #[source]
        status: Status,
    },

    /// The sampled pin state did not match the byte just written
    #[error("pin data is {sampled:02X}, but expected {written:02X}")]
    VerifyMismatch {
        /// Byte driven onto the pins
        written: u8,
        /// Byte sampled back
        sampled: u8,
    },

    /// The driver accepted fewer bytes than the bulk write requested
    #[error("short transfer: {transferred} of {requested} bytes accepted")]
    ShortTransfer {
        /// Bytes handed to the driver
        requested: usize,
        /// Bytes the driver accepted
        transferred: usize,
    },
}

/// Result type alias using the sequencer error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_mismatch_message_names_both_bytes() {
        let err = Error::VerifyMismatch {
            written: 0xAA,
            sampled: 0x2A,
        };
        assert_eq!(err.to_string(), "pin data is 2A, but expected AA");
    }

    #[test]
    fn test_driver_errors_chain_to_status() {
        let err = Error::SetBaudRate {
            baud: 96_000,
            status: Status::InvalidBaudRate,
        };
        assert_eq!(
            err.to_string(),
            "failed to set baud rate to 96000: INVALID_BAUD_RATE (status 7)"
        );
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "INVALID_BAUD_RATE (status 7)");
    }

    #[test]
    fn test_short_transfer_message() {
        let err = Error::ShortTransfer {
            requested: 1_000_000,
            transferred: 4096,
        };
        assert_eq!(
            err.to_string(),
            "short transfer: 4096 of 1000000 bytes accepted"
        );
    }
}
