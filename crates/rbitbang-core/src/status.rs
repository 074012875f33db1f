//! Driver status codes
//!
//! Every D2XX call reports one value from a small fixed enumeration, where
//! zero means success. `Status` mirrors the nineteen failure values; success
//! is expressed as `Ok` on the Rust side and never appears as a variant.

use core::fmt;

/// Failure status reported by the vendor driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Status {
    /// Handle does not refer to an open device
    InvalidHandle = 1,
    /// No device matched the requested index
    DeviceNotFound = 2,
    /// Device exists but is not open
    DeviceNotOpened = 3,
    /// USB transfer failed
    IoError = 4,
    /// Driver could not allocate resources
    InsufficientResources = 5,
    /// A call parameter was rejected
    InvalidParameter = 6,
    /// Baud rate cannot be mapped to a divisor
    InvalidBaudRate = 7,
    /// Device not opened in a mode that permits erase
    DeviceNotOpenedForErase = 8,
    /// Device not opened in a mode that permits write
    DeviceNotOpenedForWrite = 9,
    /// EEPROM write transaction failed
    FailedToWriteDevice = 10,
    /// EEPROM read failed
    EepromReadFailed = 11,
    /// EEPROM write failed
    EepromWriteFailed = 12,
    /// EEPROM erase failed
    EepromEraseFailed = 13,
    /// No EEPROM fitted
    EepromNotPresent = 14,
    /// EEPROM present but blank
    EepromNotProgrammed = 15,
    /// Arguments rejected before reaching the device
    InvalidArgs = 16,
    /// Operation not supported by this device
    NotSupported = 17,
    /// Any other driver failure
    OtherError = 18,
    /// Device list is still being built
    DeviceListNotReady = 19,
}

impl Status {
    /// The numeric code as the driver reports it.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Look up the status for a raw driver code. Zero (success) and values
    /// past the enumeration yield `None`.
    pub const fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::InvalidHandle,
            2 => Self::DeviceNotFound,
            3 => Self::DeviceNotOpened,
            4 => Self::IoError,
            5 => Self::InsufficientResources,
            6 => Self::InvalidParameter,
            7 => Self::InvalidBaudRate,
            8 => Self::DeviceNotOpenedForErase,
            9 => Self::DeviceNotOpenedForWrite,
            10 => Self::FailedToWriteDevice,
            11 => Self::EepromReadFailed,
            12 => Self::EepromWriteFailed,
            13 => Self::EepromEraseFailed,
            14 => Self::EepromNotPresent,
            15 => Self::EepromNotProgrammed,
            16 => Self::InvalidArgs,
            17 => Self::NotSupported,
            18 => Self::OtherError,
            19 => Self::DeviceListNotReady,
            _ => return None,
        })
    }

    /// The vendor-style name for this status.
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidHandle => "INVALID_HANDLE",
            Self::DeviceNotFound => "DEVICE_NOT_FOUND",
            Self::DeviceNotOpened => "DEVICE_NOT_OPENED",
            Self::IoError => "IO_ERROR",
            Self::InsufficientResources => "INSUFFICIENT_RESOURCES",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::InvalidBaudRate => "INVALID_BAUD_RATE",
            Self::DeviceNotOpenedForErase => "DEVICE_NOT_OPENED_FOR_ERASE",
            Self::DeviceNotOpenedForWrite => "DEVICE_NOT_OPENED_FOR_WRITE",
            Self::FailedToWriteDevice => "FAILED_TO_WRITE_DEVICE",
            Self::EepromReadFailed => "EEPROM_READ_FAILED",
            Self::EepromWriteFailed => "EEPROM_WRITE_FAILED",
            Self::EepromEraseFailed => "EEPROM_ERASE_FAILED",
            Self::EepromNotPresent => "EEPROM_NOT_PRESENT",
            Self::EepromNotProgrammed => "EEPROM_NOT_PROGRAMMED",
            Self::InvalidArgs => "INVALID_ARGS",
            Self::NotSupported => "NOT_SUPPORTED",
            Self::OtherError => "OTHER_ERROR",
            Self::DeviceListNotReady => "DEVICE_LIST_NOT_READY",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.name(), self.code())
    }
}

impl std::error::Error for Status {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in 1..=19 {
            let status = Status::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
    }

    #[test]
    fn test_out_of_range_codes() {
        assert_eq!(Status::from_code(0), None);
        assert_eq!(Status::from_code(20), None);
        assert_eq!(Status::from_code(u32::MAX), None);
    }

    #[test]
    fn test_display_carries_numeric_code() {
        assert_eq!(
            Status::DeviceNotFound.to_string(),
            "DEVICE_NOT_FOUND (status 2)"
        );
        assert_eq!(Status::OtherError.to_string(), "OTHER_ERROR (status 18)");
    }
}
