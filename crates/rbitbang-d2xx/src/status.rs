//! Driver status translation

use libftd2xx::FtStatus;
use rbitbang_core::Status;

/// Translate a driver status into the core enumeration.
pub fn map_status(status: FtStatus) -> Status {
    match status {
        FtStatus::INVALID_HANDLE => Status::InvalidHandle,
        FtStatus::DEVICE_NOT_FOUND => Status::DeviceNotFound,
        FtStatus::DEVICE_NOT_OPENED => Status::DeviceNotOpened,
        FtStatus::IO_ERROR => Status::IoError,
        FtStatus::INSUFFICIENT_RESOURCES => Status::InsufficientResources,
        FtStatus::INVALID_PARAMETER => Status::InvalidParameter,
        FtStatus::INVALID_BAUD_RATE => Status::InvalidBaudRate,
        FtStatus::DEVICE_NOT_OPENED_FOR_ERASE => Status::DeviceNotOpenedForErase,
        FtStatus::DEVICE_NOT_OPENED_FOR_WRITE => Status::DeviceNotOpenedForWrite,
        FtStatus::FAILED_TO_WRITE_DEVICE => Status::FailedToWriteDevice,
        FtStatus::EEPROM_READ_FAILED => Status::EepromReadFailed,
        FtStatus::EEPROM_WRITE_FAILED => Status::EepromWriteFailed,
        FtStatus::EEPROM_ERASE_FAILED => Status::EepromEraseFailed,
        FtStatus::EEPROM_NOT_PRESENT => Status::EepromNotPresent,
        FtStatus::EEPROM_NOT_PROGRAMMED => Status::EepromNotProgrammed,
        FtStatus::INVALID_ARGS => Status::InvalidArgs,
        FtStatus::NOT_SUPPORTED => Status::NotSupported,
        FtStatus::OTHER_ERROR => Status::OtherError,
        FtStatus::DEVICE_LIST_NOT_READY => Status::DeviceListNotReady,
    }
}
