//! D2XX device implementation
//!
//! `D2xxPort` owns one open driver handle and maps the `BitbangPort`
//! methods straight onto the corresponding driver calls.

use libftd2xx::{DeviceInfo, Ftdi, FtdiCommon};
use rbitbang_core::{BitMode, BitbangPort, Error, Pins, Status};

use crate::status::map_status;

/// An open D2XX device driven as a bit-bang port.
pub struct D2xxPort {
    device: Ftdi,
}

impl D2xxPort {
    /// Open the device at `index`, in the driver's enumeration order.
    ///
    /// Fails with [`Error::Open`] when the driver cannot claim the device,
    /// which on Linux usually means the ftdi_sio kernel driver is bound to
    /// it.
    pub fn open(index: u32) -> Result<Self, Error> {
        log::debug!("d2xx: opening device {}", index);
        // The driver API takes a signed index; out-of-range values fail the
        // open with a driver status like any other bad index.
        let device = Ftdi::with_index(index as i32).map_err(|e| Error::Open {
            index,
            status: map_status(e),
        })?;
        log::info!("d2xx: opened device {}", index);
        Ok(Self { device })
    }
}

impl BitbangPort for D2xxPort {
    fn set_bit_mode(&mut self, outputs: Pins, mode: BitMode) -> Result<(), Status> {
        log::debug!(
            "d2xx: set_bit_mode mask={:02X} mode={:02X}",
            outputs.bits(),
            mode.value()
        );
        self.device
            .set_bit_mode(outputs.bits(), driver_mode(mode))
            .map_err(map_status)
    }

    fn set_baud_rate(&mut self, baud_rate: u32) -> Result<(), Status> {
        log::debug!("d2xx: set_baud_rate {}", baud_rate);
        self.device.set_baud_rate(baud_rate).map_err(map_status)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Status> {
        self.device.write(data).map_err(map_status)
    }

    fn read_pins(&mut self) -> Result<u8, Status> {
        self.device.bit_mode().map_err(map_status)
    }

    fn close(&mut self) -> Result<(), Status> {
        log::debug!("d2xx: closing device");
        self.device.close().map_err(map_status)
    }
}

fn driver_mode(mode: BitMode) -> libftd2xx::BitMode {
    match mode {
        BitMode::Reset => libftd2xx::BitMode::Reset,
        BitMode::AsyncBitbang => libftd2xx::BitMode::AsyncBitbang,
        BitMode::SyncBitbang => libftd2xx::BitMode::SyncBitbang,
    }
}

/// List connected FTDI devices.
///
/// Tries filesystem-based enumeration first, which works on Linux even with
/// the ftdi_sio kernel driver still bound, then falls back to the D2XX call.
pub fn list_devices() -> Result<Vec<DeviceInfo>, Status> {
    if let Ok(devices) = libftd2xx::list_devices_fs() {
        if !devices.is_empty() {
            return Ok(devices);
        }
    }
    libftd2xx::list_devices().map_err(map_status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_mode_round_trips_wire_values() {
        // The driver enum and the core enum must agree on the encoding the
        // device sees.
        assert_eq!(driver_mode(BitMode::Reset) as u8, BitMode::Reset.value());
        assert_eq!(
            driver_mode(BitMode::AsyncBitbang) as u8,
            BitMode::AsyncBitbang.value()
        );
        assert_eq!(
            driver_mode(BitMode::SyncBitbang) as u8,
            BitMode::SyncBitbang.value()
        );
    }
}
