//! rbitbang-d2xx - Bit-bang port over the closed vendor driver
//!
//! This crate binds the D2XX driver through `libftd2xx` and exposes it as a
//! [`BitbangPort`](rbitbang_core::BitbangPort). The driver owns all USB
//! transfer management and bit-bang timing; this crate is a thin mapping
//! between the core vocabulary and the driver's calls.
//!
//! # Example
//!
//! ```no_run
//! use rbitbang_d2xx::D2xxPort;
//! use rbitbang_core::{sequence, SequenceConfig};
//!
//! let mut port = D2xxPort::open(0)?;
//! let report = sequence::run(&mut port, &SequenceConfig::default())?;
//! println!("transferred {} bytes", report.transferred);
//! # Ok::<(), rbitbang_core::Error>(())
//! ```

#![warn(rust_2018_idioms)]

pub mod device;
pub mod status;

pub use device::{list_devices, D2xxPort};
pub use status::map_status;

// Re-exported so callers can format device listings without depending on
// the driver crate themselves.
pub use libftd2xx::DeviceInfo;
