//! rbitbang-core - Core library for the FTDI bit-bang demonstration
//!
//! This crate provides everything the `rbitbang` binary needs that is not a
//! concrete device backend: the driver status enumeration, the pin and bit
//! mode vocabulary, the `BitbangPort` trait backends implement, toggle
//! pattern generation, and the sequencer that drives one device through the
//! fixed demonstration run.
//!
//! # Example
//!
//! ```ignore
//! use rbitbang_core::{sequence, SequenceConfig};
//!
//! fn demo<P: rbitbang_core::BitbangPort>(port: &mut P) {
//!     let config = SequenceConfig::default().with_baud_rate(9600);
//!     match sequence::run(port, &config) {
//!         Ok(report) => println!("pin data {:02X}, {} bytes out", report.pins, report.transferred),
//!         Err(e) => println!("run failed: {}", e),
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod pattern;
pub mod port;
pub mod sequence;
pub mod status;

pub use error::{Error, Result};
pub use port::{BitMode, BitbangPort, Pins};
pub use sequence::{SequenceConfig, SequenceReport};
pub use status::Status;
