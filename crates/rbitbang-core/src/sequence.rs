//! The fixed demonstration sequence
//!
//! One run drives an already-open port through the step list: enter
//! bit-bang mode, set the clock, write-verify a test byte, stream the
//! toggle pattern. The port is released on every exit path, success or
//! failure, exactly once.

use crate::error::{Error, Result};
use crate::pattern;
use crate::port::{BitMode, BitbangPort, Pins};

/// Default baud rate handed to the driver.
///
/// This exceeds the documented bit-bang range of some chips, so it stays
/// configurable and is passed through unvalidated for the driver to accept
/// or reject.
pub const DEFAULT_BAUD_RATE: u32 = 96_000;

/// Default test byte for the write-verify step: alternating highs and lows.
pub const DEFAULT_TEST_BYTE: u8 = 0xAA;

/// In bit-bang mode the pin clock runs at this multiple of the baud rate.
pub const CLOCK_MULTIPLIER: u32 = 16;

/// Everything one run can be told.
#[derive(Debug, Clone)]
pub struct SequenceConfig {
    /// Baud rate programmed into the device
    pub baud_rate: u32,
    /// Byte driven and verified during the write-verify step
    pub test_byte: u8,
    /// Pins driven as outputs
    pub outputs: Pins,
    /// Number of samples streamed by the bulk-write step
    pub pattern_len: usize,
    /// Return the device to UART mode before closing it
    pub reset_on_close: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            test_byte: DEFAULT_TEST_BYTE,
            outputs: Pins::all(),
            pattern_len: pattern::DEFAULT_PATTERN_LEN,
            reset_on_close: false,
        }
    }
}

impl SequenceConfig {
    /// Set the baud rate.
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Set the write-verify test byte.
    pub fn with_test_byte(mut self, test_byte: u8) -> Self {
        self.test_byte = test_byte;
        self
    }

    /// Set which pins are driven as outputs.
    pub fn with_outputs(mut self, outputs: Pins) -> Self {
        self.outputs = outputs;
        self
    }

    /// Set the toggle-pattern length.
    pub fn with_pattern_len(mut self, pattern_len: usize) -> Self {
        self.pattern_len = pattern_len;
        self
    }

    /// Return the device to UART mode before close.
    pub fn with_reset_on_close(mut self, reset_on_close: bool) -> Self {
        self.reset_on_close = reset_on_close;
        self
    }

    /// The pin clock rate the configured baud rate yields.
    pub fn clock_rate(&self) -> u64 {
        u64::from(self.baud_rate) * u64::from(CLOCK_MULTIPLIER)
    }
}

/// What a completed run observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceReport {
    /// Pin state sampled during the write-verify step
    pub pins: u8,
    /// Bytes the driver accepted during the bulk write
    pub transferred: usize,
}

/// Releases the port when the run leaves scope, so every return path out of
/// [`run`] ends in exactly one close.
struct ClosePort<'a, P: BitbangPort + ?Sized> {
    port: &'a mut P,
    reset_on_close: bool,
}

impl<P: BitbangPort + ?Sized> Drop for ClosePort<'_, P> {
    fn drop(&mut self) {
        if self.reset_on_close {
            // Mask is ignored in reset mode.
            if let Err(status) = self.port.set_bit_mode(Pins::empty(), BitMode::Reset) {
                log::warn!("failed to return device to UART mode: {}", status);
            }
        }
        if let Err(status) = self.port.close() {
            log::warn!("failed to close device: {}", status);
        }
    }
}

/// Drive one port through the fixed step list.
///
/// Stops at the first failing step. The port is closed before this function
/// returns, whatever the outcome; the caller's borrow is released but the
/// port value itself must not be used for further I/O.
pub fn run<P: BitbangPort + ?Sized>(port: &mut P, config: &SequenceConfig) -> Result<SequenceReport> {
    let guard = ClosePort {
        port,
        reset_on_close: config.reset_on_close,
    };

    log::info!("selecting {} mode", BitMode::AsyncBitbang);
    guard
        .port
        .set_bit_mode(config.outputs, BitMode::AsyncBitbang)
        .map_err(|status| Error::SetBitMode { status })?;

    log::info!("setting clock rate to {}", config.clock_rate());
    guard
        .port
        .set_baud_rate(config.baud_rate)
        .map_err(|status| Error::SetBaudRate {
            baud: config.baud_rate,
            status,
        })?;

    log::debug!("driving test byte {:02X}", config.test_byte);
    guard
        .port
        .write(&[config.test_byte])
        .map_err(|status| Error::Write { status })?;

    let pins = guard
        .port
        .read_pins()
        .map_err(|status| Error::ReadPins { status })?;
    if pins != config.test_byte {
        return Err(Error::VerifyMismatch {
            written: config.test_byte,
            sampled: pins,
        });
    }
    log::debug!("pin data is {:02X}, as expected", pins);

    let data = pattern::toggle_pattern(config.pattern_len);
    log::info!("streaming {} toggle samples", data.len());
    let transferred = guard
        .port
        .write(&data)
        .map_err(|status| Error::Write { status })?;
    if transferred < data.len() {
        return Err(Error::ShortTransfer {
            requested: data.len(),
            transferred,
        });
    }

    Ok(SequenceReport { pins, transferred })
}
