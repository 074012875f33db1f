//! rbitbang-dummy - In-memory bit-bang port for testing
//!
//! This crate provides a dummy port that emulates the driver boundary in
//! memory. Driven pins echo back through `read_pins`, failures can be
//! injected per operation, and every call is counted, which is what the
//! sequencer tests are built on. It also backs the CLI's `--dummy` flag so
//! the whole program can run with no hardware attached.

#![warn(rust_2018_idioms)]

use rbitbang_core::{BitMode, BitbangPort, Pins, Status};

/// Configuration for the dummy port.
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// Levels the outside world presents on pins not driven as outputs
    pub external: u8,
    /// Pins wired low regardless of what is driven
    pub stuck_low: u8,
    /// Total bytes accepted across all writes; `None` accepts everything
    pub write_limit: Option<usize>,
    /// Injected failure for set_bit_mode
    pub fail_set_bit_mode: Option<Status>,
    /// Injected failure for set_baud_rate
    pub fail_set_baud_rate: Option<Status>,
    /// Injected failure for write
    pub fail_write: Option<Status>,
    /// Injected failure for read_pins
    pub fail_read_pins: Option<Status>,
    /// Injected failure for close
    pub fail_close: Option<Status>,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            external: 0xFF,
            stuck_low: 0x00,
            write_limit: None,
            fail_set_bit_mode: None,
            fail_set_baud_rate: None,
            fail_write: None,
            fail_read_pins: None,
            fail_close: None,
        }
    }
}

impl DummyConfig {
    /// Set the levels seen on non-driven pins.
    pub fn with_external(mut self, external: u8) -> Self {
        self.external = external;
        self
    }

    /// Force the given pins low whatever is driven.
    pub fn with_stuck_low(mut self, stuck_low: u8) -> Self {
        self.stuck_low = stuck_low;
        self
    }

    /// Cap the total bytes the port accepts; later writes come up short.
    pub fn with_write_limit(mut self, limit: usize) -> Self {
        self.write_limit = Some(limit);
        self
    }

    /// Make set_bit_mode fail with the given status.
    pub fn with_set_bit_mode_failure(mut self, status: Status) -> Self {
        self.fail_set_bit_mode = Some(status);
        self
    }

    /// Make set_baud_rate fail with the given status.
    pub fn with_set_baud_rate_failure(mut self, status: Status) -> Self {
        self.fail_set_baud_rate = Some(status);
        self
    }

    /// Make write fail with the given status.
    pub fn with_write_failure(mut self, status: Status) -> Self {
        self.fail_write = Some(status);
        self
    }

    /// Make read_pins fail with the given status.
    pub fn with_read_pins_failure(mut self, status: Status) -> Self {
        self.fail_read_pins = Some(status);
        self
    }

    /// Make close fail with the given status.
    pub fn with_close_failure(mut self, status: Status) -> Self {
        self.fail_close = Some(status);
        self
    }
}

/// Dummy bit-bang port.
///
/// Emulates one open device: pins driven through `write` are sampled back
/// through `read_pins`, mixed with the configured external levels on pins
/// left as inputs. After `close` the handle is invalid and every operation
/// fails with `INVALID_HANDLE`, like a stale driver handle would.
pub struct DummyPort {
    config: DummyConfig,
    open: bool,
    mode: BitMode,
    outputs: Pins,
    driven: u8,
    baud_rate: Option<u32>,
    written_total: usize,
    set_bit_mode_calls: usize,
    set_baud_rate_calls: usize,
    write_calls: usize,
    read_pins_calls: usize,
    close_calls: usize,
}

impl DummyPort {
    /// Create a dummy port with the given configuration.
    pub fn new(config: DummyConfig) -> Self {
        log::debug!("dummy: port opened");
        Self {
            config,
            open: true,
            mode: BitMode::Reset,
            outputs: Pins::empty(),
            driven: 0x00,
            baud_rate: None,
            written_total: 0,
            set_bit_mode_calls: 0,
            set_baud_rate_calls: 0,
            write_calls: 0,
            read_pins_calls: 0,
            close_calls: 0,
        }
    }

    /// Create a dummy port with default configuration (all pins pulled up).
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Whether the port is still open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Last mode selected through set_bit_mode.
    pub fn mode(&self) -> BitMode {
        self.mode
    }

    /// Last output mask selected through set_bit_mode.
    pub fn outputs(&self) -> Pins {
        self.outputs
    }

    /// Last byte driven onto the pins.
    pub fn driven(&self) -> u8 {
        self.driven
    }

    /// Last baud rate programmed, if any.
    pub fn baud_rate(&self) -> Option<u32> {
        self.baud_rate
    }

    /// Total bytes accepted across all writes.
    pub fn written_total(&self) -> usize {
        self.written_total
    }

    /// Number of set_bit_mode calls.
    pub fn set_bit_mode_calls(&self) -> usize {
        self.set_bit_mode_calls
    }

    /// Number of set_baud_rate calls.
    pub fn set_baud_rate_calls(&self) -> usize {
        self.set_baud_rate_calls
    }

    /// Number of write calls.
    pub fn write_calls(&self) -> usize {
        self.write_calls
    }

    /// Number of read_pins calls.
    pub fn read_pins_calls(&self) -> usize {
        self.read_pins_calls
    }

    /// Number of close calls.
    pub fn close_calls(&self) -> usize {
        self.close_calls
    }

    fn check_open(&self) -> Result<(), Status> {
        if self.open {
            Ok(())
        } else {
            Err(Status::InvalidHandle)
        }
    }
}

impl BitbangPort for DummyPort {
    fn set_bit_mode(&mut self, outputs: Pins, mode: BitMode) -> Result<(), Status> {
        self.set_bit_mode_calls += 1;
        self.check_open()?;
        if let Some(status) = self.config.fail_set_bit_mode {
            return Err(status);
        }
        self.outputs = outputs;
        self.mode = mode;
        Ok(())
    }

    fn set_baud_rate(&mut self, baud_rate: u32) -> Result<(), Status> {
        self.set_baud_rate_calls += 1;
        self.check_open()?;
        if let Some(status) = self.config.fail_set_baud_rate {
            return Err(status);
        }
        self.baud_rate = Some(baud_rate);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Status> {
        self.write_calls += 1;
        self.check_open()?;
        if let Some(status) = self.config.fail_write {
            return Err(status);
        }
        let accepted = match self.config.write_limit {
            Some(limit) => data.len().min(limit.saturating_sub(self.written_total)),
            None => data.len(),
        };
        if accepted > 0 {
            self.driven = data[accepted - 1];
        }
        self.written_total += accepted;
        Ok(accepted)
    }

    fn read_pins(&mut self) -> Result<u8, Status> {
        self.read_pins_calls += 1;
        self.check_open()?;
        if let Some(status) = self.config.fail_read_pins {
            return Err(status);
        }
        let outputs = self.outputs.bits();
        let mixed = (self.driven & outputs) | (self.config.external & !outputs);
        Ok(mixed & !self.config.stuck_low)
    }

    fn close(&mut self) -> Result<(), Status> {
        self.close_calls += 1;
        self.check_open()?;
        // A failed close still invalidates the handle.
        self.open = false;
        log::debug!("dummy: port closed after {} bytes", self.written_total);
        if let Some(status) = self.config.fail_close {
            return Err(status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbitbang_core::{sequence, Error, SequenceConfig};

    fn short_config() -> SequenceConfig {
        // Full-length patterns are pointless in tests; 1 KiB exercises the
        // same paths.
        SequenceConfig::default().with_pattern_len(1024)
    }

    #[test]
    fn test_write_verify_echoes_test_byte() {
        let mut port = DummyPort::new_default();
        let report = sequence::run(&mut port, &short_config()).unwrap();

        assert_eq!(report.pins, 0xAA);
        assert_eq!(report.transferred, 1024);
        assert_eq!(port.mode(), BitMode::AsyncBitbang);
        assert_eq!(port.outputs(), Pins::all());
        assert_eq!(port.baud_rate(), Some(96_000));
        // One write for the test byte, one for the pattern.
        assert_eq!(port.write_calls(), 2);
        assert_eq!(port.written_total(), 1025);
        assert_eq!(port.close_calls(), 1);
        assert!(!port.is_open());
    }

    #[test]
    fn test_mismatch_raises_error_and_still_closes() {
        let config = DummyConfig::default().with_stuck_low(0x02);
        let mut port = DummyPort::new(config);
        let err = sequence::run(&mut port, &short_config()).unwrap_err();

        assert_eq!(
            err,
            Error::VerifyMismatch {
                written: 0xAA,
                sampled: 0xA8,
            }
        );
        assert_eq!(port.close_calls(), 1);
        assert!(!port.is_open());
    }

    #[test]
    fn test_short_transfer_reports_but_still_closes() {
        // Budget covers the verify byte plus half the pattern.
        let config = DummyConfig::default().with_write_limit(1 + 512);
        let mut port = DummyPort::new(config);
        let err = sequence::run(&mut port, &short_config()).unwrap_err();

        assert_eq!(
            err,
            Error::ShortTransfer {
                requested: 1024,
                transferred: 512,
            }
        );
        assert_eq!(port.written_total(), 513);
        assert_eq!(port.close_calls(), 1);
    }

    #[test]
    fn test_set_bit_mode_failure_closes_exactly_once() {
        let config = DummyConfig::default().with_set_bit_mode_failure(Status::InvalidParameter);
        let mut port = DummyPort::new(config);
        let err = sequence::run(&mut port, &short_config()).unwrap_err();

        assert_eq!(
            err,
            Error::SetBitMode {
                status: Status::InvalidParameter,
            }
        );
        assert_eq!(port.close_calls(), 1);
    }

    #[test]
    fn test_set_baud_rate_failure_closes_exactly_once() {
        let config = DummyConfig::default().with_set_baud_rate_failure(Status::InvalidBaudRate);
        let mut port = DummyPort::new(config);
        let err = sequence::run(&mut port, &short_config()).unwrap_err();

        assert_eq!(
            err,
            Error::SetBaudRate {
                baud: 96_000,
                status: Status::InvalidBaudRate,
            }
        );
        assert_eq!(port.close_calls(), 1);
    }

    #[test]
    fn test_write_failure_closes_exactly_once() {
        let config = DummyConfig::default().with_write_failure(Status::IoError);
        let mut port = DummyPort::new(config);
        let err = sequence::run(&mut port, &short_config()).unwrap_err();

        assert_eq!(
            err,
            Error::Write {
                status: Status::IoError,
            }
        );
        // Failed on the test byte, never reached the pattern.
        assert_eq!(port.write_calls(), 1);
        assert_eq!(port.close_calls(), 1);
    }

    #[test]
    fn test_read_pins_failure_closes_exactly_once() {
        let config = DummyConfig::default().with_read_pins_failure(Status::IoError);
        let mut port = DummyPort::new(config);
        let err = sequence::run(&mut port, &short_config()).unwrap_err();

        assert_eq!(
            err,
            Error::ReadPins {
                status: Status::IoError,
            }
        );
        assert_eq!(port.close_calls(), 1);
    }

    #[test]
    fn test_close_failure_does_not_fail_the_run() {
        let config = DummyConfig::default().with_close_failure(Status::IoError);
        let mut port = DummyPort::new(config);
        let report = sequence::run(&mut port, &short_config()).unwrap();

        assert_eq!(report.pins, 0xAA);
        assert_eq!(port.close_calls(), 1);
        assert!(!port.is_open());
    }

    #[test]
    fn test_reset_on_close_returns_to_uart_mode() {
        let mut port = DummyPort::new_default();
        let config = short_config().with_reset_on_close(true);
        sequence::run(&mut port, &config).unwrap();

        assert_eq!(port.mode(), BitMode::Reset);
        assert_eq!(port.set_bit_mode_calls(), 2);
        assert_eq!(port.close_calls(), 1);
    }

    #[test]
    fn test_operations_after_close_fail_with_invalid_handle() {
        let mut port = DummyPort::new_default();
        sequence::run(&mut port, &short_config()).unwrap();

        assert_eq!(port.write(&[0x00]), Err(Status::InvalidHandle));
        assert_eq!(port.read_pins(), Err(Status::InvalidHandle));
        assert_eq!(
            port.set_bit_mode(Pins::all(), BitMode::AsyncBitbang),
            Err(Status::InvalidHandle)
        );
        assert_eq!(port.close(), Err(Status::InvalidHandle));
    }

    #[test]
    fn test_inputs_mix_external_levels() {
        let mut port = DummyPort::new(DummyConfig::default().with_external(0x00));
        port.set_bit_mode(Pins::TXD | Pins::RXD | Pins::RTS | Pins::CTS, BitMode::AsyncBitbang)
            .unwrap();
        port.write(&[0xFF]).unwrap();

        // Driven low nibble reads back, undriven high nibble follows the
        // external levels.
        assert_eq!(port.read_pins(), Ok(0x0F));
    }

    #[test]
    fn test_write_budget_spans_calls() {
        let mut port = DummyPort::new(DummyConfig::default().with_write_limit(4));
        assert_eq!(port.write(&[0x01, 0x02]), Ok(2));
        assert_eq!(port.write(&[0x03, 0x04, 0x05]), Ok(2));
        assert_eq!(port.write(&[0x06]), Ok(0));
        assert_eq!(port.written_total(), 4);
        assert_eq!(port.driven(), 0x04);
    }
}
