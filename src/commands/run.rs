//! The bit-bang demonstration run

use rbitbang_core::{sequence, BitbangPort, SequenceConfig};

/// Drive the port through the full demonstration and print what happened.
pub fn run_sequence<P: BitbangPort + ?Sized>(
    port: &mut P,
    config: &SequenceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = sequence::run(port, config)?;
    println!("Success: pin data is {:02X}, as expected.", report.pins);
    println!("Bytes transferred: {}", report.transferred);
    Ok(())
}
