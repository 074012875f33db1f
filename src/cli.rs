//! CLI argument parsing

use clap::Parser;

#[derive(Parser)]
#[command(name = "rbitbang")]
#[command(author, version, about = "FTDI asynchronous bit-bang demonstration", long_about = None)]
pub struct Cli {
    /// Device index in the driver's enumeration order
    #[arg(default_value_t = 0)]
    pub index: u32,

    /// Baud rate programmed into the device; pins toggle at 16x this rate
    #[arg(long, default_value_t = 96_000)]
    pub baud: u32,

    /// Drive the in-memory dummy port instead of hardware
    #[arg(long)]
    pub dummy: bool,

    /// Return the device to UART mode before closing it
    #[arg(long)]
    pub reset: bool,

    /// List connected FTDI devices and exit
    #[arg(long)]
    pub list: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
