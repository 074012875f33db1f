//! Port selection and open dispatch
//!
//! The backends are feature-gated. Open failures against the real driver
//! come back with the remediation hints that failure usually calls for on
//! Linux, where the kernel's own FTDI driver grabs the device first.

use rbitbang_core::BitbangPort;

/// Open the port the CLI asked for.
///
/// With `dummy` set this is the in-memory port; otherwise the D2XX device
/// at the given index.
pub fn open_port(index: u32, dummy: bool) -> Result<Box<dyn BitbangPort>, Box<dyn std::error::Error>> {
    if dummy {
        return open_dummy();
    }
    open_d2xx(index)
}

#[cfg(feature = "dummy")]
fn open_dummy() -> Result<Box<dyn BitbangPort>, Box<dyn std::error::Error>> {
    log::info!("using the dummy port");
    Ok(Box::new(rbitbang_dummy::DummyPort::new_default()))
}

#[cfg(not(feature = "dummy"))]
fn open_dummy() -> Result<Box<dyn BitbangPort>, Box<dyn std::error::Error>> {
    Err("Dummy port support not compiled in. Rebuild with --features dummy".into())
}

#[cfg(feature = "d2xx")]
fn open_d2xx(index: u32) -> Result<Box<dyn BitbangPort>, Box<dyn std::error::Error>> {
    let port = rbitbang_d2xx::D2xxPort::open(index).map_err(|e| {
        format!(
            "{}\n\
             Use lsmod to check if ftdi_sio (and usbserial) are present.\n\
             If so, unload them using rmmod, as they conflict with ftd2xx.",
            e
        )
    })?;
    Ok(Box::new(port))
}

#[cfg(not(feature = "d2xx"))]
fn open_d2xx(_index: u32) -> Result<Box<dyn BitbangPort>, Box<dyn std::error::Error>> {
    Err("D2XX support not compiled in. Rebuild with --features d2xx".into())
}
