//! Device listing implementation

/// List the FTDI devices the driver can see.
#[cfg(feature = "d2xx")]
pub fn list_devices() -> Result<(), Box<dyn std::error::Error>> {
    let devices = rbitbang_d2xx::list_devices()?;
    if devices.is_empty() {
        println!("No FTDI devices found.");
        return Ok(());
    }

    println!("Connected FTDI devices:");
    println!();
    println!(
        "{:<6} {:<10} {:<14} {:<18} {:<6} Description",
        "Index", "VID:PID", "Type", "Serial", "Open"
    );
    println!("{}", "-".repeat(70));

    for (index, device) in devices.iter().enumerate() {
        let vid_pid = format!("{:04x}:{:04x}", device.vendor_id, device.product_id);
        let device_type = format!("{:?}", device.device_type);
        println!(
            "{:<6} {:<10} {:<14} {:<18} {:<6} {}",
            index, vid_pid, device_type, device.serial_number, device.port_open, device.description
        );
    }
    Ok(())
}

#[cfg(not(feature = "d2xx"))]
pub fn list_devices() -> Result<(), Box<dyn std::error::Error>> {
    Err("Device listing requires D2XX support. Rebuild with --features d2xx".into())
}
