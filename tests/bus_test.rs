//! Tests for system-bus routing, write protection and register windows.

use lib65c02::machine::{FILEIO_BASE, SERIAL1_BASE};
use lib65c02::ranges::AddressRange;
use lib65c02::{Bus, FileIo, Machine, MachineConfig, SystemBus};

#[test]
fn test_protected_write_scenario() {
    let mut bus = SystemBus::new();
    bus.load(0xE000, &[0x77]);
    bus.protect(AddressRange::new(0xD000, 0xFFFF));

    bus.write(0xE000, 0x00);

    // RAM is unchanged and reads still deliver the old contents.
    assert_eq!(bus.read(0xE000), 0x77);
    assert_eq!(bus.ram(0xE000), 0x77);
}

#[test]
fn test_unprotect_splits_rom_window() {
    let mut bus = SystemBus::new();
    bus.protect(AddressRange::new(0xD000, 0xFFFF));
    bus.unprotect(AddressRange::new(0xE000, 0xEFFF));

    bus.write(0xD100, 0x11); // still protected
    bus.write(0xE100, 0x22); // carved out
    bus.write(0xF100, 0x33); // still protected

    assert_eq!(bus.read(0xD100), 0x00);
    assert_eq!(bus.read(0xE100), 0x22);
    assert_eq!(bus.read(0xF100), 0x00);
    assert_eq!(bus.protected().ranges().len(), 2);
}

#[test]
fn test_device_window_shadows_ram() {
    let mut machine = Machine::new(MachineConfig::default());
    let bus = machine.cpu_mut().bus_mut();

    // Writes inside the serial window reach the device, not RAM.
    bus.write(SERIAL1_BASE + 2, 0x5A);
    assert_eq!(bus.read(SERIAL1_BASE + 2), 0x5A);
    assert_eq!(bus.ram(SERIAL1_BASE + 2), 0x00);
}

#[test]
fn test_fileio_window_unused_offsets_read_ff() {
    let mut machine = Machine::new(MachineConfig::default());
    let bus = machine.cpu_mut().bus_mut();

    // Offsets 4..15 of the file-I/O window hold no registers.
    assert_eq!(bus.read(FILEIO_BASE + 0x4), 0xFF);
    assert_eq!(bus.read(FILEIO_BASE + 0xF), 0xFF);
    // Writes there are dropped without disturbing the device.
    bus.write(FILEIO_BASE + 0x7, 0x42);
    assert_eq!(bus.read(FILEIO_BASE), 0x80); // READY
}

#[test]
fn test_device_lookup_by_type() {
    let mut machine = Machine::new(MachineConfig::default());
    let bus = machine.cpu_mut().bus_mut();

    assert!(bus.device_at::<FileIo>(FILEIO_BASE).is_some());
    assert!(bus.device_at::<FileIo>(FILEIO_BASE + 0xF).is_some());
    assert!(bus.device_at::<FileIo>(SERIAL1_BASE).is_none()); // wrong type
    assert!(bus.device_at::<FileIo>(0x0000).is_none()); // plain RAM
}

#[test]
fn test_load_bypasses_protection() {
    let mut bus = SystemBus::new();
    bus.protect(AddressRange::new(0xD000, 0xFFFF));
    bus.load(0xD000, &[0xAB]);
    assert_eq!(bus.read(0xD000), 0xAB);
}
