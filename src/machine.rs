//! # System Bus and Machine Assembly
//!
//! [`SystemBus`] routes each address to either a device register window
//! or the flat 64 KiB RAM it owns, dropping writes into protected
//! ranges. [`Machine`] assembles the standard configuration — two serial
//! adapters, a timer/interface adapter, a file-I/O port and a
//! write-protected ROM window — and wires a [`Cpu`] on top.
//!
//! The memory map is only a convention of this assembly; hosts that want
//! a different layout can build their own `SystemBus` and register
//! devices anywhere.

use crate::bus::Bus;
use crate::cpu::{Cpu, Variant};
use crate::devices::{Acia, Device, FileIo, Via};
use crate::ranges::{AddressRange, AddressRangeList};
use crate::rom::{self, LoadError};
use std::time::Duration;

/// Base address of the first serial adapter.
pub const SERIAL1_BASE: u16 = 0xC010;
/// Base address of the second serial adapter.
pub const SERIAL2_BASE: u16 = 0xC020;
/// Base address of the timer/interface adapter.
pub const VIA_BASE: u16 = 0xC030;
/// Base address of the file-I/O port.
pub const FILEIO_BASE: u16 = 0xC040;
/// Start of the write-protected ROM window, which runs to 0xFFFF.
pub const ROM_BASE: u16 = 0xD000;

/// Error returned when registering a device fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The new device's window overlaps an already-registered device.
    Overlap {
        /// Base address of the rejected device.
        new_base: u16,
        /// Last address of the rejected device.
        new_end: u16,
        /// Base address of the conflicting device.
        existing_base: u16,
        /// Last address of the conflicting device.
        existing_end: u16,
    },
}

impl std::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DeviceError::Overlap {
                new_base,
                new_end,
                existing_base,
                existing_end,
            } => write!(
                f,
                "device at 0x{new_base:04X}-0x{new_end:04X} overlaps existing device at 0x{existing_base:04X}-0x{existing_end:04X}"
            ),
        }
    }
}

impl std::error::Error for DeviceError {}

struct DeviceMapping {
    base: u16,
    device: Box<dyn Device>,
}

impl DeviceMapping {
    /// Inclusive last address, clamped at the end of the address space.
    /// A zero-size device still claims one byte.
    fn end(&self) -> u16 {
        let size = self.device.size().max(1) as u32;
        let end = self.base as u32 + size - 1;
        end.min(0xFFFF) as u16
    }

    fn contains(&self, addr: u16) -> bool {
        addr >= self.base && addr <= self.end()
    }
}

/// Bus with RAM, memory-mapped devices and write-protected ranges.
///
/// Reads check the device windows in registration order and fall back to
/// RAM. Writes do the same, except that writes landing in a protected
/// range are silently dropped. RAM is owned by the bus; devices never
/// see it.
pub struct SystemBus {
    ram: Box<[u8; 0x10000]>,
    devices: Vec<DeviceMapping>,
    protected: AddressRangeList,
    tick_pause: Duration,
}

impl SystemBus {
    /// Creates a bus with zeroed RAM and no devices.
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x10000]),
            devices: Vec::new(),
            protected: AddressRangeList::new(),
            tick_pause: Duration::ZERO,
        }
    }

    /// Registers a device window at `base`, spanning `device.size()`
    /// bytes. Fails if the window overlaps an existing device.
    pub fn add_device(&mut self, base: u16, device: Box<dyn Device>) -> Result<(), DeviceError> {
        let mapping = DeviceMapping { base, device };
        for existing in &self.devices {
            if mapping.base <= existing.end() && mapping.end() >= existing.base {
                return Err(DeviceError::Overlap {
                    new_base: mapping.base,
                    new_end: mapping.end(),
                    existing_base: existing.base,
                    existing_end: existing.end(),
                });
            }
        }
        self.devices.push(mapping);
        Ok(())
    }

    /// Returns a registered device downcast to its concrete type, looked
    /// up by any address inside its window.
    pub fn device_at<T: Device + 'static>(&self, addr: u16) -> Option<&T> {
        self.devices
            .iter()
            .find(|m| m.contains(addr))
            .and_then(|m| m.device.as_any().downcast_ref::<T>())
    }

    /// Mutable variant of [`SystemBus::device_at`].
    pub fn device_at_mut<T: Device + 'static>(&mut self, addr: u16) -> Option<&mut T> {
        self.devices
            .iter_mut()
            .find(|m| m.contains(addr))
            .and_then(|m| m.device.as_any_mut().downcast_mut::<T>())
    }

    /// Marks a range write-protected; writes into it are dropped.
    pub fn protect(&mut self, range: AddressRange) {
        self.protected.add(range);
    }

    /// Removes write protection from a range.
    pub fn unprotect(&mut self, range: AddressRange) {
        self.protected.remove(range);
    }

    /// The current protected ranges.
    pub fn protected(&self) -> &AddressRangeList {
        &self.protected
    }

    /// Copies bytes straight into RAM, bypassing devices and protection.
    /// Used for loading images before execution.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        for (i, &b) in bytes.iter().enumerate() {
            match (base as usize).checked_add(i) {
                Some(addr) if addr <= 0xFFFF => self.ram[addr] = b,
                _ => break,
            }
        }
    }

    /// Reads RAM directly, bypassing device dispatch.
    pub fn ram(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    /// Host time to sleep after each tick; zero disables pacing.
    pub fn set_tick_pause(&mut self, pause: Duration) {
        self.tick_pause = pause;
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SystemBus {
    fn read(&mut self, addr: u16) -> u8 {
        for mapping in &mut self.devices {
            if mapping.contains(addr) {
                return mapping.device.read(addr - mapping.base);
            }
        }
        self.ram[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        for mapping in &mut self.devices {
            if mapping.contains(addr) {
                mapping.device.write(addr - mapping.base, value);
                return;
            }
        }
        if self.protected.contains(addr) {
            log::debug!("write to protected address {addr:#06X} ignored");
            return;
        }
        self.ram[addr as usize] = value;
    }

    fn tick(&mut self) {
        for mapping in &mut self.devices {
            mapping.device.tick();
        }
        if !self.tick_pause.is_zero() {
            std::thread::sleep(self.tick_pause);
        }
    }

    fn irq_active(&self) -> bool {
        self.devices.iter().any(|m| m.device.irq_pending())
    }
}

/// Configuration accepted by [`Machine::new`].
#[derive(Debug, Clone, Default)]
pub struct MachineConfig {
    /// Processor variant, selecting the decimal-mode V-flag rule.
    pub variant: Variant,
    /// Host time the tick hook sleeps per instruction; zero disables
    /// pacing.
    pub tick_duration: Duration,
}

/// An assembled machine: CPU, two serial adapters, a timer/interface
/// adapter, a file-I/O port and a ROM window.
///
/// ## Memory Map
///
/// | Range | Contents |
/// |-------|----------|
/// | 0xC010-0xC013 | serial adapter 1 |
/// | 0xC020-0xC023 | serial adapter 2 |
/// | 0xC030-0xC03F | timer/interface adapter |
/// | 0xC040-0xC04F | file-I/O port |
/// | 0xD000-0xFFFF | ROM (write-protected once loaded) |
///
/// # Examples
///
/// ```
/// use lib65c02::{Machine, MachineConfig};
///
/// let mut machine = Machine::new(MachineConfig::default());
/// // A tiny ROM: LDA #$42, then branch-to-self.
/// machine.load_rom(&[0xA9, 0x42, 0x80, 0xFE]).unwrap();
/// machine.cpu_mut().set_pc(0xD000);
/// machine.step();
/// assert_eq!(machine.cpu().a(), 0x42);
/// ```
pub struct Machine {
    cpu: Cpu<SystemBus>,
}

impl Machine {
    /// Builds the standard machine. The reset vector is whatever the
    /// (initially zeroed) ROM window holds, so load a ROM and call
    /// [`Machine::reset`] before running.
    pub fn new(config: MachineConfig) -> Self {
        let mut bus = SystemBus::new();
        bus.set_tick_pause(config.tick_duration);
        // The standard windows are disjoint by construction.
        bus.add_device(SERIAL1_BASE, Box::new(Acia::new()))
            .expect("standard memory map is disjoint");
        bus.add_device(SERIAL2_BASE, Box::new(Acia::new()))
            .expect("standard memory map is disjoint");
        bus.add_device(VIA_BASE, Box::new(Via::new()))
            .expect("standard memory map is disjoint");
        bus.add_device(FILEIO_BASE, Box::new(FileIo::new()))
            .expect("standard memory map is disjoint");

        Self {
            cpu: Cpu::with_variant(bus, config.variant),
        }
    }

    /// Loads a binary ROM image at [`ROM_BASE`] and write-protects the
    /// window. Fails if the image is larger than the window.
    pub fn load_rom(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let capacity = 0x10000 - ROM_BASE as usize;
        if image.len() > capacity {
            return Err(LoadError::TooLarge {
                size: image.len(),
                capacity,
            });
        }
        self.cpu.bus_mut().load(ROM_BASE, image);
        self.cpu.bus_mut().protect(AddressRange::new(ROM_BASE, 0xFFFF));
        Ok(())
    }

    /// Loads a Wozmon-format text ROM image into the ROM window and
    /// write-protects it. Returns the number of bytes stored.
    pub fn load_rom_text(&mut self, text: &str) -> usize {
        let bus = self.cpu.bus_mut();
        let mut window = [0u8; 0x10000 - ROM_BASE as usize];
        for (i, slot) in window.iter_mut().enumerate() {
            *slot = bus.ram(ROM_BASE + i as u16);
        }
        let count = rom::load_wozmon(&mut window, ROM_BASE, text);
        bus.load(ROM_BASE, &window);
        bus.protect(AddressRange::new(ROM_BASE, 0xFFFF));
        count
    }

    /// Copies an image into RAM at an arbitrary base, bypassing write
    /// protection.
    pub fn load_image(&mut self, base: u16, bytes: &[u8]) {
        self.cpu.bus_mut().load(base, bytes);
    }

    /// The CPU.
    pub fn cpu(&self) -> &Cpu<SystemBus> {
        &self.cpu
    }

    /// The CPU, mutably.
    pub fn cpu_mut(&mut self) -> &mut Cpu<SystemBus> {
        &mut self.cpu
    }

    /// The first serial adapter.
    pub fn serial1_mut(&mut self) -> Option<&mut Acia> {
        self.cpu.bus_mut().device_at_mut::<Acia>(SERIAL1_BASE)
    }

    /// The second serial adapter.
    pub fn serial2_mut(&mut self) -> Option<&mut Acia> {
        self.cpu.bus_mut().device_at_mut::<Acia>(SERIAL2_BASE)
    }

    /// The timer/interface adapter.
    pub fn via_mut(&mut self) -> Option<&mut Via> {
        self.cpu.bus_mut().device_at_mut::<Via>(VIA_BASE)
    }

    /// The file-I/O port.
    pub fn fileio_mut(&mut self) -> Option<&mut FileIo> {
        self.cpu.bus_mut().device_at_mut::<FileIo>(FILEIO_BASE)
    }

    /// Latches a CPU reset.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Executes one instruction.
    pub fn step(&mut self) {
        self.cpu.step();
    }

    /// Runs until halted.
    pub fn run(&mut self) {
        self.cpu.run();
    }

    /// Halts the CPU.
    pub fn halt(&mut self) {
        self.cpu.halt();
    }
}
