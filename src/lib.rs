//! # 6502 / 65C02 Emulator Core
//!
//! A portable emulator of the MOS 6502 and WDC 65C02 processors plus a
//! small set of memory-mapped peripherals: two asynchronous serial
//! adapters, an interval timer / interface adapter and a block-oriented
//! file-I/O port. The intended workload is classic firmware such as
//! MS-BASIC running over a serial console; observable register, flag and
//! memory behavior is what the core guarantees, not per-cycle timing.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib65c02::{Bus, Cpu, FlatBus};
//!
//! let mut bus = FlatBus::new();
//! // Program: LDA #$21, STA $0200, then branch-to-self.
//! bus.load(0x8000, &[0xA9, 0x21, 0x8D, 0x00, 0x02, 0x80, 0xFE]);
//! bus.write(0xFFFC, 0x00); // reset vector -> 0x8000
//! bus.write(0xFFFD, 0x80);
//!
//! let mut cpu = Cpu::new(bus);
//! cpu.step();
//! cpu.step();
//! assert_eq!(cpu.bus_mut().read(0x0200), 0x21);
//! ```
//!
//! ## Architecture
//!
//! - `cpu` — fetch/decode/execute interpreter, generic over a [`Bus`]
//! - `opcodes` / `addressing` — table-driven decoding
//! - `bus` — the bus capability and a flat test bus
//! - `machine` — RAM, device windows and write-protected ranges, plus a
//!   pre-wired machine at the conventional memory map
//! - `devices` — the serial, timer and file-I/O peripherals
//! - `ranges` — the protected-address-range bookkeeping
//! - `rom` — binary and Wozmon-format image loaders
//!
//! The CPU owns its bus and is driven synchronously from the host
//! thread: `step()` executes exactly one instruction and ticks the
//! peripherals once; `run()` loops until halted. Interrupts are latched
//! by `irq()` / `nmi()` and serviced only at instruction boundaries.

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod devices;
pub mod machine;
pub mod opcodes;
pub mod ranges;
pub mod rom;

mod instructions;

pub use addressing::AddressingMode;
pub use bus::{Bus, FlatBus};
pub use cpu::{Cpu, Status, Variant, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use devices::{Acia, ChannelInput, Device, FileIo, QueuedInput, SerialInput, Via};
pub use machine::{DeviceError, Machine, MachineConfig, SystemBus};
pub use opcodes::{Mnemonic, ADDRESSING, MNEMONICS};
pub use rom::LoadError;
