//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary CPU state and memory image, then executes a
//! bounded burst of instructions looking for panics.

#![no_main]

use arbitrary::Arbitrary;
use lib65c02::{Bus, Cpu, FlatBus, Status, Variant};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    cmos: bool,
}

/// Memory regions the fuzzed instructions are most likely to touch.
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction stream at the reset target.
    program: [u8; 16],
    /// Zero page contents (pointers for the indirect modes).
    zero_page: [u8; 256],
    /// Stack page contents.
    stack_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut bus = FlatBus::new();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x80);
    bus.write(0xFFFF, 0x90); // IRQ vector -> 0x9000
    bus.write(0xFFFB, 0xA0); // NMI vector -> 0xA000

    bus.load(0x8000, &input.memory.program);
    bus.load(0x0000, &input.memory.zero_page);
    bus.load(0x0100, &input.memory.stack_page);

    let variant = if input.cpu_state.cmos {
        Variant::Cmos65C02
    } else {
        Variant::Nmos6502
    };
    let mut cpu = Cpu::with_variant(bus, variant);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(Status::from_bits_retain(input.cpu_state.status));

    // A short burst; any opcode sequence must execute without panicking.
    for _ in 0..16 {
        cpu.step();
    }
});
