//! Tests for the register transfer instructions.

use lib65c02::{Bus, Cpu, FlatBus, Status};

fn setup_cpu() -> Cpu<FlatBus> {
    let mut bus = FlatBus::new();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x80);
    Cpu::new(bus)
}

#[test]
fn test_tax_tay() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xAA, 0xA8]); // TAX, TAY
    cpu.set_a(0x80);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.status().contains(Status::NEGATIVE));
}

#[test]
fn test_txa_tya() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x8A, 0x98]); // TXA, TYA
    cpu.set_x(0x42);
    cpu.set_y(0x00);

    cpu.step();
    assert_eq!(cpu.a(), 0x42);

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().contains(Status::ZERO));
}

#[test]
fn test_tsx_txs() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xBA, 0xA2, 0x20, 0x9A]); // TSX, LDX #$20, TXS

    cpu.step();
    assert_eq!(cpu.x(), 0xFD);

    cpu.step(); // LDX #$20
    cpu.step(); // TXS
    assert_eq!(cpu.sp(), 0x20);
    // TXS does not touch flags; LDX cleared N from TSX's 0xFD.
    assert!(!cpu.status().contains(Status::NEGATIVE));
}

#[test]
fn test_tsx_sets_negative_from_sp() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0xBA); // TSX

    cpu.step();

    assert!(cpu.status().contains(Status::NEGATIVE)); // 0xFD has bit 7
}
