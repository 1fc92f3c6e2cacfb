//! Tests for the BRK/RTI round trip and their stack frames.

use lib65c02::{Bus, Cpu, FlatBus, Status};

fn setup_cpu() -> Cpu<FlatBus> {
    let mut bus = FlatBus::new();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x02);
    // IRQ/BRK vector -> 0x2000.
    bus.write(0xFFFE, 0x00);
    bus.write(0xFFFF, 0x20);
    Cpu::new(bus)
}

#[test]
fn test_brk_enters_handler() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x0200, &[0x00, 0xEA]); // BRK + padding
    cpu.set_status(cpu.status() - Status::IRQ_DISABLE);

    cpu.step();

    assert_eq!(cpu.pc(), 0x2000);
    assert_eq!(cpu.sp(), 0xFA); // three bytes pushed
    assert!(cpu.status().contains(Status::IRQ_DISABLE));
}

#[test]
fn test_brk_frame_contents() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x0200, &[0x00, 0xEA]);
    cpu.set_status(cpu.status() - Status::IRQ_DISABLE);

    cpu.step();

    // Return address 0x0202 (past the padding byte), high byte first.
    assert_eq!(cpu.bus_mut().read(0x01FD), 0x02);
    assert_eq!(cpu.bus_mut().read(0x01FC), 0x02);
    // The status frame at 0x01FB has the break and unused bits set.
    let frame = cpu.bus_mut().read(0x01FB);
    assert_eq!(frame & 0x10, 0x10, "BRK frames carry bit 4");
    assert_eq!(frame & 0x20, 0x20, "pushed frames carry bit 5");
}

#[test]
fn test_rti_restores_pc_and_sp() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x0200, &[0x00, 0xEA]); // BRK + padding
    cpu.bus_mut().write(0x2000, 0x40); // RTI
    cpu.set_status(cpu.status() - Status::IRQ_DISABLE);

    cpu.step(); // BRK
    assert_eq!(cpu.pc(), 0x2000);

    cpu.step(); // RTI
    assert_eq!(cpu.pc(), 0x0202);
    assert_eq!(cpu.sp(), 0xFD);
    // The pushed frame had irq-disable clear, and RTI restored it.
    assert!(!cpu.status().contains(Status::IRQ_DISABLE));
}

#[test]
fn test_rti_restores_flags() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x0200, &[0x00, 0xEA]);
    cpu.bus_mut().write(0x2000, 0x40);
    cpu.set_status(cpu.status() | Status::CARRY | Status::DECIMAL);
    cpu.set_status(cpu.status() - Status::IRQ_DISABLE);

    cpu.step(); // BRK
    cpu.step(); // RTI

    assert!(cpu.status().contains(Status::CARRY));
    assert!(cpu.status().contains(Status::DECIMAL));
}
