//! Tests for 65C02-specific instructions and the decoded-but-unmodeled
//! opcode slots.

use lib65c02::{Bus, Cpu, FlatBus, Status};

fn setup_cpu() -> Cpu<FlatBus> {
    let mut bus = FlatBus::new();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x80);
    Cpu::new(bus)
}

#[test]
fn test_tsb_sets_bits_and_z() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x04, 0x10]); // TSB $10
    cpu.bus_mut().write(0x0010, 0x0C);
    cpu.set_a(0x03);

    cpu.step();

    assert_eq!(cpu.bus_mut().read(0x0010), 0x0F);
    assert!(cpu.status().contains(Status::ZERO)); // 0x03 & 0x0C == 0
}

#[test]
fn test_trb_clears_bits_and_z() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x1C, 0x00, 0x20]); // TRB $2000
    cpu.bus_mut().write(0x2000, 0x0F);
    cpu.set_a(0x03);

    cpu.step();

    assert_eq!(cpu.bus_mut().read(0x2000), 0x0C);
    assert!(!cpu.status().contains(Status::ZERO)); // 0x03 & 0x0F != 0
}

#[test]
fn test_trb_tsb_leave_accumulator() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x14, 0x10, 0x0C, 0x00, 0x20]); // TRB $10, TSB $2000
    cpu.set_a(0x55);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_stp_and_wai_decode_as_noops() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xDB, 0xCB]); // STP, WAI

    cpu.step();
    assert_eq!(cpu.pc(), 0x8001);
    assert!(!cpu.halted());

    cpu.step();
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_bbr_bbs_advance_without_branching() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x0F, 0x40, 0x8F, 0x40]); // BBR0, BBS0

    cpu.step();
    assert_eq!(cpu.pc(), 0x8002);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8004);
}

#[test]
fn test_rmb_smb_advance_without_writing() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x07, 0x10, 0x87, 0x10]); // RMB0 $10, SMB0 $10
    cpu.bus_mut().write(0x0010, 0x55);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.pc(), 0x8004);
    assert_eq!(cpu.bus_mut().read(0x0010), 0x55);
}

#[test]
fn test_lda_zero_page_indirect() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xB2, 0x40]); // LDA ($40)
    cpu.bus_mut().write(0x0040, 0x34);
    cpu.bus_mut().write(0x0041, 0x12);
    cpu.bus_mut().write(0x1234, 0x77);

    cpu.step();

    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_zero_page_indirect_pointer_wraps() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xB2, 0xFF]); // LDA ($FF)
    cpu.bus_mut().write(0x00FF, 0x00);
    cpu.bus_mut().write(0x0000, 0x40); // high byte from 0x00, not 0x100
    cpu.bus_mut().write(0x4000, 0x99);

    cpu.step();

    assert_eq!(cpu.a(), 0x99);
}
