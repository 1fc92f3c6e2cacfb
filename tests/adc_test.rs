//! Tests for the ADC (add with carry) instruction in binary mode.

use lib65c02::{Bus, Cpu, FlatBus, Status};

fn setup_cpu() -> Cpu<FlatBus> {
    let mut bus = FlatBus::new();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x80);
    Cpu::new(bus)
}

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x69, 0x05]); // ADC #$05
    cpu.set_a(0x10);

    cpu.step();

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.status().contains(Status::CARRY));
    assert!(!cpu.status().contains(Status::ZERO));
    assert!(!cpu.status().contains(Status::OVERFLOW));
    assert!(!cpu.status().contains(Status::NEGATIVE));
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_adc_with_carry_in() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x69, 0x05]);
    cpu.set_a(0x10);
    cpu.set_status(cpu.status() | Status::CARRY);

    cpu.step();

    assert_eq!(cpu.a(), 0x16);
}

#[test]
fn test_adc_carry_out_and_zero() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x69, 0xFF]);
    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().contains(Status::CARRY));
    assert!(cpu.status().contains(Status::ZERO));
}

#[test]
fn test_adc_overflow_positive_operands() {
    let mut cpu = setup_cpu();
    // 0x50 + 0x50 = 0xA0: two positives yielding a negative.
    cpu.bus_mut().load(0x8000, &[0x69, 0x50]);
    cpu.set_a(0x50);

    cpu.step();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.status().contains(Status::OVERFLOW));
    assert!(cpu.status().contains(Status::NEGATIVE));
    assert!(!cpu.status().contains(Status::CARRY));
}

#[test]
fn test_adc_overflow_negative_operands() {
    let mut cpu = setup_cpu();
    // 0x90 + 0x90 = 0x120: two negatives yielding a positive byte.
    cpu.bus_mut().load(0x8000, &[0x69, 0x90]);
    cpu.set_a(0x90);

    cpu.step();

    assert_eq!(cpu.a(), 0x20);
    assert!(cpu.status().contains(Status::OVERFLOW));
    assert!(cpu.status().contains(Status::CARRY));
}

#[test]
fn test_adc_no_overflow_mixed_signs() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x69, 0x90]);
    cpu.set_a(0x50);

    cpu.step();

    assert_eq!(cpu.a(), 0xE0);
    assert!(!cpu.status().contains(Status::OVERFLOW));
}

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x65, 0x42]); // ADC $42
    cpu.bus_mut().write(0x0042, 0x07);
    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x08);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_adc_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x7D, 0x00, 0x20]); // ADC $2000,X
    cpu.bus_mut().write(0x2005, 0x30);
    cpu.set_a(0x02);
    cpu.set_x(0x05);

    cpu.step();

    assert_eq!(cpu.a(), 0x32);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_adc_indirect_y() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x71, 0x40]); // ADC ($40),Y
    cpu.bus_mut().write(0x0040, 0x00);
    cpu.bus_mut().write(0x0041, 0x30); // pointer -> 0x3000
    cpu.bus_mut().write(0x3004, 0x11);
    cpu.set_a(0x11);
    cpu.set_y(0x04);

    cpu.step();

    assert_eq!(cpu.a(), 0x22);
}
