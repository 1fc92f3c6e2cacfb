//! # ALU Instructions
//!
//! Arithmetic and logical operations: ADC, SBC, AND, ORA, EOR, BIT and
//! the compares CMP, CPX, CPY.
//!
//! ADC and SBC honor the decimal flag. In decimal mode the result byte is
//! nibble-adjusted BCD while N and Z are still derived from the binary
//! unadjusted result, matching NMOS silicon. The V flag in decimal mode
//! is the one variant-dependent behavior in the core: forced clear on the
//! NMOS 6502, computed from the binary result on the 65C02.

use crate::bus::Bus;
use crate::cpu::{Cpu, Operand, Status, Variant};

/// ADC: add operand and carry to the accumulator.
pub(crate) fn execute_adc<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let m = cpu.operand_value(operand);
    let carry_in = cpu.sr.contains(Status::CARRY) as u8;
    let a = cpu.a;

    if cpu.sr.contains(Status::DECIMAL) {
        let binary = (a as u16 + m as u16 + carry_in as u16) as u8;

        let mut lo = (a & 0x0F) as u16 + (m & 0x0F) as u16 + carry_in as u16;
        let mut hi = (a >> 4) as u16 + (m >> 4) as u16;
        if lo > 9 {
            lo += 6;
            hi += 1;
        }
        let carry = hi > 9;
        if carry {
            hi += 6;
        }

        cpu.a = (((hi as u8) & 0x0F) << 4) | ((lo as u8) & 0x0F);
        cpu.sr.set(Status::CARRY, carry);
        // N and Z reflect the binary unadjusted result.
        cpu.set_nz(binary);
        let overflow = match cpu.variant {
            Variant::Nmos6502 => false,
            Variant::Cmos65C02 => (a ^ binary) & (m ^ binary) & 0x80 != 0,
        };
        cpu.sr.set(Status::OVERFLOW, overflow);
    } else {
        let sum = a as u16 + m as u16 + carry_in as u16;
        let result = sum as u8;
        cpu.sr.set(Status::CARRY, sum > 0xFF);
        cpu.sr
            .set(Status::OVERFLOW, (a ^ result) & (m ^ result) & 0x80 != 0);
        cpu.a = result;
        cpu.set_nz(result);
    }
}

/// SBC: subtract operand and borrow from the accumulator.
pub(crate) fn execute_sbc<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let m = cpu.operand_value(operand);
    let borrow = (1 - cpu.sr.contains(Status::CARRY) as u8) as i16;
    let a = cpu.a;

    if cpu.sr.contains(Status::DECIMAL) {
        let binary = (a as i16 - m as i16 - borrow) as u8;

        let mut lo = (a & 0x0F) as i16 - (m & 0x0F) as i16 - borrow;
        let mut hi = (a >> 4) as i16 - (m >> 4) as i16;
        if lo < 0 {
            lo += 10;
            hi -= 1;
        }
        let carry = hi >= 0;
        if !carry {
            hi += 10;
        }

        cpu.a = (((hi as u8) & 0x0F) << 4) | ((lo as u8) & 0x0F);
        cpu.sr.set(Status::CARRY, carry);
        cpu.set_nz(binary);
        let overflow = match cpu.variant {
            Variant::Nmos6502 => false,
            Variant::Cmos65C02 => (a ^ m) & (a ^ binary) & 0x80 != 0,
        };
        cpu.sr.set(Status::OVERFLOW, overflow);
    } else {
        let diff = a as i16 - m as i16 - borrow;
        let result = diff as u8;
        // Carry set means no borrow was needed.
        cpu.sr.set(Status::CARRY, diff >= 0);
        cpu.sr
            .set(Status::OVERFLOW, (a ^ m) & (a ^ result) & 0x80 != 0);
        cpu.a = result;
        cpu.set_nz(result);
    }
}

/// AND: bitwise AND into the accumulator.
pub(crate) fn execute_and<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let m = cpu.operand_value(operand);
    cpu.a &= m;
    let a = cpu.a;
    cpu.set_nz(a);
}

/// ORA: bitwise OR into the accumulator.
pub(crate) fn execute_ora<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let m = cpu.operand_value(operand);
    cpu.a |= m;
    let a = cpu.a;
    cpu.set_nz(a);
}

/// EOR: bitwise exclusive-OR into the accumulator.
pub(crate) fn execute_eor<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let m = cpu.operand_value(operand);
    cpu.a ^= m;
    let a = cpu.a;
    cpu.set_nz(a);
}

/// BIT: N and V from operand bits 7 and 6, Z from A AND operand.
/// The accumulator is not modified.
pub(crate) fn execute_bit<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let m = cpu.operand_value(operand);
    cpu.sr.set(Status::NEGATIVE, m & 0x80 != 0);
    cpu.sr.set(Status::OVERFLOW, m & 0x40 != 0);
    cpu.sr.set(Status::ZERO, cpu.a & m == 0);
}

fn compare<B: Bus>(cpu: &mut Cpu<B>, register: u8, m: u8) {
    let result = register.wrapping_sub(m);
    cpu.sr.set(Status::CARRY, register >= m);
    cpu.set_nz(result);
}

/// CMP: compare operand against the accumulator.
pub(crate) fn execute_cmp<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let m = cpu.operand_value(operand);
    let a = cpu.a;
    compare(cpu, a, m);
}

/// CPX: compare operand against X.
pub(crate) fn execute_cpx<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let m = cpu.operand_value(operand);
    let x = cpu.x;
    compare(cpu, x, m);
}

/// CPY: compare operand against Y.
pub(crate) fn execute_cpy<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let m = cpu.operand_value(operand);
    let y = cpu.y;
    compare(cpu, y, m);
}
