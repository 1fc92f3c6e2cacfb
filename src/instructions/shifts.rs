//! # Shift / Rotate Instructions
//!
//! ASL, LSR, ROL and ROR in accumulator and read-modify-write memory
//! forms. Carry captures the bit shifted out; for the rotates the bit
//! shifted in is the old carry. N and Z reflect the result.

use crate::bus::Bus;
use crate::cpu::{Cpu, Operand, Status};

/// ASL: arithmetic shift left, bit 7 into carry.
pub(crate) fn execute_asl<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let result = value << 1;
    cpu.sr.set(Status::CARRY, value & 0x80 != 0);
    cpu.write_operand(operand, result);
    cpu.set_nz(result);
}

/// LSR: logical shift right, bit 0 into carry.
pub(crate) fn execute_lsr<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let result = value >> 1;
    cpu.sr.set(Status::CARRY, value & 0x01 != 0);
    cpu.write_operand(operand, result);
    cpu.set_nz(result);
}

/// ROL: rotate left through carry.
pub(crate) fn execute_rol<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let carry_in = cpu.sr.contains(Status::CARRY) as u8;
    let result = (value << 1) | carry_in;
    cpu.sr.set(Status::CARRY, value & 0x80 != 0);
    cpu.write_operand(operand, result);
    cpu.set_nz(result);
}

/// ROR: rotate right through carry.
pub(crate) fn execute_ror<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let carry_in = cpu.sr.contains(Status::CARRY) as u8;
    let result = (value >> 1) | (carry_in << 7);
    cpu.sr.set(Status::CARRY, value & 0x01 != 0);
    cpu.write_operand(operand, result);
    cpu.set_nz(result);
}
