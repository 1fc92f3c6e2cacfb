//! # Load / Store Instructions
//!
//! LDA, LDX, LDY set N and Z from the loaded value. The stores (STA,
//! STX, STY and the 65C02's STZ) affect no flags and never read their
//! target address before writing, which matters for memory-mapped
//! registers with read side effects.

use crate::bus::Bus;
use crate::cpu::{Cpu, Operand};

/// LDA: load the accumulator.
pub(crate) fn execute_lda<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.a = value;
    cpu.set_nz(value);
}

/// LDX: load X.
pub(crate) fn execute_ldx<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.x = value;
    cpu.set_nz(value);
}

/// LDY: load Y.
pub(crate) fn execute_ldy<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.y = value;
    cpu.set_nz(value);
}

/// STA: store the accumulator.
pub(crate) fn execute_sta<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let a = cpu.a;
    cpu.write_operand(operand, a);
}

/// STX: store X.
pub(crate) fn execute_stx<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let x = cpu.x;
    cpu.write_operand(operand, x);
}

/// STY: store Y.
pub(crate) fn execute_sty<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let y = cpu.y;
    cpu.write_operand(operand, y);
}

/// STZ: store zero. 65C02 extension.
pub(crate) fn execute_stz<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    cpu.write_operand(operand, 0);
}
