//! # Increment / Decrement Instructions
//!
//! INC and DEC operate on memory or (65C02) on the accumulator; the
//! register forms INX, INY, DEX, DEY are implied. All set N and Z from
//! the result.

use crate::bus::Bus;
use crate::cpu::{Cpu, Operand};

/// INC: increment the operand (memory or accumulator).
pub(crate) fn execute_inc<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let result = cpu.operand_value(operand).wrapping_add(1);
    cpu.write_operand(operand, result);
    cpu.set_nz(result);
}

/// DEC: decrement the operand (memory or accumulator).
pub(crate) fn execute_dec<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let result = cpu.operand_value(operand).wrapping_sub(1);
    cpu.write_operand(operand, result);
    cpu.set_nz(result);
}

/// INX: increment X.
pub(crate) fn execute_inx<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.x.wrapping_add(1);
    let x = cpu.x;
    cpu.set_nz(x);
}

/// INY: increment Y.
pub(crate) fn execute_iny<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.y.wrapping_add(1);
    let y = cpu.y;
    cpu.set_nz(y);
}

/// DEX: decrement X.
pub(crate) fn execute_dex<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.x.wrapping_sub(1);
    let x = cpu.x;
    cpu.set_nz(x);
}

/// DEY: decrement Y.
pub(crate) fn execute_dey<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.y.wrapping_sub(1);
    let y = cpu.y;
    cpu.set_nz(y);
}
