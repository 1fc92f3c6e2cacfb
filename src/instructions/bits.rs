//! # Bit Test-and-Modify Instructions
//!
//! The 65C02's TSB and TRB: read-modify-write operations that set or
//! clear the accumulator's bits in memory. Z is set from A AND the
//! original memory value; no other flags change.

use crate::bus::Bus;
use crate::cpu::{Cpu, Operand, Status};

/// TSB: test and set bits.
pub(crate) fn execute_tsb<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.sr.set(Status::ZERO, cpu.a & value == 0);
    let result = value | cpu.a;
    cpu.write_operand(operand, result);
}

/// TRB: test and reset bits.
pub(crate) fn execute_trb<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.sr.set(Status::ZERO, cpu.a & value == 0);
    let result = value & !cpu.a;
    cpu.write_operand(operand, result);
}
