//! # Branch Instructions
//!
//! Conditional branches on the four testable flags, plus the 65C02's
//! unconditional BRA. The branch target was computed by the addressing
//! phase with PC already advanced past the operand byte.

use crate::bus::Bus;
use crate::cpu::{Cpu, Operand, Status};

fn branch_if<B: Bus>(cpu: &mut Cpu<B>, operand: Operand, condition: bool) {
    if condition {
        cpu.pc = cpu.operand_address(operand);
    }
}

/// BCC: branch if carry clear.
pub(crate) fn execute_bcc<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let taken = !cpu.sr.contains(Status::CARRY);
    branch_if(cpu, operand, taken);
}

/// BCS: branch if carry set.
pub(crate) fn execute_bcs<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let taken = cpu.sr.contains(Status::CARRY);
    branch_if(cpu, operand, taken);
}

/// BEQ: branch if zero set.
pub(crate) fn execute_beq<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let taken = cpu.sr.contains(Status::ZERO);
    branch_if(cpu, operand, taken);
}

/// BNE: branch if zero clear.
pub(crate) fn execute_bne<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let taken = !cpu.sr.contains(Status::ZERO);
    branch_if(cpu, operand, taken);
}

/// BMI: branch if negative set.
pub(crate) fn execute_bmi<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let taken = cpu.sr.contains(Status::NEGATIVE);
    branch_if(cpu, operand, taken);
}

/// BPL: branch if negative clear.
pub(crate) fn execute_bpl<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let taken = !cpu.sr.contains(Status::NEGATIVE);
    branch_if(cpu, operand, taken);
}

/// BVC: branch if overflow clear.
pub(crate) fn execute_bvc<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let taken = !cpu.sr.contains(Status::OVERFLOW);
    branch_if(cpu, operand, taken);
}

/// BVS: branch if overflow set.
pub(crate) fn execute_bvs<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    let taken = cpu.sr.contains(Status::OVERFLOW);
    branch_if(cpu, operand, taken);
}

/// BRA: branch always. 65C02 extension.
pub(crate) fn execute_bra<B: Bus>(cpu: &mut Cpu<B>, operand: Operand) {
    branch_if(cpu, operand, true);
}
