//! # Stack Instructions
//!
//! Pushes and pulls for A and the status register, plus the 65C02's X
//! and Y forms. PHP pushes with the break and unused bits set; PLP
//! ignores those positions in the popped byte.

use crate::bus::Bus;
use crate::cpu::{Cpu, Status};

/// PHA: push the accumulator.
pub(crate) fn execute_pha<B: Bus>(cpu: &mut Cpu<B>) {
    let a = cpu.a;
    cpu.push(a);
}

/// PHP: push the status register with break and unused set.
pub(crate) fn execute_php<B: Bus>(cpu: &mut Cpu<B>) {
    let frame = cpu.sr | Status::BREAK | Status::UNUSED;
    cpu.push(frame.bits());
}

/// PLA: pull the accumulator, setting N and Z.
pub(crate) fn execute_pla<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.pop();
    cpu.a = value;
    cpu.set_nz(value);
}

/// PLP: pull the status register, preserving the live break and unused
/// bits.
pub(crate) fn execute_plp<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.pop_status();
}

/// PHX: push X. 65C02 extension.
pub(crate) fn execute_phx<B: Bus>(cpu: &mut Cpu<B>) {
    let x = cpu.x;
    cpu.push(x);
}

/// PHY: push Y. 65C02 extension.
pub(crate) fn execute_phy<B: Bus>(cpu: &mut Cpu<B>) {
    let y = cpu.y;
    cpu.push(y);
}

/// PLX: pull X, setting N and Z. 65C02 extension.
pub(crate) fn execute_plx<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.pop();
    cpu.x = value;
    cpu.set_nz(value);
}

/// PLY: pull Y, setting N and Z. 65C02 extension.
pub(crate) fn execute_ply<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.pop();
    cpu.y = value;
    cpu.set_nz(value);
}
