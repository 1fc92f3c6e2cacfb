//! # Flag Instructions
//!
//! Direct status flag manipulation: CLC, SEC, CLI, SEI, CLD, SED, CLV.

use crate::bus::Bus;
use crate::cpu::{Cpu, Status};

/// CLC: clear carry.
pub(crate) fn execute_clc<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sr.remove(Status::CARRY);
}

/// SEC: set carry.
pub(crate) fn execute_sec<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sr.insert(Status::CARRY);
}

/// CLI: clear interrupt disable.
pub(crate) fn execute_cli<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sr.remove(Status::IRQ_DISABLE);
}

/// SEI: set interrupt disable.
pub(crate) fn execute_sei<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sr.insert(Status::IRQ_DISABLE);
}

/// CLD: clear decimal mode.
pub(crate) fn execute_cld<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sr.remove(Status::DECIMAL);
}

/// SED: set decimal mode.
pub(crate) fn execute_sed<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sr.insert(Status::DECIMAL);
}

/// CLV: clear overflow.
pub(crate) fn execute_clv<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sr.remove(Status::OVERFLOW);
}
