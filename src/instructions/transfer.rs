//! # Transfer Instructions
//!
//! Register-to-register moves. All set N and Z from the moved value
//! except TXS, which affects no flags.

use crate::bus::Bus;
use crate::cpu::Cpu;

/// TAX: A to X.
pub(crate) fn execute_tax<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.a;
    let x = cpu.x;
    cpu.set_nz(x);
}

/// TAY: A to Y.
pub(crate) fn execute_tay<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.a;
    let y = cpu.y;
    cpu.set_nz(y);
}

/// TXA: X to A.
pub(crate) fn execute_txa<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.a = cpu.x;
    let a = cpu.a;
    cpu.set_nz(a);
}

/// TYA: Y to A.
pub(crate) fn execute_tya<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.a = cpu.y;
    let a = cpu.a;
    cpu.set_nz(a);
}

/// TSX: SP to X.
pub(crate) fn execute_tsx<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.sp;
    let x = cpu.x;
    cpu.set_nz(x);
}

/// TXS: X to SP. No flags.
pub(crate) fn execute_txs<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sp = cpu.x;
}
