//! # Opcode Decode Tables
//!
//! Two parallel 256-entry tables map an opcode byte to its mnemonic and to
//! its addressing mode. Together they are the single source of truth for
//! instruction decoding: the CPU indexes both with the fetched opcode and
//! never consults anything else.
//!
//! The tables cover the 56 documented NMOS 6502 instructions plus the WDC
//! 65C02 additions (BRA, PHX/PHY/PLX/PLY, STZ, TRB, TSB, STP, WAI, the
//! BBR/BBS/RMB/SMB families, BIT immediate/indexed, INC/DEC accumulator,
//! zero-page indirect, and JMP absolute-indexed-indirect). Every cell with
//! no documented instruction decodes as NOP in implied mode, so unmapped
//! opcodes consume one byte and do nothing.

use crate::addressing::AddressingMode;

/// Instruction mnemonic enumeration.
///
/// One variant per documented 6502/65C02 instruction. The bit-branch and
/// bit-manipulate families are enumerated per bit position, matching the
/// opcode layout (one opcode per bit).
///
/// STP, WAI and the BBR/BBS/RMB/SMB slots are decoded but execute as
/// no-ops; they consume operand bytes according to their addressing-mode
/// table entries and change no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl,
    Brk, Bvc, Bvs, Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy,
    Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp, Jsr, Lda,
    Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol,
    Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty,
    Tax, Tay, Tsx, Txa, Txs, Tya,
    // 65C02 extended instructions
    Bra, Phx, Phy, Plx, Ply, Stp, Stz, Trb, Tsb, Wai,
    Bbr0, Bbr1, Bbr2, Bbr3, Bbr4, Bbr5, Bbr6, Bbr7,
    Bbs0, Bbs1, Bbs2, Bbs3, Bbs4, Bbs5, Bbs6, Bbs7,
    Rmb0, Rmb1, Rmb2, Rmb3, Rmb4, Rmb5, Rmb6, Rmb7,
    Smb0, Smb1, Smb2, Smb3, Smb4, Smb5, Smb6, Smb7,
}

/// Total instruction length in bytes (opcode plus operand) for an opcode.
pub fn instruction_length(opcode: u8) -> u16 {
    1 + ADDRESSING[opcode as usize].operand_size()
}

use AddressingMode::*;
use Mnemonic::*;

/// Opcode → mnemonic table.
pub const MNEMONICS: [Mnemonic; 256] = [
    //  x0    x1    x2    x3    x4    x5    x6    x7
    Brk, Ora, Nop, Nop, Tsb, Ora, Asl, Rmb0, // 0x00
    Php, Ora, Asl, Nop, Tsb, Ora, Asl, Bbr0, // 0x08
    Bpl, Ora, Ora, Nop, Trb, Ora, Asl, Rmb1, // 0x10
    Clc, Ora, Inc, Nop, Trb, Ora, Asl, Bbr1, // 0x18
    Jsr, And, Nop, Nop, Bit, And, Rol, Rmb2, // 0x20
    Plp, And, Rol, Nop, Bit, And, Rol, Bbr2, // 0x28
    Bmi, And, And, Nop, Bit, And, Rol, Rmb3, // 0x30
    Sec, And, Dec, Nop, Bit, And, Rol, Bbr3, // 0x38
    Rti, Eor, Nop, Nop, Nop, Eor, Lsr, Rmb4, // 0x40
    Pha, Eor, Lsr, Nop, Jmp, Eor, Lsr, Bbr4, // 0x48
    Bvc, Eor, Eor, Nop, Nop, Eor, Lsr, Rmb5, // 0x50
    Cli, Eor, Phy, Nop, Nop, Eor, Lsr, Bbr5, // 0x58
    Rts, Adc, Nop, Nop, Stz, Adc, Ror, Rmb6, // 0x60
    Pla, Adc, Ror, Nop, Jmp, Adc, Ror, Bbr6, // 0x68
    Bvs, Adc, Adc, Nop, Stz, Adc, Ror, Rmb7, // 0x70
    Sei, Adc, Ply, Nop, Jmp, Adc, Ror, Bbr7, // 0x78
    Bra, Sta, Nop, Nop, Sty, Sta, Stx, Smb0, // 0x80
    Dey, Bit, Txa, Nop, Sty, Sta, Stx, Bbs0, // 0x88
    Bcc, Sta, Sta, Nop, Sty, Sta, Stx, Smb1, // 0x90
    Tya, Sta, Txs, Nop, Stz, Sta, Stz, Bbs1, // 0x98
    Ldy, Lda, Ldx, Nop, Ldy, Lda, Ldx, Smb2, // 0xA0
    Tay, Lda, Tax, Nop, Ldy, Lda, Ldx, Bbs2, // 0xA8
    Bcs, Lda, Lda, Nop, Ldy, Lda, Ldx, Smb3, // 0xB0
    Clv, Lda, Tsx, Nop, Ldy, Lda, Ldx, Bbs3, // 0xB8
    Cpy, Cmp, Nop, Nop, Cpy, Cmp, Dec, Smb4, // 0xC0
    Iny, Cmp, Dex, Wai, Cpy, Cmp, Dec, Bbs4, // 0xC8
    Bne, Cmp, Cmp, Nop, Nop, Cmp, Dec, Smb5, // 0xD0
    Cld, Cmp, Phx, Stp, Nop, Cmp, Dec, Bbs5, // 0xD8
    Cpx, Sbc, Nop, Nop, Cpx, Sbc, Inc, Smb6, // 0xE0
    Inx, Sbc, Nop, Nop, Cpx, Sbc, Inc, Bbs6, // 0xE8
    Beq, Sbc, Sbc, Nop, Nop, Sbc, Inc, Smb7, // 0xF0
    Sed, Sbc, Plx, Nop, Nop, Sbc, Inc, Bbs7, // 0xF8
];

/// Opcode → addressing-mode table.
pub const ADDRESSING: [AddressingMode; 256] = [
    // 0x00
    Implied, IndirectX, Implied, Implied, ZeroPage, ZeroPage, ZeroPage, ZeroPage,
    // 0x08
    Implied, Immediate, Accumulator, Implied, Absolute, Absolute, Absolute, Relative,
    // 0x10
    Relative, IndirectY, ZeroPageIndirect, Implied, ZeroPage, ZeroPageX, ZeroPageX, ZeroPage,
    // 0x18
    Implied, AbsoluteY, Accumulator, Implied, Absolute, AbsoluteX, AbsoluteX, Relative,
    // 0x20
    Absolute, IndirectX, Implied, Implied, ZeroPage, ZeroPage, ZeroPage, ZeroPage,
    // 0x28
    Implied, Immediate, Accumulator, Implied, Absolute, Absolute, Absolute, Relative,
    // 0x30
    Relative, IndirectY, ZeroPageIndirect, Implied, ZeroPageX, ZeroPageX, ZeroPageX, ZeroPage,
    // 0x38
    Implied, AbsoluteY, Accumulator, Implied, AbsoluteX, AbsoluteX, AbsoluteX, Relative,
    // 0x40
    Implied, IndirectX, Implied, Implied, Implied, ZeroPage, ZeroPage, ZeroPage,
    // 0x48
    Implied, Immediate, Accumulator, Implied, Absolute, Absolute, Absolute, Relative,
    // 0x50
    Relative, IndirectY, ZeroPageIndirect, Implied, Implied, ZeroPageX, ZeroPageX, ZeroPage,
    // 0x58
    Implied, AbsoluteY, Implied, Implied, Implied, AbsoluteX, AbsoluteX, Relative,
    // 0x60
    Implied, IndirectX, Implied, Implied, ZeroPage, ZeroPage, ZeroPage, ZeroPage,
    // 0x68
    Implied, Immediate, Accumulator, Implied, Indirect, Absolute, Absolute, Relative,
    // 0x70
    Relative, IndirectY, ZeroPageIndirect, Implied, ZeroPageX, ZeroPageX, ZeroPageX, ZeroPage,
    // 0x78
    Implied, AbsoluteY, Implied, Implied, AbsoluteIndexedIndirect, AbsoluteX, AbsoluteX, Relative,
    // 0x80
    Relative, IndirectX, Implied, Implied, ZeroPage, ZeroPage, ZeroPage, ZeroPage,
    // 0x88
    Implied, Immediate, Implied, Implied, Absolute, Absolute, Absolute, Relative,
    // 0x90
    Relative, IndirectY, ZeroPageIndirect, Implied, ZeroPageX, ZeroPageX, ZeroPageY, ZeroPage,
    // 0x98
    Implied, AbsoluteY, Implied, Implied, Absolute, AbsoluteX, AbsoluteX, Relative,
    // 0xA0
    Immediate, IndirectX, Immediate, Implied, ZeroPage, ZeroPage, ZeroPage, ZeroPage,
    // 0xA8
    Implied, Immediate, Implied, Implied, Absolute, Absolute, Absolute, Relative,
    // 0xB0
    Relative, IndirectY, ZeroPageIndirect, Implied, ZeroPageX, ZeroPageX, ZeroPageY, ZeroPage,
    // 0xB8
    Implied, AbsoluteY, Implied, Implied, AbsoluteX, AbsoluteX, AbsoluteY, Relative,
    // 0xC0
    Immediate, IndirectX, Implied, Implied, ZeroPage, ZeroPage, ZeroPage, ZeroPage,
    // 0xC8
    Implied, Immediate, Implied, Implied, Absolute, Absolute, Absolute, Relative,
    // 0xD0
    Relative, IndirectY, ZeroPageIndirect, Implied, Implied, ZeroPageX, ZeroPageX, ZeroPage,
    // 0xD8
    Implied, AbsoluteY, Implied, Implied, Implied, AbsoluteX, AbsoluteX, Relative,
    // 0xE0
    Immediate, IndirectX, Implied, Implied, ZeroPage, ZeroPage, ZeroPage, ZeroPage,
    // 0xE8
    Implied, Immediate, Implied, Implied, Absolute, Absolute, Absolute, Relative,
    // 0xF0
    Relative, IndirectY, ZeroPageIndirect, Implied, Implied, ZeroPageX, ZeroPageX, ZeroPage,
    // 0xF8
    Implied, AbsoluteY, Implied, Implied, Implied, AbsoluteX, AbsoluteX, Relative,
];
