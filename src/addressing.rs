//! # Addressing Modes
//!
//! This module defines the 15 addressing modes supported by the NMOS 6502
//! and the WDC 65C02. Each mode determines how the CPU interprets the
//! operand bytes that follow an opcode and how it computes the effective
//! memory address for the operation.

/// 6502 / 65C02 addressing mode enumeration.
///
/// The addressing mode determines how many operand bytes an instruction
/// consumes and how the effective address (or immediate value) is derived
/// from them.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY, ZeroPageIndirect
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect,
///   AbsoluteIndexedIndirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, ROR A, INC A
    Accumulator,

    /// 8-bit constant operand in the instruction stream.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X; the sum wraps within page zero.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y; the sum wraps within page zero.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset relative to the PC after the operand byte.
    ///
    /// Used by the branch instructions: BEQ label, BRA label, ...
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. JMP only.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Pre-indexed indirect: (zero page + X), then dereference.
    ///
    /// Example: LDA ($40,X) — X is added within page zero, then a 16-bit
    /// pointer is fetched from that location.
    IndirectX,

    /// Post-indexed indirect: zero page dereference, then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Zero-page indirect without indexing. 65C02 extension.
    ///
    /// Example: LDA ($40)
    ZeroPageIndirect,

    /// Absolute indexed indirect: (16-bit address + X), then dereference.
    /// 65C02 extension, JMP only.
    ///
    /// Example: JMP ($1234,X)
    AbsoluteIndexedIndirect,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode for this mode.
    pub fn operand_size(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::ZeroPageIndirect => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect
            | AddressingMode::AbsoluteIndexedIndirect => 2,
        }
    }
}
