//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing 6502/65C02 processor
//! state and the fetch-decode-execute loop.
//!
//! ## Execution Model
//!
//! - `step()`: execute one instruction, poll pending interrupts, then
//!   tick the bus once.
//! - `run()`: loop over `step()` until the CPU is halted.
//!
//! Interrupt requests (`irq()`, `nmi()`) and `reset()` latch flags that
//! are observed only at instruction boundaries; an instruction in
//! progress is never preempted. NMI always wins over IRQ, and the
//! irq-disable status bit masks IRQ only.

use crate::addressing::AddressingMode;
use crate::bus::Bus;
use crate::instructions;
use crate::opcodes::{Mnemonic, ADDRESSING, MNEMONICS};

/// NMI vector location (little-endian word).
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector location (little-endian word).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector location (little-endian word).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Status register value established by reset, as observed on real
/// silicon via Visual6502.
const RESET_STATUS: u8 = 0x36;

bitflags::bitflags! {
    /// Processor status register, NV-BDIZC layout.
    ///
    /// `BREAK` and `UNUSED` are only meaningful in status bytes pushed to
    /// the stack: every pushed frame has `UNUSED` set, and `BREAK` is set
    /// only in frames pushed by the BRK instruction (or PHP), never by a
    /// hardware IRQ/NMI.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// Carry.
        const CARRY       = 1 << 0;
        /// Zero.
        const ZERO        = 1 << 1;
        /// IRQ disable.
        const IRQ_DISABLE = 1 << 2;
        /// Decimal (BCD) mode.
        const DECIMAL     = 1 << 3;
        /// Break marker in pushed frames.
        const BREAK       = 1 << 4;
        /// Unused bit, reads as 1 when pushed.
        const UNUSED      = 1 << 5;
        /// Signed overflow.
        const OVERFLOW    = 1 << 6;
        /// Negative (bit 7 of result).
        const NEGATIVE    = 1 << 7;
    }
}

/// Processor variant selector.
///
/// The only point where instruction semantics diverge between the two
/// supported parts is the overflow flag in decimal-mode arithmetic: the
/// NMOS 6502 forces V clear, the CMOS 65C02 computes it from the binary
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Original NMOS MOS 6502.
    #[default]
    Nmos6502,
    /// WDC 65C02 (CMOS).
    Cmos65C02,
}

/// Resolved operand handed from the addressing phase to the execute phase.
///
/// Store instructions and control transfers inspect only the address;
/// value-consuming instructions read memory exactly once through
/// [`Cpu::operand_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    Implied,
    Accumulator,
    Immediate(u8),
    Memory(u16),
}

/// Interrupt source being serviced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InterruptKind {
    Brk,
    Irq,
    Nmi,
}

/// 6502 / 65C02 CPU state and execution context.
///
/// The CPU owns its bus and performs every memory access through the
/// [`Bus`] trait, so hosts can wire in anything from a flat RAM array to
/// a full machine with memory-mapped peripherals.
///
/// # Examples
///
/// ```
/// use lib65c02::{Bus, Cpu, FlatBus};
///
/// let mut bus = FlatBus::new();
/// bus.write(0xFFFC, 0x00); // reset vector low
/// bus.write(0xFFFD, 0x80); // reset vector high -> PC = 0x8000
/// bus.write(0x8000, 0xEA); // NOP
///
/// let mut cpu = Cpu::new(bus);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
///
/// cpu.step();
/// assert_eq!(cpu.pc(), 0x8001);
/// ```
pub struct Cpu<B: Bus> {
    /// Program counter (address of the next instruction byte).
    pub(crate) pc: u16,
    /// Accumulator.
    pub(crate) a: u8,
    /// X index register.
    pub(crate) x: u8,
    /// Y index register.
    pub(crate) y: u8,
    /// Status register.
    pub(crate) sr: Status,
    /// Stack pointer (stack lives at 0x0100 + SP, wrapping modulo 256).
    pub(crate) sp: u8,

    // Edge-latched lines, observed at instruction boundaries.
    pub(crate) halted: bool,
    pub(crate) reset_pending: bool,
    pub(crate) irq_pending: bool,
    pub(crate) nmi_pending: bool,

    pub(crate) variant: Variant,
    pub(crate) bus: B,
}

impl<B: Bus> Cpu<B> {
    /// Creates a CPU over the given bus and performs the reset sequence.
    ///
    /// The variant defaults to [`Variant::Nmos6502`]; use
    /// [`Cpu::with_variant`] for a 65C02.
    pub fn new(bus: B) -> Self {
        Self::with_variant(bus, Variant::default())
    }

    /// Creates a CPU with an explicit variant and performs the reset
    /// sequence: PC is loaded from the reset vector at 0xFFFC/0xFFFD,
    /// A/X/Y are zeroed, SR becomes 0x36 and SP becomes 0xFD.
    pub fn with_variant(bus: B, variant: Variant) -> Self {
        let mut cpu = Self {
            pc: 0,
            a: 0,
            x: 0,
            y: 0,
            sr: Status::from_bits_retain(RESET_STATUS),
            sp: 0xFD,
            halted: false,
            reset_pending: false,
            irq_pending: false,
            nmi_pending: false,
            variant,
            bus,
        };
        cpu.do_reset();
        cpu
    }

    /// Executes one instruction.
    ///
    /// Order of operations: a latched reset short-circuits decoding;
    /// otherwise fetch, decode, resolve the operand, execute, poll
    /// pending NMI/IRQ, and finally tick the bus once.
    pub fn step(&mut self) {
        if self.reset_pending {
            self.do_reset();
            return;
        }

        let opcode = self.fetch_byte();
        let mnemonic = MNEMONICS[opcode as usize];
        let mode = ADDRESSING[opcode as usize];
        let operand = self.resolve_operand(mode);
        self.execute(mnemonic, operand);

        self.poll_interrupts();
        self.bus.tick();
    }

    /// Runs until [`Cpu::halt`] is called.
    pub fn run(&mut self) {
        while !self.halted {
            self.step();
        }
    }

    /// Halts the CPU, terminating any active [`Cpu::run`] loop at the
    /// next instruction boundary.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Latches a reset, serviced at the start of the next step.
    pub fn reset(&mut self) {
        self.reset_pending = true;
    }

    /// Latches an interrupt request, serviced at the next instruction
    /// boundary unless the irq-disable bit is set.
    pub fn irq(&mut self) {
        self.irq_pending = true;
    }

    /// Latches a non-maskable interrupt, serviced at the next instruction
    /// boundary regardless of the irq-disable bit.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    // ========== Register Access ==========

    /// Accumulator value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer value. The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Status register.
    pub fn status(&self) -> Status {
        self.sr
    }

    /// Processor variant in effect.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// True once [`Cpu::halt`] has been called (and until reset).
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the status register wholesale.
    pub fn set_status(&mut self, status: Status) {
        self.sr = status;
    }

    /// Selects the processor variant.
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    /// Shared reference to the bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable reference to the bus, e.g. for loading programs.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    // ========== Fetch / Stack Helpers ==========

    fn do_reset(&mut self) {
        self.pc = self.read_word(RESET_VECTOR);
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sr = Status::from_bits_retain(RESET_STATUS);
        self.sp = 0xFD;
        self.halted = false;
        self.reset_pending = false;
        self.irq_pending = false;
        self.nmi_pending = false;
    }

    fn fetch_byte(&mut self) -> u8 {
        let value = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word at `addr`.
    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.bus.read(addr) as u16;
        let hi = self.bus.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word from page zero; both pointer bytes are
    /// fetched within page zero (the high byte wraps to 0x00, never 0x100).
    fn read_zp_word(&mut self, ptr: u8) -> u16 {
        let lo = self.bus.read(ptr as u16) as u16;
        let hi = self.bus.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Pushes a byte: write at 0x0100 + SP, then decrement SP.
    pub(crate) fn push(&mut self, value: u8) {
        self.bus.write(0x0100 + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops a byte: increment SP, then read at 0x0100 + SP.
    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read(0x0100 + self.sp as u16)
    }

    /// Pops a status byte, preserving the live BREAK and UNUSED bits and
    /// ignoring the popped frame's copies. Shared by PLP and RTI.
    pub(crate) fn pop_status(&mut self) {
        let popped = Status::from_bits_retain(self.pop());
        let pushed_only = Status::BREAK | Status::UNUSED;
        self.sr = (popped - pushed_only) | (self.sr & pushed_only);
    }

    /// Sets the Zero and Negative flags from a result byte.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.sr.set(Status::ZERO, value == 0);
        self.sr.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    // ========== Addressing ==========

    /// Computes the operand for one instruction, consuming operand bytes.
    ///
    /// All intermediate zero-page arithmetic wraps modulo 256. Memory
    /// operands carry only the effective address; the value is read
    /// lazily (and exactly once) by instructions that consume it, so
    /// stores and jumps never touch their target before writing.
    fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte()),
            AddressingMode::ZeroPage => Operand::Memory(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                Operand::Memory(base.wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                Operand::Memory(base.wrapping_add(self.y) as u16)
            }
            AddressingMode::Absolute => Operand::Memory(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                Operand::Memory(base.wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                Operand::Memory(base.wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                Operand::Memory(self.read_word(ptr))
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte().wrapping_add(self.x);
                Operand::Memory(self.read_zp_word(ptr))
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte();
                let base = self.read_zp_word(ptr);
                Operand::Memory(base.wrapping_add(self.y as u16))
            }
            AddressingMode::ZeroPageIndirect => {
                let ptr = self.fetch_byte();
                Operand::Memory(self.read_zp_word(ptr))
            }
            AddressingMode::AbsoluteIndexedIndirect => {
                let ptr = self.fetch_word().wrapping_add(self.x as u16);
                Operand::Memory(self.read_word(ptr))
            }
            AddressingMode::Relative => {
                // PC has already advanced past the operand byte when the
                // offset is applied.
                let offset = self.fetch_byte() as i8;
                Operand::Memory(self.pc.wrapping_add(offset as i16 as u16))
            }
        }
    }

    /// Reads the operand value. Memory operands are read here, exactly
    /// once per instruction.
    pub(crate) fn operand_value(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Implied => 0,
            Operand::Accumulator => self.a,
            Operand::Immediate(value) => value,
            Operand::Memory(addr) => self.bus.read(addr),
        }
    }

    /// Writes a result back to the operand target (accumulator or memory).
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Memory(addr) => self.bus.write(addr, value),
            Operand::Implied | Operand::Immediate(_) => {}
        }
    }

    /// Effective address of a memory operand. Only called for store,
    /// jump and branch instructions, which the decode tables pair
    /// exclusively with memory-producing modes.
    pub(crate) fn operand_address(&self, operand: Operand) -> u16 {
        match operand {
            Operand::Memory(addr) => addr,
            _ => unreachable!("instruction requires a memory operand"),
        }
    }

    // ========== Interrupts ==========

    /// Services an interrupt: push PC high, PC low, then the status frame
    /// (bit 5 forced, bit 4 set only for BRK), set irq-disable and load
    /// PC from the source's vector.
    pub(crate) fn interrupt(&mut self, kind: InterruptKind) {
        self.push((self.pc >> 8) as u8);
        self.push(self.pc as u8);
        let mut frame = self.sr | Status::UNUSED;
        frame.set(Status::BREAK, kind == InterruptKind::Brk);
        self.push(frame.bits());
        self.sr.insert(Status::IRQ_DISABLE);
        let vector = match kind {
            InterruptKind::Brk | InterruptKind::Irq => IRQ_VECTOR,
            InterruptKind::Nmi => NMI_VECTOR,
        };
        self.pc = self.read_word(vector);
    }

    /// Post-instruction interrupt poll. NMI dominates and is never
    /// masked; IRQ is gated by the irq-disable bit and also samples the
    /// bus's level-sensitive interrupt line.
    fn poll_interrupts(&mut self) {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.interrupt(InterruptKind::Nmi);
        } else if !self.sr.contains(Status::IRQ_DISABLE)
            && (self.irq_pending || self.bus.irq_active())
        {
            self.irq_pending = false;
            self.interrupt(InterruptKind::Irq);
        }
    }

    // ========== Execute ==========

    fn execute(&mut self, mnemonic: Mnemonic, operand: Operand) {
        use Mnemonic::*;
        match mnemonic {
            Adc => instructions::alu::execute_adc(self, operand),
            And => instructions::alu::execute_and(self, operand),
            Asl => instructions::shifts::execute_asl(self, operand),
            Bcc => instructions::branches::execute_bcc(self, operand),
            Bcs => instructions::branches::execute_bcs(self, operand),
            Beq => instructions::branches::execute_beq(self, operand),
            Bit => instructions::alu::execute_bit(self, operand),
            Bmi => instructions::branches::execute_bmi(self, operand),
            Bne => instructions::branches::execute_bne(self, operand),
            Bpl => instructions::branches::execute_bpl(self, operand),
            Bra => instructions::branches::execute_bra(self, operand),
            Brk => instructions::control::execute_brk(self),
            Bvc => instructions::branches::execute_bvc(self, operand),
            Bvs => instructions::branches::execute_bvs(self, operand),
            Clc => instructions::flags::execute_clc(self),
            Cld => instructions::flags::execute_cld(self),
            Cli => instructions::flags::execute_cli(self),
            Clv => instructions::flags::execute_clv(self),
            Cmp => instructions::alu::execute_cmp(self, operand),
            Cpx => instructions::alu::execute_cpx(self, operand),
            Cpy => instructions::alu::execute_cpy(self, operand),
            Dec => instructions::inc_dec::execute_dec(self, operand),
            Dex => instructions::inc_dec::execute_dex(self),
            Dey => instructions::inc_dec::execute_dey(self),
            Eor => instructions::alu::execute_eor(self, operand),
            Inc => instructions::inc_dec::execute_inc(self, operand),
            Inx => instructions::inc_dec::execute_inx(self),
            Iny => instructions::inc_dec::execute_iny(self),
            Jmp => instructions::control::execute_jmp(self, operand),
            Jsr => instructions::control::execute_jsr(self, operand),
            Lda => instructions::load_store::execute_lda(self, operand),
            Ldx => instructions::load_store::execute_ldx(self, operand),
            Ldy => instructions::load_store::execute_ldy(self, operand),
            Lsr => instructions::shifts::execute_lsr(self, operand),
            Ora => instructions::alu::execute_ora(self, operand),
            Pha => instructions::stack::execute_pha(self),
            Php => instructions::stack::execute_php(self),
            Phx => instructions::stack::execute_phx(self),
            Phy => instructions::stack::execute_phy(self),
            Pla => instructions::stack::execute_pla(self),
            Plp => instructions::stack::execute_plp(self),
            Plx => instructions::stack::execute_plx(self),
            Ply => instructions::stack::execute_ply(self),
            Rol => instructions::shifts::execute_rol(self, operand),
            Ror => instructions::shifts::execute_ror(self, operand),
            Rti => instructions::control::execute_rti(self),
            Rts => instructions::control::execute_rts(self),
            Sbc => instructions::alu::execute_sbc(self, operand),
            Sec => instructions::flags::execute_sec(self),
            Sed => instructions::flags::execute_sed(self),
            Sei => instructions::flags::execute_sei(self),
            Sta => instructions::load_store::execute_sta(self, operand),
            Stx => instructions::load_store::execute_stx(self, operand),
            Sty => instructions::load_store::execute_sty(self, operand),
            Stz => instructions::load_store::execute_stz(self, operand),
            Tax => instructions::transfer::execute_tax(self),
            Tay => instructions::transfer::execute_tay(self),
            Trb => instructions::bits::execute_trb(self, operand),
            Tsb => instructions::bits::execute_tsb(self, operand),
            Tsx => instructions::transfer::execute_tsx(self),
            Txa => instructions::transfer::execute_txa(self),
            Txs => instructions::transfer::execute_txs(self),
            Tya => instructions::transfer::execute_tya(self),
            // Decoded but not modeled: plain NOP, STP and WAI, and the
            // bit-branch / bit-manipulate families. Operand bytes were
            // already consumed by the addressing phase; nothing else
            // happens.
            Nop | Stp | Wai => {}
            Bbr0 | Bbr1 | Bbr2 | Bbr3 | Bbr4 | Bbr5 | Bbr6 | Bbr7 => {}
            Bbs0 | Bbs1 | Bbs2 | Bbs3 | Bbs4 | Bbs5 | Bbs6 | Bbs7 => {}
            Rmb0 | Rmb1 | Rmb2 | Rmb3 | Rmb4 | Rmb5 | Rmb6 | Rmb7 => {}
            Smb0 | Smb1 | Smb2 | Smb3 | Smb4 | Smb5 | Smb6 | Smb7 => {}
        }
    }
}
