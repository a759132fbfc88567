mod arithmetic;
mod control;
mod loads;
mod misc;

use std::{collections::VecDeque, fmt::Debug};

use dotmatrix_opcodes::{MCode, Opcode, R16, R8};
use proc_bitfield::bitfield;

use crate::{Bus, BusError};

/// The value of PC _after running the boot ROM_.
const AFTER_BOOT_PC: u16 = 0x0100;

/// The value of SP _after running the boot ROM_.
const AFTER_BOOT_SP: u16 = 0xFFFE;

/// The SM83 by Sharp is the CPU used in the DMG. It is distinct from a Zilog Z80 despite several
/// similarities.
///
/// Names are not short for the purpose of saving characters, these are the names the community
/// and documentation have settled upon.
#[derive(Clone, Eq, PartialEq)]
pub struct Sm83 {
    /// The general purpose registers and flags of the [Sm83].
    pub registers: Sm83Registers,

    /// The program counter, points to the next instruction in memory.
    pub pc: u16,

    /// The stack pointer, points to the "top" stack frame in memory. _(The stack grows downward)_
    pub sp: u16,

    /// The instruction register holds the opcode of the currently executing instruction.
    pub ir: Opcode,

    /// Staging register for the low byte of a multi-cycle immediate (an 8-bit immediate, the low
    /// byte of a 16-bit immediate, or an LDH offset).
    pub low: u8,

    /// Staging register for the high byte of a multi-cycle 16-bit immediate.
    pub high: u8,

    /// Set by `HALT`; parks the scheduler until [Sm83::resume] is called by a host-level
    /// interrupt controller.
    pub halted: bool,

    /// Set by `STOP`; parks the scheduler until [Sm83::resume] is called by the host.
    pub stopped: bool,

    /// The interrupt enable latch. Reserved for a future interrupt controller; no handler in
    /// this CORE reads or writes it beyond construction.
    pub ie: u8,

    /// A queue of m-codes to be executed over the next few cycles.
    pub mcode_queue: VecDeque<MCode>,
}

impl Sm83 {
    fn with_registers(registers: Sm83Registers) -> Self {
        Self {
            registers,
            pc: AFTER_BOOT_PC,
            sp: AFTER_BOOT_SP,
            ir: Opcode::NOP,
            low: 0,
            high: 0,
            halted: false,
            stopped: false,
            ie: 0,
            mcode_queue: VecDeque::with_capacity(8),
        }
    }

    /// Create a new [Sm83] configured for use in a DMG.
    pub fn new_dmg() -> Self {
        Self::with_registers(Sm83Registers::initial_dmg())
    }

    /// Create a new [Sm83] configured for use in an MGB.
    pub fn new_mgb() -> Self {
        Self::with_registers(Sm83Registers::initial_mgb())
    }

    /// Create a new [Sm83] configured for use in an SGB.
    pub fn new_sgb() -> Self {
        Self::with_registers(Sm83Registers::initial_sgb())
    }

    /// Create a new [Sm83] configured for use in an SGB2.
    pub fn new_sgb2() -> Self {
        Self::with_registers(Sm83Registers::initial_sgb2())
    }

    /// Create a new [Sm83] configured for use in a CGB.
    pub fn new_cgb() -> Self {
        Self::with_registers(Sm83Registers::initial_cgb())
    }

    /// Create a new [Sm83] configured for use in an AGB.
    pub fn new_agb() -> Self {
        Self::with_registers(Sm83Registers::initial_agb())
    }

    /// Create a new [Sm83] configured for use in an AGS.
    pub fn new_ags() -> Self {
        Self::with_registers(Sm83Registers::initial_ags())
    }

    /// Clear the dormant flags `HALT`/`STOP` left behind, so the scheduler resumes fetching.
    /// Called by a host-level interrupt controller, which is out of scope for this CORE.
    pub fn resume(&mut self) {
        self.halted = false;
        self.stopped = false;
    }

    /// Execute one m-cycle worth of code on the CPU.
    pub fn exec_m_cycle(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        self.step(bus)?;

        Ok(())
    }

    /// Execute until the end of the current instruction, fetching one if the queue is empty.
    ///
    /// For testing purposes, specifically SingleStepTests.
    pub fn exec_instruction(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        while !self.step(bus)? {}

        Ok(())
    }

    /// Advance exactly one m-cycle. Returns `true` when this call lands on an instruction
    /// boundary: either the dormant `HALT`/`STOP` state, or the merged terminal
    /// step/next-fetch cycle [Sm83::exec_instruction] loops on.
    fn step(&mut self, bus: &mut Bus) -> Result<bool, BusError> {
        if self.halted || self.stopped {
            return Ok(true);
        }

        if self.mcode_queue.is_empty() {
            self.fetch(bus)?;

            return Ok(false);
        }

        let mcode = self
            .mcode_queue
            .pop_front()
            .expect("mcode queue is non-empty, just checked above");

        self.exec_mcode(mcode, bus)?;

        if self.mcode_queue.is_empty() {
            if self.halted || self.stopped {
                return Ok(true);
            }

            // The final step of this instruction and the fetch of the next one share one
            // host-observable m-cycle.
            self.fetch(bus)?;

            return Ok(true);
        }

        Ok(false)
    }

    /// Retrieve the next instruction and increment PC. A failed bus read leaves PC untouched.
    fn fetch(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        let opcode = bus.fetch_at(self.pc)?;

        self.pc = self.pc.wrapping_add(1);
        self.ir = Opcode::from(opcode);
        self.mcode_queue.extend(self.ir.mcode());

        log::trace!("fetch: {:#04x} ({})", opcode, self.ir);

        Ok(())
    }

    fn exec_mcode(&mut self, mcode: MCode, bus: &mut Bus) -> Result<(), BusError> {
        log::trace!("{}: {:?}", self.ir, mcode);

        match mcode {
            MCode::Nop => Ok(()),
            MCode::Unimplemented => {
                let err = BusError::UnimplementedOpcode(self.ir as u8, self.ir.mnemonic());

                log::error!("{err}");

                Err(err)
            }

            MCode::LdR8R8 { dst, src } => {
                self.ld_r8_r8(dst, src);
                Ok(())
            }
            MCode::ReadImm8 => self.read_imm8(bus),
            MCode::AssignR8FromLow { dst } => {
                self.assign_r8_from_low(dst);
                Ok(())
            }
            MCode::ReadIndHl { dst } => self.read_ind_hl(dst, bus),
            MCode::WriteIndHl { src } => self.write_ind_hl(src, bus),
            MCode::WriteIndHlFromLow => self.write_ind_hl_from_low(bus),
            MCode::WriteIndR16A { r16 } => self.write_ind_r16_a(r16, bus),
            MCode::ReadIndR16A { r16 } => self.read_ind_r16_a(r16, bus),
            MCode::WriteIndHlIncA => self.write_ind_hl_step_a(bus, 1),
            MCode::WriteIndHlDecA => self.write_ind_hl_step_a(bus, -1),
            MCode::ReadIndHlIncA => self.read_ind_hl_step_a(bus, 1),
            MCode::ReadIndHlDecA => self.read_ind_hl_step_a(bus, -1),
            MCode::ReadAddrLow => self.read_addr_low(bus),
            MCode::ReadAddrHigh => self.read_addr_high(bus),
            MCode::WriteAddrA => self.write_addr_a(bus),
            MCode::ReadAddrA => self.read_addr_a(bus),
            MCode::ReadLdhOffset => self.read_ldh_offset(bus),
            MCode::WriteLdhA => self.write_ldh_a(bus),
            MCode::ReadLdhA => self.read_ldh_a(bus),
            MCode::WriteLdhCA => self.write_ldh_c_a(bus),
            MCode::ReadLdhCA => self.read_ldh_c_a(bus),
            MCode::ReadR16Low { .. } => self.read_r16_low(bus),
            MCode::ReadR16HighAssign { dst } => self.read_r16_high_assign(dst, bus),
            MCode::WriteAddrSpLow => self.write_addr_sp_low(bus),
            MCode::WriteAddrSpHigh => self.write_addr_sp_high(bus),

            MCode::IncR8 { r } => {
                self.inc_r8(r);
                Ok(())
            }
            MCode::DecR8 { r } => {
                self.dec_r8(r);
                Ok(())
            }
            MCode::ReadIndHlForRmw => self.read_ind_hl_for_rmw(bus),
            MCode::IncIndHlWriteBack => self.ind_hl_write_back(bus, |cpu, v| cpu.inc_value(v)),
            MCode::DecIndHlWriteBack => self.ind_hl_write_back(bus, |cpu, v| cpu.dec_value(v)),
            MCode::AdcAR8 { r } => {
                let value = self.r8(r);
                self.adc_a(value);
                Ok(())
            }
            MCode::AdcALow => {
                self.adc_a(self.low);
                Ok(())
            }
            MCode::AddHlR16Delay { .. } => Ok(()),
            MCode::AddHlR16 { r16 } => {
                self.add_hl_r16(r16);
                Ok(())
            }
            MCode::IncR16Delay { .. } => Ok(()),
            MCode::DecR16Delay { .. } => Ok(()),
            MCode::IncR16Apply { r16 } => {
                self.set_r16(r16, self.r16(r16).wrapping_add(1));
                Ok(())
            }
            MCode::DecR16Apply { r16 } => {
                self.set_r16(r16, self.r16(r16).wrapping_sub(1));
                Ok(())
            }

            MCode::Rlca => {
                self.rlca();
                Ok(())
            }
            MCode::Rla => {
                self.rla();
                Ok(())
            }
            MCode::Rrca => {
                self.rrca();
                Ok(())
            }
            MCode::Rra => {
                self.rra();
                Ok(())
            }

            MCode::JrReadOffset => self.jr_read_offset(bus),
            MCode::JrApply => {
                self.jr_apply();
                Ok(())
            }
            MCode::JrTestCondition { cond } => self.jr_test_condition(cond, bus),

            MCode::Stop => self.stop(bus),
            MCode::Halt => {
                self.halted = true;
                Ok(())
            }

            MCode::Daa => {
                self.daa();
                Ok(())
            }
            MCode::Cpl => {
                self.cpl();
                Ok(())
            }
            MCode::Scf => {
                self.scf();
                Ok(())
            }
            MCode::Ccf => {
                self.ccf();
                Ok(())
            }
        }
    }

    /// Read an 8-bit register operand. Never called with [R8::IndHl]; the `[HL]` indirect
    /// operand always goes through its own dedicated `MCode` steps instead.
    fn r8(&self, r: R8) -> u8 {
        match r {
            R8::A => self.registers.a(),
            R8::B => self.registers.b(),
            R8::C => self.registers.c(),
            R8::D => self.registers.d(),
            R8::E => self.registers.e(),
            R8::H => self.registers.h(),
            R8::L => self.registers.l(),
            R8::IndHl => unreachable!("(HL) is routed through dedicated memory-access mcodes"),
        }
    }

    fn set_r8(&mut self, r: R8, value: u8) {
        match r {
            R8::A => self.registers.set_a(value),
            R8::B => self.registers.set_b(value),
            R8::C => self.registers.set_c(value),
            R8::D => self.registers.set_d(value),
            R8::E => self.registers.set_e(value),
            R8::H => self.registers.set_h(value),
            R8::L => self.registers.set_l(value),
            R8::IndHl => unreachable!("(HL) is routed through dedicated memory-access mcodes"),
        }
    }

    fn r16(&self, r: R16) -> u16 {
        match r {
            R16::Bc => self.registers.bc(),
            R16::De => self.registers.de(),
            R16::Hl => self.registers.hl(),
            R16::Sp => self.sp,
        }
    }

    fn set_r16(&mut self, r: R16, value: u16) {
        match r {
            R16::Bc => self.registers.set_bc(value),
            R16::De => self.registers.set_de(value),
            R16::Hl => self.registers.set_hl(value),
            R16::Sp => self.sp = value,
        }
    }

    /// The 16-bit address staged across two `low`/`high` reads, low byte first.
    fn staged_addr(&self) -> u16 {
        u16::from_le_bytes([self.low, self.high])
    }
}

impl Debug for Sm83 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sm83 {{ ")?;

        write!(f, "A:{:02X} ", self.registers.a())?;

        write!(f, "c:{:01} ", self.registers.c_flag() as usize)?;
        write!(f, "h:{:01} ", self.registers.h_flag() as usize)?;
        write!(f, "n:{:01} ", self.registers.n_flag() as usize)?;
        write!(f, "z:{:01} ", self.registers.z_flag() as usize)?;

        write!(f, "BC:{:04X} ", self.registers.bc())?;
        write!(f, "DE:{:04X} ", self.registers.de())?;
        write!(f, "HL:{:04X} ", self.registers.hl())?;

        write!(f, "SP:{:04X} ", self.sp)?;
        write!(f, "PC:{:04X} ", self.pc)?;

        write!(f, "}}")
    }
}

impl std::fmt::Display for Sm83 {
    /// The stable, test-comparable register dump: `PC: 0x%04x; SP: 0x%04x; Flags: 0x%02x;
    /// A: 0x%02x; BC: 0x%04x; DE: 0x%04x; HL: 0x%04x`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PC: {:#06x}; SP: {:#06x}; Flags: {:#04x}; A: {:#04x}; BC: {:#06x}; DE: {:#06x}; HL: {:#06x}",
            self.pc,
            self.sp,
            self.registers.f(),
            self.registers.a(),
            self.registers.bc(),
            self.registers.de(),
            self.registers.hl(),
        )
    }
}

bitfield! {
    /// The general purpose 8 and 16 bit registers of the SM83, including the flags.
    ///
    /// Names are not short for the purpose of saving characters, these are the names the community
    /// and documentation have settled upon.
    #[derive(Clone, Copy, Eq, PartialEq)]
    pub struct Sm83Registers(u64): Debug, FromRaw, IntoRaw, DerefRaw {
        /// The `c` flag (carry flag) is set when a carry or borrow occurs in an arithmetic
        /// operation. It is also the 4th bit of the virtual `F` register in AF.
        pub c_flag: bool @ 4,

        /// The `h` flag (half-carry flag) is set whenever a carry would occur 8 bits below the most
        /// significant bit. It's used by BCD operations. It is also the 5th bit of the virtual `F`
        /// register in AF.
        pub h_flag: bool @ 5,

        /// The `n` flag (subtraction flag) is set whenever a subtraction occurs, to assist in BCD
        /// operations. It is also the 6th bit of the virtual `F` register in AF.
        pub n_flag: bool @ 6,

        /// The `z` flag (zero flag) is set when a calculation results in a value of `0`.
        /// It is also the 7th bit of the virtual `F` register in AF.
        pub z_flag: bool @ 7,

        /// The virtual "`F`" register is comprised of flags, in the form z/n/h/c/0/0/0/0. It is
        /// used as the low bits of AF.
        ///
        /// This virtual register is not accessed by the hardware except in the combined case of
        /// `AF`. It's provided here for the sake of testing, deugging, visualization, or logging.
        pub f: u8 [get_fn(|f| f & 0xF0)] @ 0..=7,

        /// The `A` register is the accumulator, and is used as the high bits of AF.
        pub a: u8 @ 8..=15,

        /// The `AF` register is the A register and the flags combined. Low 4 bits are always `0`.
        /// This is the only way the hardware accesses the virtual "`F`" register.
        pub af: u16 [get_fn(|af| af & 0xFFF0)] @ 0..=15,

        /// The `C` register is a general-purpose register and the low bits of BC.
        pub c: u8 @ 16..=23,

        /// The `B` register is a general-purpose register and the high bits of BC.
        pub b: u8 @ 24..=31,

        /// The `BC` register is the B and C registers combined.
        pub bc: u16 @ 16..=31,

        /// The `E` register is a general-purpose register and the low bits of DE.
        pub e: u8 @ 32..=39,

        /// The `D` register is a general-purpose register and the high bits of DE.
        pub d: u8 @ 40..=47,

        /// The `DE` register is the D and E registers combined.
        pub de: u16 @ 32..=47,

        /// The `L` register is a general-purpose register and the low bits of HL.
        pub l: u8 @ 48..=55,

        /// The `H` register is a general-purpose register and the high bits of HL.
        pub h: u8 @ 56..=63,

        /// The `HL` register is the H and L registers combined. It's often used to hold a pointer,
        /// and can be incremented/decremented on access by some operations.
        pub hl: u16 @ 48..=63,
    }
}

impl Sm83Registers {
    /// The initial state of registers on DMG, via the Cycle Accurate GB Docs.
    pub fn initial_dmg() -> Self {
        //   0xHH_LL_DD_EE_BB_CC_AA_FF
        Self(0x01_4D_00_D8_00_13_01_B0)
    }

    /// The initial state of registers on MGB, via the Cycle Accurate GB Docs.
    pub fn initial_mgb() -> Self {
        //   0xHH_LL_DD_EE_BB_CC_AA_FF
        Self(0x01_4D_00_D8_00_13_FF_B0)
    }

    /// The initial state of registers on SGB, via the Cycle Accurate GB Docs.
    ///
    /// Note: TCAGBD states these have not been verified on hardware.
    pub fn initial_sgb() -> Self {
        //   0xHH_LL_DD_EE_BB_CC_AA_FF
        Self(0xC0_60_00_00_00_14_01_00)
    }

    /// The initial state of registers on SGB2, via the Cycle Accurate GB Docs.
    ///
    /// Note: TCAGBD does not specify anything but the value of `A`, so I'm defaulting them to
    /// [Sm83Registers::initial_sgb] for now. See note there.
    pub fn initial_sgb2() -> Self {
        let mut registers = Self::initial_sgb();

        registers.set_a(0xFF);

        registers
    }

    /// The initial state of registers on CGB, via the Cycle Accurate GB Docs.
    pub fn initial_cgb() -> Self {
        //   0xHH_LL_DD_EE_BB_CC_AA_FF
        Self(0x00_7C_00_08_00_00_11_80)
    }

    /// The initial state of registers on AGB, via the Cycle Accurate GB Docs.
    pub fn initial_agb() -> Self {
        //   0xHH_LL_DD_EE_BB_CC_AA_FF
        Self(0x00_7C_00_08_01_00_11_00)
    }

    /// The initial state of registers on AGS, via the Cycle Accurate GB Docs.
    pub fn initial_ags() -> Self {
        //   0xHH_LL_DD_EE_BB_CC_AA_FF
        Self(0x00_7C_00_08_01_00_11_00)
    }
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;

    use super::*;

    fn test_cpu(registers: Sm83Registers, pc: u16, sp: u16) -> Sm83 {
        Sm83 {
            registers,
            pc,
            sp,
            ir: Opcode::NOP,
            low: 0,
            high: 0,
            halted: false,
            stopped: false,
            ie: 0,
            mcode_queue: VecDeque::with_capacity(0),
        }
    }

    #[test]
    fn sm83_debug() {
        let expected = "Sm83 { A:CD c:1 h:0 n:1 z:0 BC:89AB DE:4567 HL:0123 SP:A801 PC:532D }";
        let registers = Sm83Registers(0x01_23_45_67_89_AB_CD_50);
        let cpu = test_cpu(registers, 0x532D, 0xA801);

        assert_eq!(expected, &format!("{cpu:?}"));
    }

    #[test]
    fn sm83_display() {
        let expected =
            "PC: 0x532d; SP: 0xa801; Flags: 0x50; A: 0xcd; BC: 0x89ab; DE: 0x4567; HL: 0x0123";
        let registers = Sm83Registers(0x01_23_45_67_89_AB_CD_50);
        let cpu = test_cpu(registers, 0x532D, 0xA801);

        assert_eq!(expected, &format!("{cpu}"));
    }

    #[test]
    fn resume_clears_dormant_flags() {
        let mut cpu = test_cpu(Sm83Registers::initial_dmg(), 0x0100, 0xFFFE);
        cpu.halted = true;
        cpu.stopped = true;

        cpu.resume();

        assert!(!cpu.halted);
        assert!(!cpu.stopped);
    }

    #[test]
    fn exec_instruction_advances_past_nop() {
        let mut bus = Bus::flat();
        bus.write(0x0100, 0x00); // NOP
        bus.write(0x0101, 0x00); // NOP, so the merged prefetch has somewhere to land

        let mut cpu = Sm83::new_dmg();
        cpu.exec_instruction(&mut bus).unwrap();

        // exec_instruction's last m-cycle merges in the next opcode's fetch, so PC lands
        // past both NOPs, not just the first.
        assert_eq!(0x0102, cpu.pc);
    }

    /// Post-boot-ROM reset vector from the Cycle Accurate Game Boy Docs: `AF=$01B0 BC=$0013
    /// DE=$00D8 HL=$014D`.
    #[test]
    fn dmg_reset_vector_matches_tcagbd() {
        let cpu = Sm83::new_dmg();

        assert_eq!(0x01, cpu.registers.a());
        assert_eq!(0xB0, cpu.registers.f());
        assert_eq!(0x0013, cpu.registers.bc());
        assert_eq!(0x00D8, cpu.registers.de());
        assert_eq!(0x014D, cpu.registers.hl());
        assert_eq!(AFTER_BOOT_PC, cpu.pc);
        assert_eq!(AFTER_BOOT_SP, cpu.sp);
    }

    /// Post-boot-ROM reset vector from the Cycle Accurate Game Boy Docs: `AF=$1180 BC=$0000
    /// DE=$0008 HL=$007C`.
    #[test]
    fn cgb_reset_vector_matches_tcagbd() {
        let cpu = Sm83::new_cgb();

        assert_eq!(0x11, cpu.registers.a());
        assert_eq!(0x80, cpu.registers.f());
        assert_eq!(0x0000, cpu.registers.bc());
        assert_eq!(0x0008, cpu.registers.de());
        assert_eq!(0x007C, cpu.registers.hl());
    }

    /// MGB differs from DMG only in `A`, which reads back the DMG/MGB model-identification
    /// value `$FF` rather than `$01`.
    #[test]
    fn mgb_reset_vector_differs_from_dmg_only_in_a() {
        let dmg = Sm83::new_dmg();
        let mgb = Sm83::new_mgb();

        assert_eq!(0xFF, mgb.registers.a());
        assert_eq!(dmg.registers.f(), mgb.registers.f());
        assert_eq!(dmg.registers.bc(), mgb.registers.bc());
        assert_eq!(dmg.registers.de(), mgb.registers.de());
        assert_eq!(dmg.registers.hl(), mgb.registers.hl());
    }

    /// AGB and AGS share the CGB reset vector except for `B`, which reads back `$01` instead of
    /// `$00` as the hardware model-identification byte.
    #[test]
    fn agb_and_ags_share_a_reset_vector() {
        let agb = Sm83::new_agb();
        let ags = Sm83::new_ags();

        assert_eq!(agb.registers, ags.registers);
        assert_eq!(0x01, agb.registers.b());
    }
}
