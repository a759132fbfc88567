use crate::Opcode;

/// Break each instruction on the SM83 down to the actions to perform each machine cycle
/// (m-cycle). I'm calling this m-code, and I'm not basing it directly on any microcode the SM83
/// may or may not have.
///
/// These are not based directly on any SM83 microcode, but are instead pulled from diagrams in
/// the [Gameboy Complete Technical Reference](https://github.com/Gekkio/gb-ctr) by
/// [Gekkio](https://github.com/Gekkio).
///
/// An opcode decodes to a fixed sequence of [MCode] steps via [Opcode::mcode]; the CPU pops and
/// executes one step per machine cycle. The last step of every sequence is terminal: once it
/// leaves the queue empty, the scheduler immediately fetches the next opcode in the same host
/// call, modeling the SM83's overlap between an instruction's final cycle and the next
/// instruction's fetch.
///
/// Conditional relative jumps are the one case where the sequence length isn't fixed at decode
/// time: [MCode::JrTestCondition] extends its own schedule by one more step at execution time
/// when the branch is taken, since the SM83 only pays for the extra cycle when it actually
/// jumps.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MCode {
    /// Spend a cycle doing nothing, for instructions with an internal ALU delay.
    Nop,

    /// An opcode this core doesn't execute. Surfaces as an error the moment it's reached.
    Unimplemented,

    /// `LD r,r'`: copy `src` into `dst`. Never used with [R8::IndHl] on either side; those go
    /// through [MCode::ReadIndHl] / [MCode::WriteIndHl] instead.
    LdR8R8 { dst: R8, src: R8 },

    /// Read one immediate byte at `PC` into the `low` staging register, then `PC += 1`.
    ReadImm8,

    /// Terminal step of `LD r,n`: assign `dst` from the staged immediate byte.
    AssignR8FromLow { dst: R8 },

    /// Terminal step of `LD r,[HL]`: read the byte at `HL` into `dst`.
    ReadIndHl { dst: R8 },

    /// Terminal step of `LD [HL],r`: write `src` to the byte at `HL`.
    WriteIndHl { src: R8 },

    /// Terminal step of `LD [HL],n`: write the staged immediate byte to the byte at `HL`.
    WriteIndHlFromLow,

    /// Terminal step of `LD [BC/DE],A`.
    WriteIndR16A { r16: R16 },

    /// Terminal step of `LD A,[BC/DE]`.
    ReadIndR16A { r16: R16 },

    /// Terminal step of `LD [HL+],A`.
    WriteIndHlIncA,

    /// Terminal step of `LD [HL-],A`.
    WriteIndHlDecA,

    /// Terminal step of `LD A,[HL+]`.
    ReadIndHlIncA,

    /// Terminal step of `LD A,[HL-]`.
    ReadIndHlDecA,

    /// Read the low byte of a 16-bit absolute address into `low`, then `PC += 1`.
    ReadAddrLow,

    /// Read the high byte of a 16-bit absolute address into `high`, then `PC += 1`.
    ReadAddrHigh,

    /// Terminal step of `LD [nn],A`: write `A` to the staged `nn` address.
    WriteAddrA,

    /// Terminal step of `LD A,[nn]`: read the staged `nn` address into `A`.
    ReadAddrA,

    /// Stage the high-page offset for `LDH [n],A` / `LDH A,[n]`, then `PC += 1`.
    ReadLdhOffset,

    /// Terminal step of `LDH [n],A`: write `A` to `0xFF00 | offset`.
    WriteLdhA,

    /// Terminal step of `LDH A,[n]`: read `0xFF00 | offset` into `A`.
    ReadLdhA,

    /// `LDH [C],A`, a single terminal step: write `A` to `0xFF00 | C`.
    WriteLdhCA,

    /// `LDH A,[C]`, a single terminal step: read `0xFF00 | C` into `A`.
    ReadLdhCA,

    /// Stage the low byte of a 16-bit immediate into `r16`'s low half, then `PC += 1`.
    ReadR16Low { dst: R16 },

    /// Terminal step of `LD r16,nn`: stage the high byte and assign `dst`.
    ReadR16HighAssign { dst: R16 },

    /// Write `SP`'s low byte to the staged `nn` address, for `LD [nn],SP`.
    WriteAddrSpLow,

    /// Terminal step of `LD [nn],SP`: write `SP`'s high byte to `nn + 1`.
    WriteAddrSpHigh,

    /// `INC r`, a single terminal step. Never used with [R8::IndHl]; see
    /// [MCode::IncIndHlWriteBack].
    IncR8 { r: R8 },

    /// `DEC r`, a single terminal step. Never used with [R8::IndHl]; see
    /// [MCode::DecIndHlWriteBack].
    DecR8 { r: R8 },

    /// Stage the byte at `HL` into `low`, for `INC (HL)` / `DEC (HL)`.
    ReadIndHlForRmw,

    /// Terminal step of `INC (HL)`: increment the staged byte and write it back.
    IncIndHlWriteBack,

    /// Terminal step of `DEC (HL)`: decrement the staged byte and write it back.
    DecIndHlWriteBack,

    /// `ADC A,r`, a single terminal step. Never used with [R8::IndHl]; `ADC A,[HL]` stages
    /// through [MCode::ReadIndHlForRmw] then [MCode::AdcALow].
    AdcAR8 { r: R8 },

    /// Terminal step of `ADC A,[HL]` / `ADC A,n`: add the staged `low` byte and the carry flag
    /// into `A`.
    AdcALow,

    /// Internal delay cycle of `ADD HL,r16`.
    AddHlR16Delay { r16: R16 },

    /// Terminal step of `ADD HL,r16`.
    AddHlR16 { r16: R16 },

    /// Internal delay cycle of `INC r16`.
    IncR16Delay { r16: R16 },

    /// Internal delay cycle of `DEC r16`.
    DecR16Delay { r16: R16 },

    /// Terminal step of `INC r16`.
    IncR16Apply { r16: R16 },

    /// Terminal step of `DEC r16`.
    DecR16Apply { r16: R16 },

    Rlca,
    Rla,
    Rrca,
    Rra,

    /// Stage the signed displacement of an unconditional `JR e`.
    JrReadOffset,

    /// Terminal step of `JR e`: apply the staged displacement to `PC`.
    JrApply,

    /// Stage the signed displacement of a conditional `JR cc,e` and test `cc` in the same
    /// cycle. If the branch is taken, pushes [MCode::JrApply] back onto the front of the queue
    /// to spend the extra cycle the jump costs; if not, this step is terminal on its own.
    JrTestCondition { cond: Condition },

    /// `STOP`: consume the mandatory following byte and park the CPU.
    Stop,

    /// `HALT`: park the CPU until resumed.
    Halt,

    Daa,
    Cpl,
    Scf,
    Ccf,
}

/// An 8-bit register operand, decoded from the 3-bit register codes the SM83 shares with the
/// Z80: `B C D E H L (HL) A`. `IndHl` stands in for the `(HL)` indirect operand so that load,
/// increment/decrement, and ALU handlers can be written once per family instead of once per
/// register.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum R8 {
    B,
    C,
    D,
    E,
    H,
    L,
    IndHl,
    A,
}

/// A 16-bit register pair operand, decoded from the 2-bit register-pair codes `BC DE HL SP`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum R16 {
    Bc,
    De,
    Hl,
    Sp,
}

/// A branch condition tested against the `Z`/`C` flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Condition {
    NotZero,
    Zero,
    NotCarry,
    Carry,
}

/// Decode a 3-bit register code into its [R8] operand, per the SM83/Z80 register order
/// `B C D E H L (HL) A`.
fn r8_from_code(code: u8) -> R8 {
    match code & 0x07 {
        0 => R8::B,
        1 => R8::C,
        2 => R8::D,
        3 => R8::E,
        4 => R8::H,
        5 => R8::L,
        6 => R8::IndHl,
        7 => R8::A,
        _ => unreachable!("code masked to 3 bits"),
    }
}

/// Decode a 2-bit register-pair code into its [R16] operand, per the SM83/Z80 register-pair
/// order `BC DE HL SP`.
fn r16_from_code(code: u8) -> R16 {
    match code & 0x03 {
        0 => R16::Bc,
        1 => R16::De,
        2 => R16::Hl,
        3 => R16::Sp,
        _ => unreachable!("code masked to 2 bits"),
    }
}

impl Opcode {
    /// The sequence of [MCode] steps this opcode schedules once fetched.
    ///
    /// Decoded by the same `x`/`y`/`z` bitfield decomposition the broader SM83/Z80 emulator
    /// community uses (`x = op[7:6]`, `y = op[5:3]`, `z = op[2:0]`, with `p = y[2:1]` and
    /// `q = y[0]` further splitting the register-pair rows), rather than one match arm per
    /// opcode. Opcodes outside the families this core implements decode to a single
    /// [MCode::Unimplemented] step.
    pub fn mcode(self) -> Vec<MCode> {
        let op = self as u8;
        let x = op >> 6;
        let y = (op >> 3) & 0x07;
        let z = op & 0x07;
        let p = y >> 1;
        let q = y & 0x01;

        match (x, y, z) {
            (0, 0, 0) => vec![MCode::Nop],
            (0, 2, 0) => vec![MCode::Stop],

            (0, 1, 0) => vec![
                MCode::ReadAddrLow,
                MCode::ReadAddrHigh,
                MCode::WriteAddrSpLow,
                MCode::WriteAddrSpHigh,
            ],

            (0, 3, 0) => vec![MCode::JrReadOffset, MCode::JrApply],
            (0, 4, 0) => vec![MCode::JrTestCondition { cond: Condition::NotZero }],
            (0, 5, 0) => vec![MCode::JrTestCondition { cond: Condition::Zero }],
            (0, 6, 0) => vec![MCode::JrTestCondition { cond: Condition::NotCarry }],
            (0, 7, 0) => vec![MCode::JrTestCondition { cond: Condition::Carry }],

            (0, _, 1) if q == 0 => {
                let dst = r16_from_code(p);
                vec![MCode::ReadR16Low { dst }, MCode::ReadR16HighAssign { dst }]
            }
            (0, _, 1) => {
                let r16 = r16_from_code(p);
                vec![MCode::AddHlR16Delay { r16 }, MCode::AddHlR16 { r16 }]
            }

            (0, _, 2) if q == 0 => match p {
                0 => vec![MCode::WriteIndR16A { r16: R16::Bc }],
                1 => vec![MCode::WriteIndR16A { r16: R16::De }],
                2 => vec![MCode::WriteIndHlIncA],
                3 => vec![MCode::WriteIndHlDecA],
                _ => unreachable!("p masked to 2 bits"),
            },
            (0, _, 2) => match p {
                0 => vec![MCode::ReadIndR16A { r16: R16::Bc }],
                1 => vec![MCode::ReadIndR16A { r16: R16::De }],
                2 => vec![MCode::ReadIndHlIncA],
                3 => vec![MCode::ReadIndHlDecA],
                _ => unreachable!("p masked to 2 bits"),
            },

            (0, _, 3) if q == 0 => {
                let r16 = r16_from_code(p);
                vec![MCode::IncR16Delay { r16 }, MCode::IncR16Apply { r16 }]
            }
            (0, _, 3) => {
                let r16 = r16_from_code(p);
                vec![MCode::DecR16Delay { r16 }, MCode::DecR16Apply { r16 }]
            }

            (0, _, 4) => match r8_from_code(y) {
                R8::IndHl => vec![MCode::ReadIndHlForRmw, MCode::IncIndHlWriteBack],
                r => vec![MCode::IncR8 { r }],
            },
            (0, _, 5) => match r8_from_code(y) {
                R8::IndHl => vec![MCode::ReadIndHlForRmw, MCode::DecIndHlWriteBack],
                r => vec![MCode::DecR8 { r }],
            },
            (0, _, 6) => match r8_from_code(y) {
                R8::IndHl => vec![MCode::ReadImm8, MCode::WriteIndHlFromLow],
                dst => vec![MCode::ReadImm8, MCode::AssignR8FromLow { dst }],
            },

            (0, 0, 7) => vec![MCode::Rlca],
            (0, 1, 7) => vec![MCode::Rrca],
            (0, 2, 7) => vec![MCode::Rla],
            (0, 3, 7) => vec![MCode::Rra],
            (0, 4, 7) => vec![MCode::Daa],
            (0, 5, 7) => vec![MCode::Cpl],
            (0, 6, 7) => vec![MCode::Scf],
            (0, 7, 7) => vec![MCode::Ccf],

            (1, 6, 6) => vec![MCode::Halt],
            (1, _, _) => match (r8_from_code(y), r8_from_code(z)) {
                (R8::IndHl, src) => vec![MCode::WriteIndHl { src }],
                (dst, R8::IndHl) => vec![MCode::ReadIndHl { dst }],
                (dst, src) => vec![MCode::LdR8R8 { dst, src }],
            },

            // `ALU A,r`: only `ADC` (y == 1) is implemented; the rest are out of scope.
            (2, 1, _) => match r8_from_code(z) {
                R8::IndHl => vec![MCode::ReadIndHlForRmw, MCode::AdcALow],
                r => vec![MCode::AdcAR8 { r }],
            },

            (3, 4, 0) => vec![MCode::ReadLdhOffset, MCode::WriteLdhA],
            (3, 6, 0) => vec![MCode::ReadLdhOffset, MCode::ReadLdhA],

            (3, 4, 2) => vec![MCode::WriteLdhCA],
            (3, 5, 2) => vec![MCode::ReadAddrLow, MCode::ReadAddrHigh, MCode::WriteAddrA],
            (3, 6, 2) => vec![MCode::ReadLdhCA],
            (3, 7, 2) => vec![MCode::ReadAddrLow, MCode::ReadAddrHigh, MCode::ReadAddrA],

            // `ALU A,n`: only `ADC` (y == 1) is implemented.
            (3, 1, 6) => vec![MCode::ReadImm8, MCode::AdcALow],

            _ => vec![MCode::Unimplemented],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nop_is_a_single_nop_step() {
        assert_eq!(vec![MCode::Nop], Opcode::NOP.mcode());
    }

    #[test]
    fn ld_bc_d16_stages_both_immediate_bytes() {
        assert_eq!(
            vec![MCode::ReadR16Low { dst: R16::Bc }, MCode::ReadR16HighAssign { dst: R16::Bc }],
            Opcode::LD_BC_D16.mcode()
        );
    }

    #[test]
    fn ld_ind_a16_sp_has_four_steps() {
        assert_eq!(
            vec![
                MCode::ReadAddrLow,
                MCode::ReadAddrHigh,
                MCode::WriteAddrSpLow,
                MCode::WriteAddrSpHigh,
            ],
            Opcode::LD_IND_A16_SP.mcode()
        );
    }

    #[test]
    fn ld_b_c_is_a_register_copy() {
        assert_eq!(
            vec![MCode::LdR8R8 { dst: R8::B, src: R8::C }],
            Opcode::LD_B_C.mcode()
        );
    }

    #[test]
    fn ld_b_ind_hl_reads_through_hl() {
        assert_eq!(vec![MCode::ReadIndHl { dst: R8::B }], Opcode::LD_B_IND_HL.mcode());
    }

    #[test]
    fn ld_ind_hl_b_writes_through_hl() {
        assert_eq!(vec![MCode::WriteIndHl { src: R8::B }], Opcode::LD_IND_HL_B.mcode());
    }

    #[test]
    fn halt_is_distinct_from_ld_ind_hl_ind_hl() {
        assert_eq!(vec![MCode::Halt], Opcode::HALT.mcode());
    }

    #[test]
    fn inc_ind_hl_stages_then_writes_back() {
        assert_eq!(
            vec![MCode::ReadIndHlForRmw, MCode::IncIndHlWriteBack],
            Opcode::INC_IND_HL.mcode()
        );
    }

    #[test]
    fn adc_a_ind_hl_shares_the_rmw_staging_step() {
        assert_eq!(vec![MCode::ReadIndHlForRmw, MCode::AdcALow], Opcode::ADC_A_IND_HL.mcode());
    }

    #[test]
    fn jr_r8_is_unconditional() {
        assert_eq!(vec![MCode::JrReadOffset, MCode::JrApply], Opcode::JR_R8.mcode());
    }

    #[test]
    fn jr_nz_r8_tests_its_condition() {
        assert_eq!(
            vec![MCode::JrTestCondition { cond: Condition::NotZero }],
            Opcode::JR_NZ_R8.mcode()
        );
    }

    #[test]
    fn unimplemented_families_surface_as_unimplemented() {
        assert_eq!(vec![MCode::Unimplemented], Opcode::CALL_A16.mcode());
        assert_eq!(vec![MCode::Unimplemented], Opcode::PUSH_BC.mcode());
        assert_eq!(vec![MCode::Unimplemented], Opcode::POP_BC.mcode());
    }
}
