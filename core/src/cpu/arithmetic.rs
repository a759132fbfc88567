//! Handlers for the `INC`/`DEC`/`ADC`/`ADD HL` instruction family: 8-bit and 16-bit arithmetic,
//! with ISA-correct flag semantics (not the buggy source behavior these were reverse-engineered
//! from — see DESIGN.md).

use dotmatrix_opcodes::{R16, R8};

use super::Sm83;
use crate::{Bus, BusError};

impl Sm83 {
    pub(super) fn inc_r8(&mut self, r: R8) {
        let value = self.inc_value(self.r8(r));
        self.set_r8(r, value);
    }

    pub(super) fn dec_r8(&mut self, r: R8) {
        let value = self.dec_value(self.r8(r));
        self.set_r8(r, value);
    }

    /// `INC`'s shared flag rule: `Z` and `H` from the result, `N` cleared, `C` untouched.
    pub(super) fn inc_value(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);

        self.registers.set_z_flag(result == 0);
        self.registers.set_n_flag(false);
        self.registers.set_h_flag((value & 0x0F) == 0x0F);

        result
    }

    /// `DEC`'s shared flag rule: `Z` and `H` from the result, `N` set, `C` untouched.
    pub(super) fn dec_value(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);

        self.registers.set_z_flag(result == 0);
        self.registers.set_n_flag(true);
        self.registers.set_h_flag((value & 0x0F) == 0x00);

        result
    }

    /// `INC (HL)` / `DEC (HL)`'s terminal step: apply `op` to the byte staged in `low` by
    /// [MCode::ReadIndHlForRmw](dotmatrix_opcodes::MCode::ReadIndHlForRmw) and write it back.
    pub(super) fn ind_hl_write_back(
        &mut self,
        bus: &mut Bus,
        op: impl FnOnce(&mut Self, u8) -> u8,
    ) -> Result<(), BusError> {
        let low = self.low;
        let result = op(self, low);

        bus.write_byte(self.registers.hl(), result)
    }

    pub(super) fn read_ind_hl_for_rmw(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        self.low = bus.read_byte(self.registers.hl())?;

        Ok(())
    }

    /// `ADC A,x`: ISA-correct ordering reads the incoming carry before any flag is mutated, so a
    /// stale cleared `C` can't leak into the addition.
    pub(super) fn adc_a(&mut self, value: u8) {
        let a = self.registers.a();
        let carry_in = self.registers.c_flag() as u8;

        let (partial, carry1) = a.overflowing_add(value);
        let (result, carry2) = partial.overflowing_add(carry_in);
        let half_carry = (a & 0x0F) + (value & 0x0F) + carry_in > 0x0F;

        self.registers.set_z_flag(result == 0);
        self.registers.set_n_flag(false);
        self.registers.set_h_flag(half_carry);
        self.registers.set_c_flag(carry1 || carry2);
        self.registers.set_a(result);
    }

    /// `ADD HL,r16`: `N` cleared, `H`/`C` from a carry out of bit 11/15, `Z` untouched.
    pub(super) fn add_hl_r16(&mut self, r16: R16) {
        let hl = self.registers.hl();
        let value = self.r16(r16);

        let (result, carry) = hl.overflowing_add(value);
        let half_carry = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;

        self.registers.set_n_flag(false);
        self.registers.set_h_flag(half_carry);
        self.registers.set_c_flag(carry);
        self.registers.set_hl(result);
    }
}
