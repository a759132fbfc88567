//! Handlers for the `LD`/`LDH` instruction family: register-to-register copies, immediate loads,
//! and every `[HL]`/`[r16]`/`[nn]`/high-page addressing mode.

use dotmatrix_opcodes::{R16, R8};

use super::Sm83;
use crate::{Bus, BusError};

impl Sm83 {
    pub(super) fn ld_r8_r8(&mut self, dst: R8, src: R8) {
        let value = self.r8(src);
        self.set_r8(dst, value);
    }

    pub(super) fn read_imm8(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        self.low = bus.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);

        Ok(())
    }

    pub(super) fn assign_r8_from_low(&mut self, dst: R8) {
        let low = self.low;
        self.set_r8(dst, low);
    }

    pub(super) fn read_ind_hl(&mut self, dst: R8, bus: &mut Bus) -> Result<(), BusError> {
        let value = bus.read_byte(self.registers.hl())?;
        self.set_r8(dst, value);

        Ok(())
    }

    pub(super) fn write_ind_hl(&mut self, src: R8, bus: &mut Bus) -> Result<(), BusError> {
        let value = self.r8(src);

        bus.write_byte(self.registers.hl(), value)
    }

    pub(super) fn write_ind_hl_from_low(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        bus.write_byte(self.registers.hl(), self.low)
    }

    pub(super) fn write_ind_r16_a(&mut self, r16: R16, bus: &mut Bus) -> Result<(), BusError> {
        bus.write_byte(self.r16(r16), self.registers.a())
    }

    pub(super) fn read_ind_r16_a(&mut self, r16: R16, bus: &mut Bus) -> Result<(), BusError> {
        let value = bus.read_byte(self.r16(r16))?;
        self.registers.set_a(value);

        Ok(())
    }

    /// `LD [HL+],A` / `LD [HL-],A`: write `A` to `[HL]`, then step `HL` by `step`.
    pub(super) fn write_ind_hl_step_a(&mut self, bus: &mut Bus, step: i16) -> Result<(), BusError> {
        let hl = self.registers.hl();

        bus.write_byte(hl, self.registers.a())?;
        self.registers.set_hl(hl.wrapping_add_signed(step));

        Ok(())
    }

    /// `LD A,[HL+]` / `LD A,[HL-]`: read `A` from `[HL]`, then step `HL` by `step`.
    pub(super) fn read_ind_hl_step_a(&mut self, bus: &mut Bus, step: i16) -> Result<(), BusError> {
        let hl = self.registers.hl();
        let value = bus.read_byte(hl)?;

        self.registers.set_a(value);
        self.registers.set_hl(hl.wrapping_add_signed(step));

        Ok(())
    }

    pub(super) fn read_addr_low(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        self.low = bus.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);

        Ok(())
    }

    pub(super) fn read_addr_high(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        self.high = bus.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);

        Ok(())
    }

    pub(super) fn write_addr_a(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        bus.write_byte(self.staged_addr(), self.registers.a())
    }

    pub(super) fn read_addr_a(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        let value = bus.read_byte(self.staged_addr())?;
        self.registers.set_a(value);

        Ok(())
    }

    pub(super) fn read_ldh_offset(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        self.low = bus.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);

        Ok(())
    }

    pub(super) fn write_ldh_a(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        bus.write_byte(0xFF00 | self.low as u16, self.registers.a())
    }

    pub(super) fn read_ldh_a(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        let value = bus.read_byte(0xFF00 | self.low as u16)?;
        self.registers.set_a(value);

        Ok(())
    }

    pub(super) fn write_ldh_c_a(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        bus.write_byte(0xFF00 | self.registers.c() as u16, self.registers.a())
    }

    pub(super) fn read_ldh_c_a(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        let value = bus.read_byte(0xFF00 | self.registers.c() as u16)?;
        self.registers.set_a(value);

        Ok(())
    }

    pub(super) fn read_r16_low(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        self.low = bus.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);

        Ok(())
    }

    pub(super) fn read_r16_high_assign(&mut self, dst: R16, bus: &mut Bus) -> Result<(), BusError> {
        self.high = bus.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        self.set_r16(dst, self.staged_addr());

        Ok(())
    }

    pub(super) fn write_addr_sp_low(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        let [lo, _hi] = self.sp.to_le_bytes();

        bus.write_byte(self.staged_addr(), lo)
    }

    pub(super) fn write_addr_sp_high(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        let [_lo, hi] = self.sp.to_le_bytes();

        bus.write_byte(self.staged_addr().wrapping_add(1), hi)
    }
}
