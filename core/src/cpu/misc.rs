//! Handlers for the rotate-A family (`RLCA`/`RLA`/`RRCA`/`RRA`) and the flag/accumulator
//! miscellany (`DAA`/`CPL`/`SCF`/`CCF`). `Z` is always forced to `0` on the rotates, matching the
//! ISA rather than the "compute Z from the result" behavior some derivations use for the
//! non-`A`-specific rotate opcodes.

use super::Sm83;

impl Sm83 {
    pub(super) fn rlca(&mut self) {
        let a = self.registers.a();
        let carry = a & 0x80 != 0;

        self.registers.set_a(a.rotate_left(1));
        self.registers.set_z_flag(false);
        self.registers.set_n_flag(false);
        self.registers.set_h_flag(false);
        self.registers.set_c_flag(carry);
    }

    pub(super) fn rla(&mut self) {
        let a = self.registers.a();
        let carry_in = self.registers.c_flag() as u8;
        let carry_out = a & 0x80 != 0;

        self.registers.set_a((a << 1) | carry_in);
        self.registers.set_z_flag(false);
        self.registers.set_n_flag(false);
        self.registers.set_h_flag(false);
        self.registers.set_c_flag(carry_out);
    }

    pub(super) fn rrca(&mut self) {
        let a = self.registers.a();
        let carry = a & 0x01 != 0;

        self.registers.set_a(a.rotate_right(1));
        self.registers.set_z_flag(false);
        self.registers.set_n_flag(false);
        self.registers.set_h_flag(false);
        self.registers.set_c_flag(carry);
    }

    pub(super) fn rra(&mut self) {
        let a = self.registers.a();
        let carry_in = self.registers.c_flag() as u8;
        let carry_out = a & 0x01 != 0;

        self.registers.set_a((a >> 1) | (carry_in << 7));
        self.registers.set_z_flag(false);
        self.registers.set_n_flag(false);
        self.registers.set_h_flag(false);
        self.registers.set_c_flag(carry_out);
    }

    /// The standard BCD-correction table: after an add, fix up digits that overflowed past 9;
    /// after a subtract, undo the borrow/adjustment the previous subtraction may have needed.
    pub(super) fn daa(&mut self) {
        let mut a = self.registers.a();
        let mut carry = self.registers.c_flag();

        if self.registers.n_flag() {
            if carry {
                a = a.wrapping_sub(0x60);
            }
            if self.registers.h_flag() {
                a = a.wrapping_sub(0x06);
            }
        } else {
            if carry || a > 0x99 {
                a = a.wrapping_add(0x60);
                carry = true;
            }
            if self.registers.h_flag() || (a & 0x0F) > 0x09 {
                a = a.wrapping_add(0x06);
            }
        }

        self.registers.set_z_flag(a == 0);
        self.registers.set_h_flag(false);
        self.registers.set_c_flag(carry);
        self.registers.set_a(a);
    }

    pub(super) fn cpl(&mut self) {
        self.registers.set_a(!self.registers.a());
        self.registers.set_n_flag(true);
        self.registers.set_h_flag(true);
    }

    pub(super) fn scf(&mut self) {
        self.registers.set_n_flag(false);
        self.registers.set_h_flag(false);
        self.registers.set_c_flag(true);
    }

    pub(super) fn ccf(&mut self) {
        self.registers.set_n_flag(false);
        self.registers.set_h_flag(false);
        self.registers.set_c_flag(!self.registers.c_flag());
    }
}
