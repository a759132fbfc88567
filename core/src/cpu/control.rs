//! Handlers for control flow (`JR`, `JR cc,e`) and the two dormant-CPU instructions (`STOP`,
//! `HALT`).

use dotmatrix_opcodes::{Condition, MCode};

use super::Sm83;
use crate::{Bus, BusError};

impl Sm83 {
    pub(super) fn jr_read_offset(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        self.low = bus.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);

        Ok(())
    }

    /// Apply the signed displacement staged in `low` to `PC`.
    pub(super) fn jr_apply(&mut self) {
        self.pc = self.pc.wrapping_add_signed((self.low as i8) as i16);
    }

    /// Stage the displacement and test `cond` in the same cycle. The SM83 only pays for the
    /// extra cycle [MCode::JrApply] spends when the branch is actually taken, so this pushes it
    /// back onto the front of the schedule rather than always scheduling it.
    pub(super) fn jr_test_condition(
        &mut self,
        cond: Condition,
        bus: &mut Bus,
    ) -> Result<(), BusError> {
        self.jr_read_offset(bus)?;

        if self.test_condition(cond) {
            self.mcode_queue.push_front(MCode::JrApply);
        }

        Ok(())
    }

    fn test_condition(&self, cond: Condition) -> bool {
        match cond {
            Condition::NotZero => !self.registers.z_flag(),
            Condition::Zero => self.registers.z_flag(),
            Condition::NotCarry => !self.registers.c_flag(),
            Condition::Carry => self.registers.c_flag(),
        }
    }

    /// `STOP`: the opcode is followed by a mandatory padding byte this consumes and discards,
    /// then parks the CPU until a host calls [Sm83::resume].
    pub(super) fn stop(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        let _padding = bus.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        self.stopped = true;

        log::debug!("STOP: CPU parked");

        Ok(())
    }
}
