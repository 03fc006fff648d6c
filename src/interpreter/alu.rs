use super::Interpreter;
use crate::error::{FaultReason, RuntimeError};
use crate::types::{Immediate25, RegisterId, Word};

impl<I, O> Interpreter<I, O> {
    /// Write `value` to `R[ra]` and advance the finger.
    pub(crate) fn alu_set(&mut self, ra: RegisterId, value: Word) {
        self.registers[ra] = value;

        self.advance_finger();
    }

    pub(crate) fn conditional_move(&mut self, ra: RegisterId, rb: RegisterId, rc: RegisterId) {
        if self.registers[rc] != 0 {
            self.registers[ra] = self.registers[rb];
        }

        self.advance_finger();
    }

    pub(crate) fn addition(&mut self, ra: RegisterId, rb: RegisterId, rc: RegisterId) {
        self.alu_set(ra, self.registers[rb].wrapping_add(self.registers[rc]));
    }

    pub(crate) fn multiplication(&mut self, ra: RegisterId, rb: RegisterId, rc: RegisterId) {
        self.alu_set(ra, self.registers[rb].wrapping_mul(self.registers[rc]));
    }

    pub(crate) fn division(
        &mut self,
        ra: RegisterId,
        rb: RegisterId,
        rc: RegisterId,
    ) -> Result<(), RuntimeError> {
        let quotient = self.registers[rb]
            .checked_div(self.registers[rc])
            .ok_or(FaultReason::ArithmeticError)?;

        self.alu_set(ra, quotient);

        Ok(())
    }

    pub(crate) fn not_and(&mut self, ra: RegisterId, rb: RegisterId, rc: RegisterId) {
        self.alu_set(ra, !(self.registers[rb] & self.registers[rc]));
    }

    pub(crate) fn orthography(&mut self, ra: RegisterId, value: Immediate25) {
        self.alu_set(ra, value);
    }
}
