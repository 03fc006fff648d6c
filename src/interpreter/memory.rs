use super::Interpreter;
use crate::error::RuntimeError;
use crate::types::RegisterId;

impl<I, O> Interpreter<I, O> {
    /// `R[ra]` receives the platter at offset `R[rc]` of the array `R[rb]`.
    pub(crate) fn array_index(
        &mut self,
        ra: RegisterId,
        rb: RegisterId,
        rc: RegisterId,
    ) -> Result<(), RuntimeError> {
        let value = self.heap.read(self.registers[rb], self.registers[rc])?;

        self.alu_set(ra, value);

        Ok(())
    }

    /// The platter at offset `R[rb]` of the array `R[ra]` receives `R[rc]`.
    pub(crate) fn array_amendment(
        &mut self,
        ra: RegisterId,
        rb: RegisterId,
        rc: RegisterId,
    ) -> Result<(), RuntimeError> {
        self.heap
            .write(self.registers[ra], self.registers[rb], self.registers[rc])?;

        self.advance_finger();

        Ok(())
    }

    /// Allocate `R[rc]` zero platters; the fresh identifier goes to `R[rb]`.
    pub(crate) fn allocation(&mut self, rb: RegisterId, rc: RegisterId) {
        let id = self.heap.allocate(self.registers[rc]);

        self.alu_set(rb, id);
    }

    /// Abandon the array identified by `R[rc]`.
    pub(crate) fn abandonment(&mut self, rc: RegisterId) -> Result<(), RuntimeError> {
        self.heap.abandon(self.registers[rc])?;

        self.advance_finger();

        Ok(())
    }
}
