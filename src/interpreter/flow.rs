use super::Interpreter;
use crate::consts::PROGRAM_ARRAY;
use crate::error::RuntimeError;
use crate::types::RegisterId;

impl<I, O> Interpreter<I, O> {
    /// Replace the program with a copy of the array `R[rb]` and seat the
    /// execution finger at offset `R[rc]`.
    ///
    /// Loading from array `0` skips the copy; reloading the program over
    /// itself is a finger-only operation.
    pub(crate) fn load_program(&mut self, rb: RegisterId, rc: RegisterId) -> Result<(), RuntimeError> {
        let source = self.registers[rb];

        if source != PROGRAM_ARRAY {
            self.heap.replace_program(source)?;
        }

        self.seat_finger(self.registers[rc]);

        Ok(())
    }
}
