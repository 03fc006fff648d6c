use super::Interpreter;
use crate::consts::INPUT_EOF;
use crate::error::{FaultReason, RuntimeError};
use crate::types::{RegisterId, Word};

use std::io::{ErrorKind, Read, Write};

impl<I, O> Interpreter<I, O>
where
    O: Write,
{
    /// Emit the byte in `R[rc]` to the output sink.
    pub(crate) fn output(&mut self, rc: RegisterId) -> Result<(), RuntimeError> {
        let byte =
            u8::try_from(self.registers[rc]).map_err(|_| FaultReason::OutputOutOfRange)?;

        self.output.write_all(&[byte])?;

        self.advance_finger();

        Ok(())
    }

    /// Flush the output sink so everything the program emitted is visible.
    pub(crate) fn flush_output(&mut self) -> Result<(), RuntimeError> {
        self.output.flush()?;

        Ok(())
    }
}

impl<I, O> Interpreter<I, O>
where
    I: Read,
{
    /// Read one byte from the input source into `R[rc]`.
    ///
    /// End-of-input loads a platter with every bit set.
    pub(crate) fn input(&mut self, rc: RegisterId) -> Result<(), RuntimeError> {
        let mut byte = [0u8; 1];

        let value = match self.input.read_exact(&mut byte) {
            Ok(()) => Word::from(byte[0]),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => INPUT_EOF,
            Err(e) => return Err(RuntimeError::Halt(e)),
        };

        self.alu_set(rc, value);

        Ok(())
    }
}
