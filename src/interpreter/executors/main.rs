use crate::error::InterpreterError;
use crate::interpreter::Interpreter;
use crate::state::{ExecuteState, ProgramState};

use std::io::{Read, Write};

impl<I, O> Interpreter<I, O>
where
    I: Read,
    O: Write,
{
    /// Drive the fetch-decode-execute cycle until halt or fault.
    ///
    /// The output sink is flushed before the outcome is surfaced, so a
    /// faulting program still shows everything it emitted.
    pub fn run(&mut self) -> Result<ProgramState, InterpreterError> {
        let outcome = loop {
            match self.execute() {
                Ok(ExecuteState::Proceed) => (),
                Ok(ExecuteState::Halted) => break Ok(ProgramState::Halted),
                Err(e) => break Err(e),
            }
        };

        self.flush_output()?;

        outcome.map_err(InterpreterError::from)
    }
}
