use crate::error::{FaultReason, RuntimeError};
use crate::instruction::Instruction;
use crate::interpreter::Interpreter;
use crate::state::ExecuteState;

use std::io::{Read, Write};

impl<I, O> Interpreter<I, O>
where
    I: Read,
    O: Write,
{
    /// Fetch, decode and execute the instruction under the execution finger.
    pub fn execute(&mut self) -> Result<ExecuteState, RuntimeError> {
        let word = self
            .heap
            .program()
            .get(self.finger as usize)
            .copied()
            .ok_or(FaultReason::ExecutionOutOfBounds)?;

        let instruction = Instruction::parse(word)?;

        self.instruction(instruction)
    }

    /// Execute a single decoded instruction.
    ///
    /// Every operation advances the finger by one, except load program,
    /// which seats it directly.
    pub fn instruction(&mut self, instruction: Instruction) -> Result<ExecuteState, RuntimeError> {
        match instruction {
            Instruction::CMOV(ra, rb, rc) => self.conditional_move(ra, rb, rc),

            Instruction::AIDX(ra, rb, rc) => self.array_index(ra, rb, rc)?,

            Instruction::AAMD(ra, rb, rc) => self.array_amendment(ra, rb, rc)?,

            Instruction::ADD(ra, rb, rc) => self.addition(ra, rb, rc),

            Instruction::MUL(ra, rb, rc) => self.multiplication(ra, rb, rc),

            Instruction::DIV(ra, rb, rc) => self.division(ra, rb, rc)?,

            Instruction::NAND(ra, rb, rc) => self.not_and(ra, rb, rc),

            Instruction::HALT => return Ok(ExecuteState::Halted),

            Instruction::ALOC(rb, rc) => self.allocation(rb, rc),

            Instruction::FREE(rc) => self.abandonment(rc)?,

            Instruction::OUT(rc) => self.output(rc)?,

            Instruction::INP(rc) => self.input(rc)?,

            Instruction::LDPR(rb, rc) => self.load_program(rb, rc)?,

            Instruction::ORTH(ra, value) => self.orthography(ra, value),
        }

        Ok(ExecuteState::Proceed)
    }
}
