//! Exposed constructors API for the [`Interpreter`]

use super::Interpreter;
use crate::consts::*;
use crate::heap::Heap;
use crate::types::Word;

use tracing::debug;

impl<I, O> Interpreter<I, O> {
    /// Boot an interpreter out of a decoded program image.
    ///
    /// The image becomes array `0`, the registers are cleared and the
    /// execution finger points at the first platter; the returned machine is
    /// running and ready to execute.
    pub fn boot(program: Vec<Word>, input: I, output: O) -> Self {
        debug!("booting with a program of {} platters", program.len());

        Self {
            registers: [0; VM_REGISTER_COUNT],
            finger: 0,
            heap: Heap::new(program),
            input,
            output,
        }
    }
}
