//! Console client implementation

use crate::error::InterpreterError;
use crate::image;
use crate::interpreter::Interpreter;
use crate::state::ProgramState;
use crate::types::Word;

use std::io::{self, BufReader, BufWriter, Read, Stdin, Stdout, Write};
use std::path::Path;

#[derive(Debug)]
/// Client implementation binding an [`Interpreter`] to a pair of byte
/// streams.
///
/// This is the intended entrypoint for hosts: boot it from an image, run it,
/// and map the outcome to an exit status.
pub struct Machine<I, O> {
    interpreter: Interpreter<I, O>,
}

impl<I, O> Machine<I, O> {
    /// Boot a machine out of a decoded image and its I/O endpoints.
    pub fn boot(program: Vec<Word>, input: I, output: O) -> Self {
        Self {
            interpreter: Interpreter::boot(program, input, output),
        }
    }

    /// The underlying interpreter.
    pub const fn interpreter(&self) -> &Interpreter<I, O> {
        &self.interpreter
    }

    /// Consume the machine, returning the underlying interpreter.
    pub fn into_interpreter(self) -> Interpreter<I, O> {
        self.interpreter
    }
}

impl<I, O> Machine<I, O>
where
    I: Read,
    O: Write,
{
    /// Run the machine to completion.
    ///
    /// Halt is the sole `Ok` outcome; every fault surfaces as an
    /// [`InterpreterError`].
    pub fn run(&mut self) -> Result<ProgramState, InterpreterError> {
        self.interpreter.run()
    }
}

/// Machine bound to the process console streams.
pub type StdioMachine = Machine<BufReader<Stdin>, BufWriter<Stdout>>;

impl StdioMachine {
    /// Boot a machine over stdin/stdout from the image at `path`.
    pub fn from_image_file<P>(path: P) -> Result<Self, InterpreterError>
    where
        P: AsRef<Path>,
    {
        let program = image::read_image_file(path)?;

        Ok(Self::boot(
            program,
            BufReader::new(io::stdin()),
            BufWriter::new(io::stdout()),
        ))
    }
}
