//! Runtime interpreter error implementation

use std::error::Error as StdError;
use std::{fmt, io};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[repr(u8)]
#[non_exhaustive]
/// Fault reason representation for the interpreter.
///
/// A fault is a well-formed misuse of the machine by the executing program,
/// as opposed to a failure of the machine itself.
pub enum FaultReason {
    /// The byte can't be mapped to any known `FaultReason`.
    UnknownFaultReason = 0x00,
    /// The opcode field of the fetched word names no operation.
    InvalidInstruction = 0x01,
    /// Division by zero.
    ArithmeticError = 0x02,
    /// The execution finger points past the end of the program array.
    ExecutionOutOfBounds = 0x03,
    /// An array operation named an identifier that is free or was never
    /// allocated.
    ArrayNotActive = 0x04,
    /// The offset is not within the addressed array.
    ArrayOutOfBounds = 0x05,
    /// The program attempted to abandon the program array.
    ProgramArrayAbandon = 0x06,
    /// The output instruction was given a value above 255.
    OutputOutOfRange = 0x07,
}

impl fmt::Display for FaultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl StdError for FaultReason {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        None
    }
}

impl From<u8> for FaultReason {
    /// Converts the `u8` into a `FaultReason`.
    fn from(b: u8) -> Self {
        use FaultReason::*;
        match b {
            0x01 => InvalidInstruction,
            0x02 => ArithmeticError,
            0x03 => ExecutionOutOfBounds,
            0x04 => ArrayNotActive,
            0x05 => ArrayOutOfBounds,
            0x06 => ProgramArrayAbandon,
            0x07 => OutputOutOfRange,
            _ => UnknownFaultReason,
        }
    }
}

impl From<FaultReason> for io::Error {
    fn from(reason: FaultReason) -> Self {
        io::Error::new(io::ErrorKind::Other, reason)
    }
}

/// Program image decoding errors.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The image source failed before the whole image could be read.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The image length is not a whole number of platters.
    #[error("malformed image: {len} bytes is not a multiple of the platter size")]
    TruncatedImage {
        /// Total length of the image, in bytes
        len: usize,
    },
}

/// Interpreter runtime error variants.
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// The execution resulted in a well-formed program fault.
    #[error("Execution fault: {0}")]
    Fault(FaultReason),
    /// The provided program image isn't valid.
    #[error("Failed to load the program image: {0}")]
    Image(#[from] ImageError),
    /// I/O and OS related errors.
    #[error("Unrecoverable error: {0}")]
    Io(#[from] io::Error),
}

impl InterpreterError {
    /// Return the specified fault reason that caused this error, if
    /// applicable.
    pub const fn fault_reason(&self) -> Option<FaultReason> {
        match self {
            Self::Fault(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Produces a `halt` error from `io`.
    pub fn from_io<E>(e: E) -> Self
    where
        E: Into<io::Error>,
    {
        Self::Io(e.into())
    }
}

impl From<FaultReason> for InterpreterError {
    fn from(reason: FaultReason) -> Self {
        Self::Fault(reason)
    }
}

impl From<RuntimeError> for InterpreterError {
    fn from(error: RuntimeError) -> Self {
        match error {
            RuntimeError::Recoverable(reason) => Self::Fault(reason),
            RuntimeError::Halt(e) => Self::Io(e),
        }
    }
}

#[derive(Debug)]
/// Runtime error description that should either be reported as a program
/// fault or halt the machine itself.
pub enum RuntimeError {
    /// Specified fault of the executing program.
    Recoverable(FaultReason),
    /// Unspecified error that should halt the execution.
    Halt(io::Error),
}

impl RuntimeError {
    /// Flag whether the error is a program fault.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable(_))
    }

    /// Flag whether the error must halt the execution.
    pub const fn must_halt(&self) -> bool {
        matches!(self, Self::Halt(_))
    }

    /// Produces a `halt` error from `io`.
    pub fn from_io<E>(e: E) -> Self
    where
        E: Into<io::Error>,
    {
        Self::Halt(e.into())
    }
}

impl From<FaultReason> for RuntimeError {
    fn from(reason: FaultReason) -> Self {
        RuntimeError::Recoverable(reason)
    }
}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> Self {
        RuntimeError::Halt(e)
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable(e) => e.fmt(f),
            Self::Halt(e) => e.fmt(f),
        }
    }
}

impl StdError for RuntimeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Recoverable(e) => Some(e),
            Self::Halt(e) => Some(e),
        }
    }
}
