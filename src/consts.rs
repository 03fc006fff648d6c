//! VM parameters

use crate::types::{ArrayId, Word};

use std::mem;

/// Register count for the machine; the UM-32 defines exactly eight.
pub const VM_REGISTER_COUNT: usize = 8;

/// Length of a word, in bytes
pub const WORD_SIZE: usize = mem::size_of::<Word>();

/// Identifier of the array holding the executing program.
pub const PROGRAM_ARRAY: ArrayId = 0;

/// Value loaded by the input instruction at end-of-input.
pub const INPUT_EOF: Word = Word::MAX;
