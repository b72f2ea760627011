/*!
  The error taxonomy of the machine.

  Nothing here is recovered internally: a cycle either fully applies its
  effect or is rejected before any mutation, and every variant is surfaced
  to the host, which decides whether to abort or prompt again.
*/

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

use crate::bytecode::Base;

#[derive(Error, Debug)]
pub enum MachineError {
  /// The program image does not fit in memory.
  #[error("program image of {size} bytes does not fit in memory")]
  ProgramTooLarge { size: usize },

  /// Instruction fetch ran past the end of memory.
  #[error("instruction fetch at {address:#05X} is outside memory")]
  CodeOutOfBounds { address: usize },

  /// A block transfer would touch cells outside memory.
  #[error("block transfer of {length} bytes at {address:#05X} runs outside memory")]
  MemoryOutOfBounds { address: usize, length: usize },

  /// Return was executed with no saved return address on the call stack.
  #[error("return at {address:#05X} with an empty call stack")]
  StackUnderflow { address: usize },

  /// Console input did not parse in the base the opcode asked for.
  #[error("{text:?} is not a {base} numeral")]
  MalformedInput {
    text: String,
    base: Base,
    source: ParseIntError,
  },

  /// The console collaborator failed.
  #[error(transparent)]
  Io(#[from] io::Error),
}
