/*!
  The opcode table of the virtual machine.

  Every instruction is a single 16 bit word. The top nibble selects the
  opcode family; families 0x8, 0xD, 0xE and 0xF select the specific
  operation with the bottom nibble (0xE with the bottom byte). Two opcodes
  have no operands at all and are matched as exact words ahead of the family
  dispatch: `0x0000` (halt) and `0x01EE` (return). Decoding to an enum with
  one variant per operation keeps the table exhaustiveness-checkable, which
  the layered-if form of this dispatch is not.
*/

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

use strum_macros::{Display as StrumDisplay, IntoStaticStr};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::word::{low_byte, nibble, Word};

/// The word the machine halts on.
pub const HALT_WORD: Word = 0x0000;
/// The word that returns from a subroutine.
pub const RETURN_WORD: Word = 0x01EE;

/**
  The numeral base selector carried in the bottom nibble of the console I/O
  opcode families (0xD prints, 0xF reads). The discriminants are the nibble
  encodings, so decoding is a `try_from` on the nibble.
*/
#[derive(
StrumDisplay, IntoStaticStr, TryFromPrimitive, IntoPrimitive,
Clone,        Copy,          Eq, PartialEq,    Debug,         Hash
)]
#[repr(u8)]
pub enum Base {
  Hexadecimal = 0x0,
  Decimal     = 0x1,
  Binary      = 0x2,
  Octal       = 0x3,
}

impl Base {
  pub fn radix(&self) -> u32 {
    match self {
      Base::Hexadecimal => 16,
      Base::Decimal     => 10,
      Base::Binary      => 2,
      Base::Octal       => 8,
    }
  }

  /// Formats a register value in this base. Every base except decimal uses
  /// its conventional prefix (`0x`, `0b`, `0o`); decimal is bare digits.
  pub fn format(&self, value: u64) -> String {
    match self {
      Base::Hexadecimal => format!("{:#x}", value),
      Base::Decimal     => format!("{}", value),
      Base::Binary      => format!("{:#b}", value),
      Base::Octal       => format!("{:#o}", value),
    }
  }

  /// Parses a numeral in this base. Surrounding whitespace and the base's
  /// own prefix are accepted, mirroring what `format` produces.
  pub fn parse(&self, text: &str) -> Result<u64, ParseIntError> {
    let trimmed = text.trim();
    let digits = match self {
      Base::Hexadecimal => strip_prefix(trimmed, "0x", "0X"),
      Base::Decimal     => trimmed,
      Base::Binary      => strip_prefix(trimmed, "0b", "0B"),
      Base::Octal       => strip_prefix(trimmed, "0o", "0O"),
    };
    u64::from_str_radix(digits, self.radix())
  }
}

fn strip_prefix<'a>(text: &'a str, lower: &str, upper: &str) -> &'a str {
  text
    .strip_prefix(lower)
    .or_else(|| text.strip_prefix(upper))
    .unwrap_or(text)
}

/**
  A decoded instruction. Operand names follow the encoding conventions:
  `x` and `y` are register indices from nibbles 2 and 1, `value` is the
  8 bit immediate from the low byte, and `target`/`offset` are the 12 bit
  immediate from the low three nibbles.

  For the two shift operations the Y nibble is the shift amount itself, not
  a register reference, so those variants carry it as `amount`.

  Unrecognized encodings decode to `Nop`; the cycle they occupy still
  advances the instruction pointer.
*/
#[derive(IntoStaticStr, Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum Instruction {
  Halt,                                // 0000
  Return,                              // 01EE
  Jump        { target: Word },        // 1NNN
  Call        { target: Word },        // 2NNN
  SkipEqConst { x: u8, value: u8 },    // 3XNN
  SkipNeConst { x: u8, value: u8 },    // 4XNN
  SkipEqReg   { x: u8, y: u8 },        // 5XY0
  LoadConst   { x: u8, value: u8 },    // 6XNN
  AddConst    { x: u8, value: u8 },    // 7XNN
  Move        { x: u8, y: u8 },        // 8XY0
  Or          { x: u8, y: u8 },        // 8XY1
  And         { x: u8, y: u8 },        // 8XY2
  Xor         { x: u8, y: u8 },        // 8XY3
  Add         { x: u8, y: u8 },        // 8XY4
  Sub         { x: u8, y: u8 },        // 8XY5
  ShiftRight  { x: u8, amount: u8 },   // 8XY6
  SubReversed { x: u8, y: u8 },        // 8XY7
  ShiftLeft   { x: u8, amount: u8 },   // 8XYE
  SkipNeReg   { x: u8, y: u8 },        // 9XY0
  SetIndex    { target: Word },        // ANNN
  JumpOffset  { offset: Word },        // BNNN
  Random      { x: u8, mask: u8 },     // CXNN
  Print       { x: u8, base: Base },   // DX00..DX03
  AddIndex    { x: u8 },               // EX1E
  Spill       { x: u8 },               // EX55
  LoadBlock   { x: u8 },               // EX65
  Input       { x: u8, base: Base },   // FX00..FX03
  Nop         { word: Word },
}

impl Instruction {
  /**
    Decodes one instruction word.

    The exact-word opcodes are matched ahead of the nibble families and
    short-circuit them, so `Halt` and `Return` never also trigger a family
    handler in the same cycle. Families 0x5, 0x9, 0xD and 0xF do not
    validate their unused nibble, matching the machine's lineage: `5XY7`
    skips exactly as `5XY0` does.
  */
  pub fn decode(word: Word) -> Instruction {
    use Instruction::*;

    match word {
      HALT_WORD   => return Halt,
      RETURN_WORD => return Return,
      _           => {}
    }

    let x      = nibble(word, 2);
    let y      = nibble(word, 1);
    let value  = low_byte(word);
    let target = word & 0x0FFF;

    match nibble(word, 3) {
      0x1 => Jump { target },
      0x2 => Call { target },
      0x3 => SkipEqConst { x, value },
      0x4 => SkipNeConst { x, value },
      0x5 => SkipEqReg { x, y },
      0x6 => LoadConst { x, value },
      0x7 => AddConst { x, value },

      0x8 => match nibble(word, 0) {
        0x0 => Move { x, y },
        0x1 => Or { x, y },
        0x2 => And { x, y },
        0x3 => Xor { x, y },
        0x4 => Add { x, y },
        0x5 => Sub { x, y },
        0x6 => ShiftRight { x, amount: y },
        0x7 => SubReversed { x, y },
        0xE => ShiftLeft { x, amount: y },
        _   => Nop { word },
      }, // end match family 0x8

      0x9 => SkipNeReg { x, y },
      0xA => SetIndex { target },
      0xB => JumpOffset { offset: target },
      0xC => Random { x, mask: value },

      0xD => match Base::try_from(nibble(word, 0)) {
        Ok(base) => Print { x, base },
        Err(_)   => Nop { word },
      },

      0xE => match low_byte(word) {
        0x1E => AddIndex { x },
        0x55 => Spill { x },
        0x65 => LoadBlock { x },
        _    => Nop { word },
      },

      0xF => match Base::try_from(nibble(word, 0)) {
        Ok(base) => Input { x, base },
        Err(_)   => Nop { word },
      },

      // Family 0x0 holds only the two exact words matched above.
      _ => Nop { word },
    } // end match family nibble
  }
}

impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use Instruction::*;

    let name: &'static str = self.into();
    match self {

      Halt | Return => write!(f, "{}", name),

      | Jump { target }
      | Call { target }
      | SetIndex { target } => write!(f, "{}({:#05X})", name, target),

      JumpOffset { offset } => write!(f, "{}(V0 + {:#05X})", name, offset),

      | SkipEqConst { x, value }
      | SkipNeConst { x, value }
      | LoadConst { x, value }
      | AddConst { x, value } => write!(f, "{}(V{:X}, {:#04X})", name, x, value),

      | SkipEqReg { x, y }
      | SkipNeReg { x, y }
      | Move { x, y }
      | Or { x, y }
      | And { x, y }
      | Xor { x, y }
      | Add { x, y }
      | Sub { x, y }
      | SubReversed { x, y } => write!(f, "{}(V{:X}, V{:X})", name, x, y),

      | ShiftRight { x, amount }
      | ShiftLeft { x, amount } => write!(f, "{}(V{:X}, {})", name, x, amount),

      Random { x, mask } => write!(f, "{}(V{:X}, {:#04X})", name, x, mask),

      | Print { x, base }
      | Input { x, base } => write!(f, "{}(V{:X}, {})", name, x, base),

      | AddIndex { x }
      | Spill { x }
      | LoadBlock { x } => write!(f, "{}(V{:X})", name, x),

      Nop { word } => write!(f, "{}({:#06X})", name, word),

    } // end match on instruction
  }
}
