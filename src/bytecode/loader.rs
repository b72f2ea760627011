/*!
  Loads program text into a memory image.

  A program file is a whitespace separated list of tokens. Every token that
  reads as a hexadecimal numeral (an optional `0x` prefix followed by hex
  digits) contributes its big-endian bytes to the image, two digits per
  byte; every other token is a comment and is discarded. Annotating a
  program is therefore just a matter of interleaving words that contain a
  non-hex character.
*/

use nom::{
  bytes::complete::take_till1,
  character::complete::multispace0,
  multi::many0,
  sequence::preceded,
  IResult,
};

/// Recognizes the next whitespace-delimited token.
fn token(input: &str) -> IResult<&str, &str> {
  preceded(multispace0, take_till1(|c: char| c.is_whitespace()))(input)
}

/**
  Converts a hexadecimal token into its big-endian bytes. The byte width is
  the token's digit count, two digits per byte, so "600A" is [0x60, 0x0A]
  and "000A" keeps its zero high byte. Odd-length tokens gain a leading
  zero nibble: "ABC" is [0x0A, 0xBC]. Returns `None` for anything that is
  not a hex numeral.
*/
fn token_bytes(token: &str) -> Option<Vec<u8>> {
  let digits = token
    .strip_prefix("0x")
    .or_else(|| token.strip_prefix("0X"))
    .unwrap_or(token);

  let nibbles = digits
    .chars()
    .map(|c| c.to_digit(16).map(|d| d as u8))
    .collect::<Option<Vec<u8>>>()?;
  if nibbles.is_empty() {
    return None;
  }

  let mut bytes = Vec::with_capacity((nibbles.len() + 1) / 2);
  let mut rest: &[u8] = &nibbles;
  if rest.len() % 2 == 1 {
    bytes.push(rest[0]);
    rest = &rest[1..];
  }
  for pair in rest.chunks(2) {
    bytes.push((pair[0] << 4) | pair[1]);
  }
  Some(bytes)
}

/// Parses program text into the image the machine loads at offset 0.
pub fn parse_image(text: &str) -> Vec<u8> {
  let tokens = match many0(token)(text) {
    Ok((_rest, tokens)) => tokens,
    // `many0` stops at the first unparsable position instead of failing.
    Err(_) => vec![],
  };

  tokens
    .iter()
    .filter_map(|token| token_bytes(token))
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn words_become_big_endian_bytes() {
    assert_eq!(parse_image("600A 6105"), vec![0x60, 0x0A, 0x61, 0x05]);
  }

  #[test]
  fn zero_high_bytes_survive() {
    assert_eq!(parse_image("000A"), vec![0x00, 0x0A]);
  }

  #[test]
  fn odd_length_tokens_gain_a_leading_zero_nibble() {
    assert_eq!(parse_image("ABC"), vec![0x0A, 0xBC]);
    assert_eq!(parse_image("5"), vec![0x05]);
  }

  #[test]
  fn wide_tokens_expand_to_all_their_bytes() {
    assert_eq!(
      parse_image("0000003D0900"),
      vec![0x00, 0x00, 0x00, 0x3D, 0x09, 0x00]
    );
  }

  #[test]
  fn prefixed_tokens_are_accepted() {
    assert_eq!(parse_image("0x600A"), vec![0x60, 0x0A]);
    assert_eq!(parse_image("0X0a"), vec![0x0A]);
  }

  #[test]
  fn non_hex_tokens_are_comments() {
    let text = "main: 6400 keep the total in V2: 6200 done";
    assert_eq!(parse_image(text), vec![0x64, 0x00, 0x62, 0x00]);
  }

  #[test]
  fn comment_only_text_is_an_empty_image() {
    assert_eq!(parse_image("nothing to run here"), Vec::<u8>::new());
    assert_eq!(parse_image(""), Vec::<u8>::new());
    assert_eq!(parse_image("   \n\t  "), Vec::<u8>::new());
  }

  #[test]
  fn newlines_and_tabs_separate_tokens() {
    assert_eq!(
      parse_image("100A\n\t6400\r\n 0000"),
      vec![0x10, 0x0A, 0x64, 0x00, 0x00, 0x00]
    );
  }
}
