/*!
  The uniform random byte source behind the `CXNN` opcode.
*/

use rand::rngs::ThreadRng;
use rand::Rng;

pub trait RandomSource {
  /// Returns a byte drawn uniformly from [0, 255].
  fn next_byte(&mut self) -> u8;
}

/// The `thread_rng` backed source used outside of tests.
pub struct ThreadRandom {
  rng: ThreadRng,
}

impl ThreadRandom {
  pub fn new() -> ThreadRandom {
    ThreadRandom { rng: rand::thread_rng() }
  }
}

impl RandomSource for ThreadRandom {
  fn next_byte(&mut self) -> u8 {
    self.rng.gen()
  }
}

#[cfg(test)]
pub mod testing {
  use super::RandomSource;

  /// Replays a fixed byte sequence, cycling when it runs out.
  pub struct FixedRandom {
    bytes: Vec<u8>,
    next: usize,
  }

  impl FixedRandom {
    pub fn new(bytes: &[u8]) -> FixedRandom {
      FixedRandom { bytes: bytes.to_vec(), next: 0 }
    }
  }

  impl RandomSource for FixedRandom {
    fn next_byte(&mut self) -> u8 {
      let byte = self.bytes[self.next % self.bytes.len()];
      self.next += 1;
      byte
    }
  }
}
