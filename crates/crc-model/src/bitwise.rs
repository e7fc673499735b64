//! Bitwise ("slow") CRC core.
//!
//! Binary polynomial division simulated one bit at a time: shift, test the
//! top bit, conditionally XOR the generator polynomial. Eight rounds per
//! message byte. This is the canonical definition of every CRC this crate
//! computes; the table-driven core must produce identical results, and the
//! lookup table itself is generated from [`divide`].
//!
//! Intentionally slow. Use for one-off stateless calls, correctness
//! oracles, and table generation; use [`Engine`](crate::Engine) for
//! throughput.

// Indexing uses a bounded loop index (0..message.len()), required for
// const evaluation.
#![allow(clippy::indexing_slicing)]

use crate::config::CrcParams;
use crate::finalize::{finalize, unfinalize};
use crate::reflect::reflect_bits;

/// Eight rounds of shift-and-conditional-XOR division. Every shift is
/// masked, so the register never holds bits above the output width.
#[must_use]
pub(crate) const fn divide(params: &CrcParams, mut crc: u64) -> u64 {
  let mut bit = 0;
  while bit < 8 {
    if crc & params.top_bit != 0 {
      crc = ((crc << 1) & params.mask) ^ params.polynomial;
    } else {
      crc = (crc << 1) & params.mask;
    }
    bit += 1;
  }
  crc
}

/// Advance the register by one message byte.
#[must_use]
pub(crate) const fn step(params: &CrcParams, crc: u64, byte: u8) -> u64 {
  let mut data = byte as u64;
  if params.reflect_input_bits {
    data = reflect_bits(data, 8);
  }
  divide(params, crc ^ (data << (params.bits - 8)))
}

/// One-shot CRC of a complete message.
#[must_use]
pub(crate) const fn calculate(params: &CrcParams, message: &[u8]) -> u64 {
  let mut crc = params.initial_value;
  let mut i = 0;
  while i < message.len() {
    crc = step(params, crc, message[i]);
    i += 1;
  }
  finalize(params, crc)
}

/// Advance a previously returned value by one byte.
///
/// The prior value is a finalized output, not raw register state, so each
/// call pays one unfinalize and one finalize. That cost is the contract:
/// callers round-trip only published values and the engine keeps no
/// per-stream state.
#[must_use]
pub(crate) const fn update(params: &CrcParams, prior: Option<u64>, byte: u8) -> u64 {
  let crc = match prior {
    None => params.initial_value,
    Some(value) => unfinalize(params, value),
  };
  finalize(params, step(params, crc, byte))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Config;

  fn params(config: Config) -> CrcParams {
    match config {
      Config::Crc(params) => params,
      Config::Checksum(_) => panic!("expected a CRC config"),
    }
  }

  #[test]
  fn division_keeps_register_masked() {
    let p = params(Config::CRC16_CCITT);
    let mut crc = p.initial_value();
    for byte in 0u8..=255 {
      crc = step(&p, crc, byte);
      assert!(crc <= p.mask());
    }
  }

  #[test]
  fn check_values() {
    assert_eq!(calculate(&params(Config::CRC16), b"123456789"), 0xBB3D);
    assert_eq!(calculate(&params(Config::CRC16_CCITT), b"123456789"), 0x29B1);
    assert_eq!(calculate(&params(Config::CRC32), b"123456789"), 0xCBF4_3926);
  }

  #[test]
  fn update_folds_to_calculate() {
    let message = b"The quick brown fox jumps over the lazy dog";
    for config in Config::BUILTIN {
      let Config::Crc(p) = config else { continue };
      let mut acc = None;
      for &byte in message.iter() {
        acc = Some(update(&p, acc, byte));
      }
      assert_eq!(acc, Some(calculate(&p, message)), "{}", p.name());
    }
  }

  #[test]
  fn update_resumes_from_calculate() {
    let message = b"resumable from a published value";
    for config in Config::BUILTIN {
      let Config::Crc(p) = config else { continue };
      let whole = calculate(&p, message);
      for split in 0..message.len() {
        let mut acc = match split {
          0 => None,
          _ => Some(calculate(&p, &message[..split])),
        };
        for &byte in &message[split..] {
          acc = Some(update(&p, acc, byte));
        }
        assert_eq!(acc, Some(whole), "{} split {split}", p.name());
      }
    }
  }
}
