//! Additive checksum engine (sum modulo 2^bits).
//!
//! The trivial sibling of the CRC cores: every message byte is added into
//! a 64-bit accumulator, and the sum is masked to the output width. Bytes
//! enter the sum sign-extended (two's complement), matching the original
//! byte semantics this model reproduces; for widths above 8 bits that
//! changes the result (`0x80` contributes `-128`, not `128`).
//!
//! The masked sum is itself the resumable state, so [`update`] composes
//! directly with no finalize/unfinalize pair.

// Indexing uses a bounded loop index (0..message.len()), required for
// const evaluation.
#![allow(clippy::indexing_slicing)]

use crate::config::ChecksumParams;

/// Sign-extend one message byte into the 64-bit accumulator domain.
const fn extend(byte: u8) -> u64 {
  byte as i8 as i64 as u64
}

/// Sum an entire message. The accumulator is wide enough that no
/// truncation happens before the single final mask.
#[must_use]
pub(crate) const fn calculate(params: &ChecksumParams, message: &[u8]) -> u64 {
  let mut sum = params.initial_value;
  let mut i = 0;
  while i < message.len() {
    sum = sum.wrapping_add(extend(message[i]));
    i += 1;
  }
  sum & params.mask
}

/// Add one byte to a running sum. `None` starts from the initial value.
#[must_use]
pub(crate) const fn update(params: &ChecksumParams, prior: Option<u64>, byte: u8) -> u64 {
  let sum = match prior {
    Some(value) => value,
    None => params.initial_value,
  };
  sum.wrapping_add(extend(byte)) & params.mask
}
