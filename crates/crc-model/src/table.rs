//! Table-driven ("fast") CRC core.
//!
//! A 256-entry table of partial remainders, one per possible leading byte,
//! generated from the bitwise division rounds. One lookup then replaces
//! eight conditional shift-XOR rounds; cost per byte is width-independent.
//!
//! The table is built from raw byte values: input reflection is applied by
//! the per-byte step when indexing, not baked into the entries. Generation
//! is `const`, so an [`Engine`](crate::Engine) can live in a `static`.

// Indexing uses bounded loop indices and a u8-derived table index,
// required for const evaluation.
#![allow(clippy::indexing_slicing)]

use crate::bitwise::divide;
use crate::config::CrcParams;
use crate::finalize::{finalize, unfinalize};
use crate::reflect::reflect_bits;

/// Precompute the remainder of every possible leading byte.
#[must_use]
pub(crate) const fn build(params: &CrcParams) -> [u64; 256] {
  let mut table = [0u64; 256];
  let mut dividend = 0usize;
  while dividend < 256 {
    // Start with the dividend followed by zeros.
    let crc = (dividend as u64) << (params.bits - 8);
    table[dividend] = divide(params, crc);
    dividend += 1;
  }
  table
}

/// Advance the register by one message byte via one table lookup.
///
/// Algebraically identical to eight rounds of [`divide`].
#[must_use]
pub(crate) const fn step(params: &CrcParams, table: &[u64; 256], crc: u64, byte: u8) -> u64 {
  let mut data = byte as u64;
  if params.reflect_input_bits {
    data = reflect_bits(data, 8);
  }
  let index = (data ^ (crc >> (params.bits - 8))) & 0xFF;
  ((crc << 8) & params.mask) ^ table[index as usize]
}

/// One-shot CRC of a complete message.
#[must_use]
pub(crate) const fn calculate(params: &CrcParams, table: &[u64; 256], message: &[u8]) -> u64 {
  let mut crc = params.initial_value;
  let mut i = 0;
  while i < message.len() {
    crc = step(params, table, crc, message[i]);
    i += 1;
  }
  finalize(params, crc)
}

/// Advance a previously returned value by one byte.
///
/// Same unfinalize/finalize hand-off contract as the bitwise core.
#[must_use]
pub(crate) const fn update(params: &CrcParams, table: &[u64; 256], prior: Option<u64>, byte: u8) -> u64 {
  let crc = match prior {
    None => params.initial_value,
    Some(value) => unfinalize(params, value),
  };
  finalize(params, step(params, table, crc, byte))
}
