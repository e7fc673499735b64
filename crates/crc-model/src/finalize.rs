//! Finalize/unfinalize transforms between register and published form.
//!
//! A CRC standard's published output is the raw division remainder after
//! optional bit reflection, an XOR, and (for Kermit and DNP) a byte swap.
//! [`finalize`] applies those steps; [`unfinalize`] reverses them exactly.
//!
//! The round trip is what makes incremental update resumable from nothing
//! but a previously returned value: `update` unfinalizes the caller's
//! value back into working-register form, advances it, and finalizes
//! again. For every config and every register value `r`,
//! `unfinalize(finalize(r)) == r` and `finalize(unfinalize(v)) == v`.

use crate::config::CrcParams;
use crate::reflect::{reflect_bits, reflect_bytes};

/// Convert a working register into the published output form.
#[must_use]
pub(crate) const fn finalize(params: &CrcParams, mut crc: u64) -> u64 {
  if params.reflect_output_bits {
    crc = reflect_bits(crc, params.bits);
  }
  crc ^= params.final_xor_value;
  if params.reflect_output_bytes {
    crc = reflect_bytes(crc, params.bytes);
  }
  crc
}

/// Convert a published output back into the working register. Exact
/// inverse of [`finalize`], steps reversed.
#[must_use]
pub(crate) const fn unfinalize(params: &CrcParams, mut crc: u64) -> u64 {
  if params.reflect_output_bytes {
    crc = reflect_bytes(crc, params.bytes);
  }
  crc ^= params.final_xor_value;
  if params.reflect_output_bits {
    crc = reflect_bits(crc, params.bits);
  }
  crc
}
