//! Bit- and byte-order reflection primitives.
//!
//! Several CRC standards transmit least-significant-bit first and publish
//! their parameters accordingly; reflection converts between that
//! convention and the MSB-first register used by the division cores. Both
//! functions are pure, total, and their own inverse: applying one twice
//! with the same width returns the original value.
//!
//! Callers guarantee the width argument fits the 64-bit register; the
//! functions do no bounds checking beyond that discipline.

/// Reverse the order of the low `bits` bits of `value`.
///
/// Bit `i` swaps with bit `bits - 1 - i`. Bits at or above `bits` are
/// dropped from the result.
#[must_use]
pub(crate) const fn reflect_bits(value: u64, bits: u32) -> u64 {
  let mut reflection = 0u64;
  let mut bit = 0;
  while bit < bits {
    if (value >> bit) & 1 != 0 {
      reflection |= 1 << (bits - 1 - bit);
    }
    bit += 1;
  }
  reflection
}

/// Reverse the order of the low `bytes` bytes of `value`.
///
/// The same operation as [`reflect_bits`] at byte granularity; bytes at or
/// above `bytes` are dropped from the result.
#[must_use]
pub(crate) const fn reflect_bytes(value: u64, bytes: u32) -> u64 {
  let mut reflection = 0u64;
  let mut byte = 0;
  while byte < bytes {
    reflection |= ((value >> (byte * 8)) & 0xFF) << ((bytes - 1 - byte) * 8);
    byte += 1;
  }
  reflection
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

const _: () = {
  assert!(reflect_bits(0x01, 8) == 0x80);
  assert!(reflect_bits(0xF0, 8) == 0x0F);
  assert!(reflect_bits(0x8005, 16) == 0xA001);
  assert!(reflect_bits(0x04C1_1DB7, 32) == 0xEDB8_8320);
  assert!(reflect_bytes(0x1122, 2) == 0x2211);
  assert!(reflect_bytes(0x1122_3344, 4) == 0x4433_2211);
};
