//! Checksum/CRC variant descriptions under the Rocksoft/Williams model.
//!
//! A [`Config`] is an immutable value describing one checksum or CRC
//! variant. It carries no behavior beyond derived-field computation at
//! construction and acts as the dispatch tag for every computation path.
//!
//! Two variants exist, and only two: an additive [`Checksum`](Config::Checksum)
//! and a polynomial-division [`Crc`](Config::Crc). Making them enum variants
//! (rather than a type-tag field) means "no polynomial on a checksum" is
//! structurally impossible and dispatch is an exhaustive `match`.
//!
//! Derived fields (`bytes`, `mask`, `top_bit`) are computed once by the
//! checked constructors; the param structs keep their fields crate-private
//! so an inconsistent value cannot be assembled outside this crate.

use core::fmt;

use crate::error::ConfigError;

/// Parameters of an additive checksum variant.
///
/// The initial value is always zero; the sum is masked to `bits` on output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecksumParams {
  pub(crate) name: &'static str,
  pub(crate) bits: u32,
  pub(crate) bytes: u32,
  pub(crate) mask: u64,
  pub(crate) initial_value: u64,
}

impl ChecksumParams {
  /// Human-readable name of this variant.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Output width in bits.
  #[must_use]
  pub const fn bits(&self) -> u32 {
    self.bits
  }

  /// Output width in bytes.
  #[must_use]
  pub const fn bytes(&self) -> u32 {
    self.bytes
  }

  /// Bitmask with exactly the low `bits` bits set.
  #[must_use]
  pub const fn mask(&self) -> u64 {
    self.mask
  }

  /// Starting value of the sum (always zero).
  #[must_use]
  pub const fn initial_value(&self) -> u64 {
    self.initial_value
  }
}

/// Parameters of a CRC variant.
///
/// `polynomial`, `initial_value`, and `final_xor_value` are stored masked
/// to the output width. `top_bit` has exactly one bit set, one position
/// below the width; the division cores test it to decide whether the
/// generator polynomial divides the current register head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  pub(crate) name: &'static str,
  pub(crate) bits: u32,
  pub(crate) bytes: u32,
  pub(crate) mask: u64,
  pub(crate) top_bit: u64,
  pub(crate) polynomial: u64,
  pub(crate) initial_value: u64,
  pub(crate) final_xor_value: u64,
  pub(crate) reflect_input_bits: bool,
  pub(crate) reflect_output_bits: bool,
  pub(crate) reflect_output_bytes: bool,
}

impl CrcParams {
  /// Human-readable name of this variant.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Output width in bits.
  #[must_use]
  pub const fn bits(&self) -> u32 {
    self.bits
  }

  /// Output width in bytes.
  #[must_use]
  pub const fn bytes(&self) -> u32 {
    self.bytes
  }

  /// Bitmask with exactly the low `bits` bits set.
  #[must_use]
  pub const fn mask(&self) -> u64 {
    self.mask
  }

  /// Generator polynomial (normal, MSB-first representation).
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.polynomial
  }

  /// Register value before any message byte is processed.
  #[must_use]
  pub const fn initial_value(&self) -> u64 {
    self.initial_value
  }

  /// Value XORed into the register during finalization.
  #[must_use]
  pub const fn final_xor_value(&self) -> u64 {
    self.final_xor_value
  }

  /// Whether each input byte is bit-reflected before entering the register.
  #[must_use]
  pub const fn reflect_input_bits(&self) -> bool {
    self.reflect_input_bits
  }

  /// Whether the register is bit-reflected during finalization.
  #[must_use]
  pub const fn reflect_output_bits(&self) -> bool {
    self.reflect_output_bits
  }

  /// Whether the register is byte-reflected during finalization (Kermit, DNP).
  #[must_use]
  pub const fn reflect_output_bytes(&self) -> bool {
    self.reflect_output_bytes
  }
}

/// One checksum/CRC variant description.
///
/// Immutable after construction and `Copy`; safe to share across any number
/// of threads. Construct a custom variant with [`Config::checksum`] or
/// [`Config::crc`], or use one of the built-in profiles such as
/// [`Config::CRC32`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Config {
  /// Additive sum modulo 2^bits.
  Checksum(ChecksumParams),
  /// Polynomial-division CRC.
  Crc(CrcParams),
}

/// Validate an output width: positive, whole bytes, at most the register.
const fn validate_width(bits: u32) -> Result<(), ConfigError> {
  if bits == 0 {
    return Err(ConfigError::WidthZero);
  }
  if bits % 8 != 0 {
    return Err(ConfigError::WidthNotByteMultiple { bits });
  }
  if bits > 64 {
    return Err(ConfigError::WidthTooWide { bits });
  }
  Ok(())
}

/// Bitmask with the low `bits` bits set. Caller has validated `1..=64`.
const fn width_mask(bits: u32) -> u64 {
  u64::MAX >> (64 - bits)
}

/// Unwrap a checked constructor in const context; used only for the
/// built-in profiles, where a failure is a compile error.
const fn builtin(config: Result<Config, ConfigError>) -> Config {
  match config {
    Ok(config) => config,
    Err(_) => panic!("built-in profile failed width validation"),
  }
}

impl Config {
  /// Create an additive checksum configuration.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError`] unless `bits` is a positive multiple of 8
  /// no greater than 64.
  pub const fn checksum(name: &'static str, bits: u32) -> Result<Self, ConfigError> {
    match validate_width(bits) {
      Err(err) => Err(err),
      Ok(()) => Ok(Self::Checksum(ChecksumParams {
        name,
        bits,
        bytes: bits / 8,
        mask: width_mask(bits),
        initial_value: 0,
      })),
    }
  }

  /// Create a CRC configuration.
  ///
  /// `polynomial`, `initial_value`, and `final_xor_value` are masked to the
  /// output width before being stored.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError`] unless `bits` is a positive multiple of 8
  /// no greater than 64.
  #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
  pub const fn crc(
    name: &'static str,
    bits: u32,
    polynomial: u64,
    initial_value: u64,
    final_xor_value: u64,
    reflect_input_bits: bool,
    reflect_output_bits: bool,
    reflect_output_bytes: bool,
  ) -> Result<Self, ConfigError> {
    match validate_width(bits) {
      Err(err) => Err(err),
      Ok(()) => {
        let mask = width_mask(bits);
        Ok(Self::Crc(CrcParams {
          name,
          bits,
          bytes: bits / 8,
          mask,
          top_bit: 1 << (bits - 1),
          polynomial: polynomial & mask,
          initial_value: initial_value & mask,
          final_xor_value: final_xor_value & mask,
          reflect_input_bits,
          reflect_output_bits,
          reflect_output_bytes,
        }))
      }
    }
  }

  /// Human-readable name of this variant.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Checksum(params) => params.name,
      Self::Crc(params) => params.name,
    }
  }

  /// Output width in bits.
  #[must_use]
  pub const fn bits(&self) -> u32 {
    match self {
      Self::Checksum(params) => params.bits,
      Self::Crc(params) => params.bits,
    }
  }

  /// Output width in bytes.
  #[must_use]
  pub const fn bytes(&self) -> u32 {
    match self {
      Self::Checksum(params) => params.bytes,
      Self::Crc(params) => params.bytes,
    }
  }

  /// Bitmask with exactly the low `bits` bits set.
  #[must_use]
  pub const fn mask(&self) -> u64 {
    match self {
      Self::Checksum(params) => params.mask,
      Self::Crc(params) => params.mask,
    }
  }

  /// Register value before any message byte is processed.
  #[must_use]
  pub const fn initial_value(&self) -> u64 {
    match self {
      Self::Checksum(params) => params.initial_value,
      Self::Crc(params) => params.initial_value,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-In Profiles
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
  /// 8-bit additive checksum.
  pub const CHECKSUM8: Self = builtin(Self::checksum("8-bit Checksum", 8));
  /// 16-bit additive checksum.
  pub const CHECKSUM16: Self = builtin(Self::checksum("16-bit Checksum", 16));
  /// 32-bit additive checksum.
  pub const CHECKSUM32: Self = builtin(Self::checksum("32-bit Checksum", 32));
  /// CRC-16 (ARC/IBM): poly 0x8005, reflected.
  pub const CRC16: Self = builtin(Self::crc("CRC-16", 16, 0x8005, 0x0000, 0x0000, true, true, false));
  /// CRC-16 Modbus: poly 0x8005, init 0xFFFF, reflected.
  pub const CRC16_MODBUS: Self =
    builtin(Self::crc("CRC-16 Modbus", 16, 0x8005, 0xFFFF, 0x0000, true, true, false));
  /// CRC-CCITT (FALSE): poly 0x1021, init 0xFFFF, unreflected.
  pub const CRC16_CCITT: Self =
    builtin(Self::crc("CRC-CCITT", 16, 0x1021, 0xFFFF, 0x0000, false, false, false));
  /// CRC-CCITT XModem: poly 0x1021, init 0x0000, unreflected.
  pub const CRC16_CCITT_XMODEM: Self =
    builtin(Self::crc("CRC-CCITT XModem", 16, 0x1021, 0x0000, 0x0000, false, false, false));
  /// CRC-CCITT with init 0x1D0F (AUG-CCITT).
  pub const CRC16_CCITT_0X1D0F: Self =
    builtin(Self::crc("CRC-CCITT 0x1D0F", 16, 0x1021, 0x1D0F, 0x0000, false, false, false));
  /// CRC-CCITT Kermit: poly 0x1021, reflected, byte-swapped output.
  pub const CRC16_CCITT_KERMIT: Self =
    builtin(Self::crc("CRC-CCITT Kermit", 16, 0x1021, 0x0000, 0x0000, true, true, true));
  /// CRC-DNP (DNP3): poly 0x3D65, xorout 0xFFFF, byte-swapped output.
  pub const CRC16_DNP: Self =
    builtin(Self::crc("CRC-DNP", 16, 0x3D65, 0x0000, 0xFFFF, true, true, true));
  /// CRC-32 (IEEE 802.3): poly 0x04C11DB7, reflected.
  pub const CRC32: Self = builtin(Self::crc(
    "CRC-32",
    32,
    0x04C1_1DB7,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    true,
    true,
    false,
  ));

  /// All built-in profiles, for sweep-style tests and tooling.
  pub const BUILTIN: [Self; 11] = [
    Self::CHECKSUM8,
    Self::CHECKSUM16,
    Self::CHECKSUM32,
    Self::CRC16,
    Self::CRC16_MODBUS,
    Self::CRC16_CCITT,
    Self::CRC16_CCITT_XMODEM,
    Self::CRC16_CCITT_0X1D0F,
    Self::CRC16_CCITT_KERMIT,
    Self::CRC16_DNP,
    Self::CRC32,
  ];
}

impl fmt::Display for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Derived-field invariants of every built-in profile.
// Indexing is loop-bounded over the const array.
#[allow(clippy::indexing_slicing)]
const _: () = {
  let mut i = 0;
  while i < Config::BUILTIN.len() {
    let config = &Config::BUILTIN[i];
    let bits = config.bits();
    assert!(bits > 0 && bits % 8 == 0 && bits <= 64);
    assert!(config.bytes() == bits / 8);
    assert!(config.mask() == u64::MAX >> (64 - bits));
    if let Config::Crc(params) = config {
      assert!(params.top_bit == 1 << (bits - 1));
      assert!(params.top_bit & params.mask != 0);
      assert!(params.polynomial <= params.mask);
      assert!(params.initial_value <= params.mask);
      assert!(params.final_xor_value <= params.mask);
    }
    i += 1;
  }
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn checked_constructor_rejects_bad_widths() {
    assert_eq!(Config::checksum("zero", 0), Err(ConfigError::WidthZero));
    assert_eq!(
      Config::checksum("ragged", 12),
      Err(ConfigError::WidthNotByteMultiple { bits: 12 })
    );
    assert_eq!(
      Config::crc("wide", 72, 0x1021, 0, 0, false, false, false),
      Err(ConfigError::WidthTooWide { bits: 72 })
    );
  }

  #[test]
  fn crc_constructor_masks_parameters() {
    let config = Config::crc("masked", 16, 0x1_8005, 0xFFFF_FFFF, 0x1_0000, true, true, false);
    let Ok(Config::Crc(params)) = config else {
      panic!("construction failed");
    };
    assert_eq!(params.polynomial(), 0x8005);
    assert_eq!(params.initial_value(), 0xFFFF);
    assert_eq!(params.final_xor_value(), 0x0000);
  }

  #[test]
  fn full_width_mask_does_not_overflow() {
    let Ok(config) = Config::crc("crc64", 64, 0x42F0_E1EB_A9EA_3693, !0, !0, true, true, false) else {
      panic!("construction failed");
    };
    assert_eq!(config.mask(), u64::MAX);
    assert_eq!(config.bytes(), 8);
  }

  #[test]
  fn builtin_names_are_distinct() {
    for (i, a) in Config::BUILTIN.iter().enumerate() {
      for b in &Config::BUILTIN[i + 1..] {
        assert_ne!(a.name(), b.name());
      }
    }
  }

  #[test]
  fn display_prints_profile_name() {
    use std::string::ToString;
    assert_eq!(Config::CRC16_MODBUS.to_string(), "CRC-16 Modbus");
    assert_eq!(Config::CHECKSUM8.to_string(), "8-bit Checksum");
  }
}
