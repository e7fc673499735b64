//! Parameterized CRC and checksum computation.
//!
//! This crate implements the Rocksoft/Williams parameterized CRC model:
//! one engine covering every CRC variant expressible as a width (a
//! positive multiple of 8, up to 64 bits), a generator polynomial, an
//! initial value, a final XOR, and input/output bit or byte reflection —
//! plus plain additive checksums under the same interface.
//!
//! # Built-In Profiles
//!
//! | Profile | bits | poly | init | xorout | refin | refout | swap |
//! |---------|------|------|------|--------|-------|--------|------|
//! | [`Config::CHECKSUM8`] | 8 | — | 0 | — | — | — | — |
//! | [`Config::CHECKSUM16`] | 16 | — | 0 | — | — | — | — |
//! | [`Config::CHECKSUM32`] | 32 | — | 0 | — | — | — | — |
//! | [`Config::CRC16`] | 16 | 0x8005 | 0x0000 | 0x0000 | yes | yes | no |
//! | [`Config::CRC16_MODBUS`] | 16 | 0x8005 | 0xFFFF | 0x0000 | yes | yes | no |
//! | [`Config::CRC16_CCITT`] | 16 | 0x1021 | 0xFFFF | 0x0000 | no | no | no |
//! | [`Config::CRC16_CCITT_XMODEM`] | 16 | 0x1021 | 0x0000 | 0x0000 | no | no | no |
//! | [`Config::CRC16_CCITT_0X1D0F`] | 16 | 0x1021 | 0x1D0F | 0x0000 | no | no | no |
//! | [`Config::CRC16_CCITT_KERMIT`] | 16 | 0x1021 | 0x0000 | 0x0000 | yes | yes | yes |
//! | [`Config::CRC16_DNP`] | 16 | 0x3D65 | 0x0000 | 0xFFFF | yes | yes | yes |
//! | [`Config::CRC32`] | 32 | 0x04C11DB7 | 0xFFFFFFFF | 0xFFFFFFFF | yes | yes | no |
//!
//! # Two Entry Points
//!
//! The stateless free functions dispatch per call and use the bitwise
//! division core; the stateful [`Engine`] builds a 256-entry lookup table
//! once at construction and reuses it on every call. Both produce
//! identical results.
//!
//! ```
//! use crc_model::{Config, Engine};
//!
//! // One-shot, stateless.
//! let crc = crc_model::calculate(&Config::CRC32, b"123456789");
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // One-shot, table-driven.
//! let engine = Engine::new(Config::CRC32);
//! assert_eq!(engine.calculate(b"123456789"), crc);
//!
//! // Incremental: the accumulator is just the previously returned value.
//! let mut acc = None;
//! for &byte in b"123456789" {
//!   acc = Some(engine.update(acc, byte));
//! }
//! assert_eq!(acc, Some(crc));
//! ```
//!
//! Incremental computation is resumable from any previously returned
//! value, including one produced by `calculate` over a prefix — the
//! engine keeps no hidden per-stream state.
//!
//! # Custom Variants
//!
//! [`Config::crc`] and [`Config::checksum`] are checked constructors for
//! variants not in the built-in set:
//!
//! ```
//! use crc_model::Config;
//!
//! let bzip2 = Config::crc("CRC-32 bzip2", 32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, false, false, false)?;
//! assert_eq!(crc_model::calculate(&bzip2, b"123456789"), 0xFC89_1918);
//! # Ok::<(), crc_model::ConfigError>(())
//! ```
//!
//! # Scope
//!
//! Purely computational: no I/O, no allocation, `no_std`. CRCs are
//! integrity checks, not cryptographic primitives.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(test)]
extern crate std;

mod bitwise;
mod config;
mod engine;
mod error;
mod finalize;
mod reflect;
mod sum;
mod table;

pub use config::{ChecksumParams, Config, CrcParams};
pub use engine::Engine;
pub use error::ConfigError;

/// Compute the checksum/CRC of a complete message.
///
/// Stateless: the config is supplied per call and CRCs take the bitwise
/// division path, with no table construction or reuse. For repeated
/// computation under one config, build an [`Engine`] instead.
#[must_use]
pub const fn calculate(config: &Config, message: &[u8]) -> u64 {
  match config {
    Config::Checksum(params) => sum::calculate(params, message),
    Config::Crc(params) => bitwise::calculate(params, message),
  }
}

/// Advance a previously returned value by one message byte.
///
/// Pass `None` to start a new message; thereafter pass back the value the
/// last call returned. Values returned by [`calculate`] resume the same
/// way. The hand-off works on published (finalized) values only, so for
/// CRC configs each call pays one unfinalize and one finalize — the
/// accepted cost of a stateless API.
#[must_use]
pub const fn update(config: &Config, prior: Option<u64>, byte: u8) -> u64 {
  match config {
    Config::Checksum(params) => sum::update(params, prior, byte),
    Config::Crc(params) => bitwise::update(params, prior, byte),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Check values for every built-in profile over "123456789". If these
// fail, the build fails.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  assert!(calculate(&Config::CHECKSUM8, CHECK_INPUT) == 0xDD);
  assert!(calculate(&Config::CHECKSUM16, CHECK_INPUT) == 0x01DD);
  assert!(calculate(&Config::CHECKSUM32, CHECK_INPUT) == 0x01DD);
  assert!(calculate(&Config::CRC16, CHECK_INPUT) == 0xBB3D);
  assert!(calculate(&Config::CRC16_MODBUS, CHECK_INPUT) == 0x4B37);
  assert!(calculate(&Config::CRC16_CCITT, CHECK_INPUT) == 0x29B1);
  assert!(calculate(&Config::CRC16_CCITT_XMODEM, CHECK_INPUT) == 0x31C3);
  assert!(calculate(&Config::CRC16_CCITT_0X1D0F, CHECK_INPUT) == 0xE5CC);
  assert!(calculate(&Config::CRC16_CCITT_KERMIT, CHECK_INPUT) == 0x8921);
  assert!(calculate(&Config::CRC16_DNP, CHECK_INPUT) == 0x82EA);
  assert!(calculate(&Config::CRC32, CHECK_INPUT) == 0xCBF4_3926);
};
