//! Stateful engine: one config, lookup table built once at construction.
//!
//! An [`Engine`] binds to exactly one [`Config`]. For CRC configs it
//! precomputes the 256-entry table eagerly inside `new`, as a pure
//! function of the config; nothing mutates afterwards, so a constructed
//! engine is freely shared across threads. Checksum configs carry no
//! table at all.

use crate::config::{ChecksumParams, Config, CrcParams};
use crate::{sum, table};

/// A checksum/CRC calculator bound to one configuration.
///
/// Construction is `const`, so an engine can live in a `static`:
///
/// ```
/// use crc_model::{Config, Engine};
///
/// static CRC32: Engine = Engine::new(Config::CRC32);
///
/// assert_eq!(CRC32.calculate(b"123456789"), 0xCBF4_3926);
/// ```
///
/// CRC computation uses the table-driven path; for one-off calls without
/// table construction, use the free functions [`calculate`](crate::calculate)
/// and [`update`](crate::update).
#[derive(Clone, Debug)]
pub struct Engine {
  inner: Inner,
}

/// Variant-specific engine state. Binding the table to the CRC variant
/// makes "checksum with a table" and "CRC without one" unrepresentable.
#[derive(Clone, Debug)]
enum Inner {
  Checksum(ChecksumParams),
  Crc { params: CrcParams, table: [u64; 256] },
}

impl Engine {
  /// Bind an engine to `config`, building the lookup table for CRC
  /// configs.
  #[must_use]
  pub const fn new(config: Config) -> Self {
    let inner = match config {
      Config::Checksum(params) => Inner::Checksum(params),
      Config::Crc(params) => Inner::Crc { table: table::build(&params), params },
    };
    Self { inner }
  }

  /// The configuration this engine is bound to.
  #[must_use]
  pub const fn config(&self) -> Config {
    match &self.inner {
      Inner::Checksum(params) => Config::Checksum(*params),
      Inner::Crc { params, .. } => Config::Crc(*params),
    }
  }

  /// Compute the checksum/CRC of a complete message.
  ///
  /// Equivalent to the stateless [`calculate`](crate::calculate) on the
  /// bound config, but CRCs take the table-driven path.
  #[must_use]
  pub const fn calculate(&self, message: &[u8]) -> u64 {
    match &self.inner {
      Inner::Checksum(params) => sum::calculate(params, message),
      Inner::Crc { params, table } => table::calculate(params, table, message),
    }
  }

  /// Advance a previously returned value by one message byte.
  ///
  /// Pass `None` to start a new message. The returned value is a
  /// published (finalized) output: it can be compared against expected
  /// values at any point and passed back in to continue.
  #[must_use]
  pub const fn update(&self, prior: Option<u64>, byte: u8) -> u64 {
    match &self.inner {
      Inner::Checksum(params) => sum::update(params, prior, byte),
      Inner::Crc { params, table } => table::update(params, table, prior, byte),
    }
  }
}

impl From<Config> for Engine {
  fn from(config: Config) -> Self {
    Self::new(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn engine_matches_stateless_facade() {
    let message = b"The quick brown fox jumps over the lazy dog";
    for config in Config::BUILTIN {
      let engine = Engine::new(config);
      assert_eq!(
        engine.calculate(message),
        crate::calculate(&config, message),
        "{}",
        config.name()
      );
    }
  }

  #[test]
  fn config_round_trips() {
    for config in Config::BUILTIN {
      assert_eq!(Engine::from(config).config(), config);
    }
  }

  #[test]
  fn checksum_engine_builds_no_table() {
    let engine = Engine::new(Config::CHECKSUM16);
    assert!(matches!(engine.inner, Inner::Checksum(_)));
  }

  #[test]
  fn engine_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();
  }

  #[test]
  fn const_engine_in_static() {
    static ENGINE: Engine = Engine::new(Config::CRC16_MODBUS);
    assert_eq!(ENGINE.calculate(b"123456789"), 0x4B37);
  }
}
