//! Error types for configuration construction.
//!
//! Small hand-written error types; the computation paths themselves are
//! total and never fail. The only fallible operation in this crate is
//! assembling a [`Config`](crate::Config) with an unusable output width.

use core::fmt;

/// A checksum/CRC configuration could not be constructed.
///
/// Returned by [`Config::checksum`](crate::Config::checksum) and
/// [`Config::crc`](crate::Config::crc) when the requested output width does
/// not fit the working model. The width must be a positive multiple of 8
/// no wider than the 64-bit working register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigError {
  /// The requested width was zero.
  WidthZero,
  /// The requested width is not a whole number of bytes.
  WidthNotByteMultiple {
    /// The rejected width.
    bits: u32,
  },
  /// The requested width exceeds the 64-bit working register.
  WidthTooWide {
    /// The rejected width.
    bits: u32,
  },
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::WidthZero => f.write_str("width must be positive"),
      Self::WidthNotByteMultiple { bits } => {
        write!(f, "width must be a multiple of 8 bits, got {bits}")
      }
      Self::WidthTooWide { bits } => {
        write!(f, "width must be at most 64 bits, got {bits}")
      }
    }
  }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
  use std::string::ToString;

  use super::*;

  #[test]
  fn display_messages() {
    assert_eq!(ConfigError::WidthZero.to_string(), "width must be positive");
    assert_eq!(
      ConfigError::WidthNotByteMultiple { bits: 12 }.to_string(),
      "width must be a multiple of 8 bits, got 12"
    );
    assert_eq!(
      ConfigError::WidthTooWide { bits: 128 }.to_string(),
      "width must be at most 64 bits, got 128"
    );
  }

  #[test]
  fn trait_bounds() {
    fn assert_error<T: core::error::Error + Send + Sync + Copy>() {}
    assert_error::<ConfigError>();
  }
}
