//! Property-based tests over randomized messages and split points.
//!
//! These verify laws that must hold for all inputs, not just fixed
//! vectors. Uses proptest for input generation.

use crc_model::{Config, Engine};
use proptest::prelude::*;

/// Arbitrary byte vectors up to 4KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..4096)
}

/// One representative per dispatch shape: plain checksum, reflected CRC,
/// unreflected CRC, byte-swapped CRC, 32-bit CRC.
const CONFIGS: [Config; 5] = [
  Config::CHECKSUM16,
  Config::CRC16_MODBUS,
  Config::CRC16_CCITT,
  Config::CRC16_DNP,
  Config::CRC32,
];

fn fold(engine: &Engine, start: Option<u64>, bytes: &[u8]) -> Option<u64> {
  let mut acc = start;
  for &byte in bytes {
    acc = Some(engine.update(acc, byte));
  }
  acc
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn update_fold_equals_calculate(data in arb_data()) {
    for config in CONFIGS {
      let engine = Engine::new(config);
      let folded = fold(&engine, None, &data);
      if data.is_empty() {
        prop_assert_eq!(folded, None);
      } else {
        prop_assert_eq!(folded, Some(engine.calculate(&data)), "{}", config.name());
      }
    }
  }

  #[test]
  fn stateless_equals_engine(data in arb_data()) {
    for config in CONFIGS {
      let engine = Engine::new(config);
      prop_assert_eq!(
        crc_model::calculate(&config, &data),
        engine.calculate(&data),
        "{}",
        config.name()
      );
    }
  }

  #[test]
  fn resume_from_any_split(data in arb_data(), split in 0..4096usize) {
    let split = split.min(data.len());
    let (head, tail) = data.split_at(split);
    for config in CONFIGS {
      let engine = Engine::new(config);
      let start = if head.is_empty() { None } else { Some(engine.calculate(head)) };
      let resumed = fold(&engine, start, tail);
      if data.is_empty() {
        prop_assert_eq!(resumed, None);
      } else {
        prop_assert_eq!(resumed, Some(engine.calculate(&data)), "{} split={}", config.name(), split);
      }
    }
  }

  #[test]
  fn output_fits_width(data in arb_data()) {
    for config in Config::BUILTIN {
      let value = crc_model::calculate(&config, &data);
      prop_assert!(value <= config.mask(), "{}", config.name());
    }
  }

  #[test]
  fn custom_config_matches_builtin(data in arb_data()) {
    // A config assembled through the checked constructor behaves
    // identically to the equivalent built-in.
    let rebuilt = Config::crc("CRC-32 rebuilt", 32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true, false)
      .expect("width is valid");
    prop_assert_eq!(
      crc_model::calculate(&rebuilt, &data),
      crc_model::calculate(&Config::CRC32, &data)
    );
  }
}
