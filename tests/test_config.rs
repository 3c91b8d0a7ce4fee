//! Tests for demo configuration loading and validation.

use std::io::Write;
use vecbits::{BitwiseOp, DemoConfig, ValueRange, VecbitsError};

#[test]
fn test_partial_json_fills_defaults() {
    let config = DemoConfig::from_json(r#"{ "int_range": { "min": -50, "max": 50 } }"#).unwrap();
    assert_eq!(config.int_range, ValueRange::new(-50, 50));
    assert_eq!(config.char_range, ValueRange::new(0, 127));
    assert_eq!(config.ops, BitwiseOp::ALL.to_vec());
    assert!(config.validate().is_ok());
}

#[test]
fn test_json_round_trip() {
    let config = DemoConfig {
        seed: 99,
        ops: vec![BitwiseOp::Xor],
        ..DemoConfig::default()
    };
    let json = config.to_json_pretty().unwrap();
    assert_eq!(DemoConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        DemoConfig::from_json("{ not json"),
        Err(VecbitsError::Config(_))
    ));
    assert!(matches!(
        DemoConfig::from_json(r#"{ "ops": ["nand"] }"#),
        Err(VecbitsError::Config(_))
    ));
}

#[test]
fn test_invalid_ranges() {
    let inverted = DemoConfig {
        int_range: ValueRange::new(10, 0),
        ..DemoConfig::default()
    };
    assert!(matches!(
        inverted.validate(),
        Err(VecbitsError::InvalidRange { min: 10, max: 0 })
    ));

    let too_wide = DemoConfig {
        int_range: ValueRange::new(0, i64::from(i32::MAX) + 1),
        ..DemoConfig::default()
    };
    assert!(too_wide.validate().is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "seed": 1234, "max_len": 16 }}"#).unwrap();

    let config = DemoConfig::load(file.path()).unwrap();
    assert_eq!(config.seed, 1234);
    assert_eq!(config.max_len, 16);
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        DemoConfig::load("/nonexistent/vecbits.json"),
        Err(VecbitsError::Io(_))
    ));
}
