//! Demo configuration.
//!
//! Settings for the console demo: the value ranges used to fill the char and
//! int arrays, the RNG seed, the largest accepted array size, and which binary
//! operations are shown. Configurations are read from and written to JSON.
//!
//! # Example
//!
//! ```
//! use vecbits::{BitwiseOp, DemoConfig};
//!
//! let config = DemoConfig::from_json(r#"{ "seed": 7, "ops": ["xor"] }"#).unwrap();
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.ops, vec![BitwiseOp::Xor]);
//! assert_eq!(config.int_range.max, 100);
//! ```

use crate::element::Element;
use crate::error::{Result, VecbitsError};
use crate::ops::BitwiseOp;
use crate::random::DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default upper bound on array sizes read from input.
pub const DEFAULT_MAX_LEN: usize = 1_000_000;

/// Inclusive value range for random fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check that the range is ordered and both bounds fit in `T`.
    pub fn validate_for<T: Element>(&self) -> Result<()> {
        if self.min > self.max || T::from_i64(self.min).is_none() || T::from_i64(self.max).is_none() {
            return Err(VecbitsError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Configuration for the console demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Range for the char (`i8`) arrays
    pub char_range: ValueRange,
    /// Range for the int (`i32`) arrays
    pub int_range: ValueRange,
    /// RNG seed
    pub seed: u64,
    /// Largest accepted array size
    pub max_len: usize,
    /// Binary operations shown in the results sections, in order
    pub ops: Vec<BitwiseOp>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            char_range: ValueRange::new(0, 127),
            int_range: ValueRange::new(0, 100),
            seed: DEFAULT_SEED,
            max_len: DEFAULT_MAX_LEN,
            ops: BitwiseOp::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field.
    pub fn validate(&self) -> Result<()> {
        self.char_range.validate_for::<i8>()?;
        self.int_range.validate_for::<i32>()?;
        if self.max_len == 0 {
            return Err(VecbitsError::InvalidParameter(
                "max_len must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.char_range, ValueRange::new(0, 127));
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.ops, vec![BitwiseOp::And, BitwiseOp::Or, BitwiseOp::Xor]);
    }

    #[test]
    fn test_validate_rejects_char_overflow() {
        let config = DemoConfig {
            char_range: ValueRange::new(0, 200),
            ..DemoConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(VecbitsError::InvalidRange { min: 0, max: 200 })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_max_len() {
        let config = DemoConfig {
            max_len: 0,
            ..DemoConfig::default()
        };
        assert!(matches!(config.validate(), Err(VecbitsError::InvalidParameter(_))));
    }

    #[test]
    fn test_json_uses_lowercase_ops() {
        let json = DemoConfig::default().to_json_pretty().unwrap();
        assert!(json.contains("\"and\""));
        assert!(json.contains("\"xor\""));
    }
}
