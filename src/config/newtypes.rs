//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around raw values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated Merchant Center account identifier.
///
/// Merchant IDs are positive 64-bit integers. The Content API serializes
/// them as JSON strings, while hand-written config files usually hold plain
/// numbers, so both forms are accepted when deserializing.
///
/// # Example
///
/// ```rust
/// use shopping_samples::MerchantId;
///
/// let id: MerchantId = "1234567".parse().unwrap();
/// assert_eq!(id.get(), 1_234_567);
/// assert_eq!(id.to_string(), "1234567");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MerchantId(u64);

impl MerchantId {
    /// Creates a new validated merchant ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMerchantId`] if the ID is zero.
    pub fn new(id: u64) -> Result<Self, ConfigError> {
        if id == 0 {
            return Err(ConfigError::InvalidMerchantId {
                value: id.to_string(),
            });
        }
        Ok(Self(id))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for MerchantId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidMerchantId {
                value: s.to_string(),
            })?;
        Self::new(id)
    }
}

impl fmt::Display for MerchantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for MerchantId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for MerchantId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::new(n).map_err(de::Error::custom),
            Raw::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merchant_id_rejects_zero() {
        assert!(matches!(
            MerchantId::new(0),
            Err(ConfigError::InvalidMerchantId { .. })
        ));
    }

    #[test]
    fn test_merchant_id_parses_decimal_string() {
        let id: MerchantId = " 42 ".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_merchant_id_rejects_garbage() {
        let result = "abc".parse::<MerchantId>();
        assert_eq!(
            result,
            Err(ConfigError::InvalidMerchantId {
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_merchant_id_deserializes_from_number_and_string() {
        let from_number: MerchantId = serde_json::from_str("123").unwrap();
        let from_string: MerchantId = serde_json::from_str(r#""123""#).unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn test_merchant_id_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<MerchantId>(r#""0""#).is_err());
    }

    #[test]
    fn test_merchant_id_serializes_as_string() {
        let id = MerchantId::new(987).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""987""#);
    }
}
