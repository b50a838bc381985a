//! Human-readable loan period parsing and formatting utilities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Period must be at least one day")]
    Zero,
}

/// Loan period in days with human-readable parsing ("14", "14d", "2w")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct LoanPeriod(pub u32);

impl LoanPeriod {
    pub fn days(&self) -> u32 {
        self.0
    }

    pub fn as_duration(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.0))
    }
}

impl Default for LoanPeriod {
    fn default() -> Self {
        LoanPeriod(14)
    }
}

impl<'de> Deserialize<'de> for LoanPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct LoanPeriodVisitor;

        impl<'de> serde::de::Visitor<'de> for LoanPeriodVisitor {
            type Value = LoanPeriod;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a loan period as string (e.g., \"14d\", \"2w\") or integer days")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if v == 0 {
                    return Err(serde::de::Error::custom(ParseError::Zero));
                }
                u32::try_from(v)
                    .map(LoanPeriod)
                    .map_err(|_| serde::de::Error::custom("loan period out of range"))
            }

            // TOML integers arrive as i64
            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let v = u64::try_from(v)
                    .map_err(|_| serde::de::Error::custom("loan period must be positive"))?;
                self.visit_u64(v)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<LoanPeriod>().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_any(LoanPeriodVisitor)
    }
}

impl FromStr for LoanPeriod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_uppercase();

        // Try to parse as plain number of days first
        if let Ok(num) = s.parse::<u32>() {
            if num == 0 {
                return Err(ParseError::Zero);
            }
            return Ok(LoanPeriod(num));
        }

        // Parse with unit suffix
        let (num_str, unit) = if let Some(pos) = s.find(|c: char| !c.is_ascii_digit()) {
            (&s[..pos], &s[pos..])
        } else {
            return Err(ParseError::InvalidFormat(s.to_string()));
        };

        let num: u32 = num_str.parse()?;

        let multiplier = match unit.trim() {
            "D" | "DAY" | "DAYS" => 1,
            "W" | "WEEK" | "WEEKS" => 7,
            _ => return Err(ParseError::InvalidUnit(unit.to_string())),
        };

        let days = num * multiplier;
        if days == 0 {
            return Err(ParseError::Zero);
        }

        Ok(LoanPeriod(days))
    }
}

impl fmt::Display for LoanPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days() {
        assert_eq!("14".parse::<LoanPeriod>().unwrap().days(), 14);
        assert_eq!("14d".parse::<LoanPeriod>().unwrap().days(), 14);
        assert_eq!("7 days".parse::<LoanPeriod>().unwrap().days(), 7);
    }

    #[test]
    fn test_parse_weeks() {
        assert_eq!("2w".parse::<LoanPeriod>().unwrap().days(), 14);
        assert_eq!("1week".parse::<LoanPeriod>().unwrap().days(), 7);
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert!(matches!("0".parse::<LoanPeriod>(), Err(ParseError::Zero)));
        assert!(matches!("0w".parse::<LoanPeriod>(), Err(ParseError::Zero)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("fortnight".parse::<LoanPeriod>().is_err());
        assert!("14y".parse::<LoanPeriod>().is_err());
    }

    #[test]
    fn test_deserialize_string() {
        let json = r#"{"period": "2w"}"#;
        #[derive(Deserialize)]
        struct TestStruct {
            period: LoanPeriod,
        }
        let parsed: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.period.days(), 14);
    }

    #[test]
    fn test_deserialize_number() {
        let json = r#"{"period": 30}"#;
        #[derive(Deserialize)]
        struct TestStruct {
            period: LoanPeriod,
        }
        let parsed: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.period.days(), 30);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LoanPeriod(14)), "14d");
        assert_eq!(format!("{}", LoanPeriod::default()), "14d");
    }
}
