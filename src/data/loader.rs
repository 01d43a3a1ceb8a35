//! Measurement Loader Module
//! Turns raw command-line tokens into typed growth readings.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

pub const PLANT_FLAG: &str = "--plant";
pub const HEIGHT_FLAG: &str = "--height";
pub const LEAF_COUNT_FLAG: &str = "--leaf_count";
pub const DRY_WEIGHT_FLAG: &str = "--dry_weight";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("missing required argument: {0}")]
    MissingArgument(String),
    #[error("invalid value '{token}' for {flag}: {reason}")]
    ArgumentParse {
        flag: &'static str,
        token: String,
        reason: String,
    },
}

/// Untyped measurement tokens exactly as they were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMeasurements {
    pub plant: Option<String>,
    pub height: Vec<String>,
    pub leaf_count: Vec<String>,
    pub dry_weight: Vec<String>,
}

/// Typed readings that have not been checked for equal lengths yet.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthCandidate {
    pub plant_name: String,
    pub heights: Vec<f64>,
    pub leaf_counts: Vec<i64>,
    pub dry_weights: Vec<f64>,
}

/// Parses raw measurement tokens into their declared numeric types.
pub struct DataLoader;

impl DataLoader {
    /// Parse every sequence, stopping at the first absent value or bad token.
    pub fn load(raw: &RawMeasurements) -> Result<GrowthCandidate, InputError> {
        let plant_name = raw
            .plant
            .clone()
            .ok_or_else(|| InputError::MissingArgument(PLANT_FLAG.to_string()))?;

        Ok(GrowthCandidate {
            plant_name,
            heights: Self::parse_readings(HEIGHT_FLAG, &raw.height)?,
            leaf_counts: Self::parse_counts(LEAF_COUNT_FLAG, &raw.leaf_count)?,
            dry_weights: Self::parse_readings(DRY_WEIGHT_FLAG, &raw.dry_weight)?,
        })
    }

    /// Parse finite floating point readings.
    pub fn parse_readings(flag: &'static str, tokens: &[String]) -> Result<Vec<f64>, InputError> {
        let values: Vec<f64> = Self::parse_tokens(flag, tokens)?;

        // `f64::from_str` accepts "nan" and "inf", neither of which can sit on an axis
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(InputError::ArgumentParse {
                flag,
                token: tokens[pos].clone(),
                reason: "value must be a finite number".to_string(),
            });
        }

        Ok(values)
    }

    /// Parse whole-number counts.
    pub fn parse_counts(flag: &'static str, tokens: &[String]) -> Result<Vec<i64>, InputError> {
        Self::parse_tokens(flag, tokens)
    }

    fn parse_tokens<T>(flag: &'static str, tokens: &[String]) -> Result<Vec<T>, InputError>
    where
        T: FromStr,
        T::Err: Display,
    {
        if tokens.is_empty() {
            return Err(InputError::MissingArgument(flag.to_string()));
        }

        tokens
            .iter()
            .map(|token| {
                token
                    .trim()
                    .parse::<T>()
                    .map_err(|e| InputError::ArgumentParse {
                        flag,
                        token: token.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect()
    }
}
