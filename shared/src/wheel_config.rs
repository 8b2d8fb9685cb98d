use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::constants::*;

/// One prize zone on the wheel
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelSegment {
    pub id: u32,
    pub label: String,
    pub multiplier: f64,
}

impl WheelSegment {
    pub fn new(id: u32, label: impl Into<String>, multiplier: f64) -> Self {
        Self {
            id,
            label: label.into(),
            multiplier,
        }
    }
}

/// Static configuration read once at startup. Missing JSON fields take the
/// reference values.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    pub segments: Vec<WheelSegment>,
    pub initial_balance: f64,
    pub initial_bet: i32,
    pub min_bet: i32,
    pub max_bet: i32,
    pub spin_duration_ms: u32,
    pub min_full_turns: u32,
    pub max_full_turns: u32,
}

#[derive(Debug, Error)]
pub enum WheelConfigError {
    #[error("wheel needs at least one segment")]
    NoSegments,
    #[error("segment {label:?} has invalid multiplier {multiplier}")]
    InvalidMultiplier { label: String, multiplier: f64 },
    #[error("invalid bet bounds {min}..={max}")]
    InvalidBetBounds { min: i32, max: i32 },
    #[error("initial bet {bet} outside {min}..={max}")]
    InitialBetOutOfBounds { bet: i32, min: i32, max: i32 },
    #[error("invalid initial balance {0}")]
    InvalidBalance(f64),
    #[error("invalid full turn range {min}..={max}")]
    InvalidTurnRange { min: u32, max: u32 },
    #[error("malformed wheel config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS
                .iter()
                .map(|&(id, label, multiplier)| WheelSegment::new(id, label, multiplier))
                .collect(),
            initial_balance: INITIAL_BALANCE,
            initial_bet: INITIAL_BET,
            min_bet: MIN_BET,
            max_bet: MAX_BET,
            spin_duration_ms: SPIN_DURATION_MS,
            min_full_turns: MIN_FULL_TURNS,
            max_full_turns: MAX_FULL_TURNS,
        }
    }
}

impl WheelConfig {
    /// Parses and validates a JSON override.
    pub fn from_json(json: &str) -> Result<Self, WheelConfigError> {
        let config: WheelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WheelConfigError> {
        if self.segments.is_empty() {
            return Err(WheelConfigError::NoSegments);
        }

        if let Some(bad) = self
            .segments
            .iter()
            .find(|s| !s.multiplier.is_finite() || s.multiplier <= 0.0)
        {
            return Err(WheelConfigError::InvalidMultiplier {
                label: bad.label.clone(),
                multiplier: bad.multiplier,
            });
        }

        if self.min_bet < 1 || self.min_bet > self.max_bet {
            return Err(WheelConfigError::InvalidBetBounds {
                min: self.min_bet,
                max: self.max_bet,
            });
        }

        if !(self.min_bet..=self.max_bet).contains(&self.initial_bet) {
            return Err(WheelConfigError::InitialBetOutOfBounds {
                bet: self.initial_bet,
                min: self.min_bet,
                max: self.max_bet,
            });
        }

        if !self.initial_balance.is_finite() || self.initial_balance < 0.0 {
            return Err(WheelConfigError::InvalidBalance(self.initial_balance));
        }

        if self.min_full_turns > self.max_full_turns {
            return Err(WheelConfigError::InvalidTurnRange {
                min: self.min_full_turns,
                max: self.max_full_turns,
            });
        }

        Ok(())
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Angular width of one segment in degrees.
    pub fn segment_width(&self) -> f64 {
        DEGREES_PER_TURN / self.segments.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_wheel() {
        let config = WheelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.segment_count(), 6);
        assert_eq!(config.segments[0], WheelSegment::new(1, "Face 1", 2.0));
        assert_eq!(config.segments[5].label, "Center Face");
        assert_eq!(config.segments[5].multiplier, 5.0);
        assert_eq!(config.initial_balance, 100.0);
        assert_eq!(config.initial_bet, 1);
        assert_eq!((config.min_bet, config.max_bet), (1, 100));
        assert_eq!(config.spin_duration_ms, 8000);
        assert_eq!((config.min_full_turns, config.max_full_turns), (3, 5));
        assert_eq!(config.segment_width(), 60.0);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = WheelConfig::from_json(r#"{ "initial_balance": 250.5 }"#).unwrap();
        assert_eq!(config.initial_balance, 250.5);
        assert_eq!(config.segment_count(), 6);
        assert_eq!(config.max_bet, 100);
    }

    #[test]
    fn test_from_json_custom_segments() {
        let json = r#"{
            "segments": [
                { "id": 1, "label": "Low", "multiplier": 0.5 },
                { "id": 2, "label": "High", "multiplier": 4 }
            ]
        }"#;
        let config = WheelConfig::from_json(json).unwrap();
        assert_eq!(config.segment_count(), 2);
        assert_eq!(config.segment_width(), 180.0);
        assert_eq!(config.segments[1].multiplier, 4.0);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = WheelConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, WheelConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_empty_segments() {
        let err = WheelConfig::from_json(r#"{ "segments": [] }"#).unwrap_err();
        assert!(matches!(err, WheelConfigError::NoSegments));
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let mut config = WheelConfig::default();
        config.segments[2].multiplier = 0.0;
        match config.validate() {
            Err(WheelConfigError::InvalidMultiplier { label, .. }) => assert_eq!(label, "Face 3"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_bounds() {
        let mut config = WheelConfig::default();
        config.min_bet = 0;
        assert!(matches!(config.validate(), Err(WheelConfigError::InvalidBetBounds { .. })));

        let mut config = WheelConfig::default();
        config.initial_bet = 101;
        assert!(matches!(
            config.validate(),
            Err(WheelConfigError::InitialBetOutOfBounds { bet: 101, .. })
        ));

        let mut config = WheelConfig::default();
        config.initial_balance = -1.0;
        assert!(matches!(config.validate(), Err(WheelConfigError::InvalidBalance(_))));

        let mut config = WheelConfig::default();
        config.min_full_turns = 6;
        assert!(matches!(config.validate(), Err(WheelConfigError::InvalidTurnRange { min: 6, max: 5 })));
    }
}
