use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::quiz::collector::DEFAULT_ANSWER_TIMEOUT;
use crate::quiz::scoring::{BonusPolicy, DEFAULT_BONUS_WINDOW};

pub const ANSWER_TIMEOUT_VAR: &str = "QUIZ_ANSWER_TIMEOUT_SECS";
pub const BONUS_WINDOW_VAR: &str = "QUIZ_BONUS_WINDOW_SECS";
pub const SPEED_BONUS_VAR: &str = "QUIZ_SPEED_BONUS";

/// Upper bound for any configured number of seconds (one day).
pub const MAX_SECONDS: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, at most one day, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },
    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// Tunables for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub answer_timeout: Duration,
    pub bonus_window: Duration,
    pub bonus_policy: BonusPolicy,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            answer_timeout: DEFAULT_ANSWER_TIMEOUT,
            bonus_window: DEFAULT_BONUS_WINDOW,
            bonus_policy: BonusPolicy::default(),
        }
    }
}

impl QuizConfig {
    /// Reads the process environment. Call `dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let answer_timeout = match lookup(ANSWER_TIMEOUT_VAR) {
            Some(value) => parse_seconds(ANSWER_TIMEOUT_VAR, &value)?,
            None => defaults.answer_timeout,
        };
        let bonus_window = match lookup(BONUS_WINDOW_VAR) {
            Some(value) => parse_seconds(BONUS_WINDOW_VAR, &value)?,
            None => defaults.bonus_window,
        };
        let bonus_policy = match lookup(SPEED_BONUS_VAR) {
            Some(value) => match parse_flag(SPEED_BONUS_VAR, &value)? {
                true => BonusPolicy::ExtraPoint,
                false => BonusPolicy::BaseOnly,
            },
            None => defaults.bonus_policy,
        };

        let config = Self {
            answer_timeout,
            bonus_window,
            bonus_policy,
        };
        debug!("Loaded quiz config: {:?}", config);
        Ok(config)
    }
}

fn parse_seconds(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidSeconds {
        var,
        value: value.to_string(),
    };
    let secs = value.trim().parse::<f64>().map_err(|_| invalid())?;
    if secs.is_nan() || secs <= 0.0 {
        return Err(invalid());
    }
    Duration::try_from_secs_f64(secs)
        .ok()
        .filter(|duration| *duration <= MAX_SECONDS)
        .ok_or_else(invalid)
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
