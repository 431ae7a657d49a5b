//! Controller configuration.
//!
//! Defaults are compiled in; [`ControllerConfig::parse`] overrides them from
//! a plain `key = value` text so firmware and host builds share one format:
//!
//! ```text
//! # thresholds in seconds
//! short_press = 0.1
//! long_press = 1.2
//! warm_flash_count = 6
//! unrecognized = drop
//! ```

use core::fmt;

use embassy_time::Duration;
use heapless::String;

use crate::classifier::{PressThresholds, UnrecognizedPolicy};
use crate::message::StateId;
use crate::pattern::Flash;

/// Longest key kept verbatim in a [`ConfigError`].
pub const KEY_CAPACITY: usize = 24;

pub type KeyName = String<KEY_CAPACITY>;

/// Animation and polling timings of every state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTimings {
    /// Yellow blink shown on every poll tick of `Start`
    pub start_blink: Flash,
    /// Warm-up animation
    pub warm_flash: Flash,
    /// Poll interval of `Ready`
    pub ready_poll: Duration,
    /// Capture animation
    pub snap_flash: Flash,
}

impl StateTimings {
    pub const DEFAULT: Self = Self {
        start_blink: Flash::new(Duration::from_millis(200), Duration::from_millis(0), 1),
        warm_flash: Flash::new(Duration::from_millis(350), Duration::from_millis(150), 6),
        ready_poll: Duration::from_millis(300),
        snap_flash: Flash::new(Duration::from_millis(150), Duration::from_millis(150), 5),
    };
}

impl Default for StateTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub thresholds: PressThresholds,
    pub timings: StateTimings,
    /// Pause before recovering from an unhandled transition
    pub fallback_grace: Duration,
    /// All-dark pause before the first state is entered
    pub startup_delay: Duration,
    pub unrecognized: UnrecognizedPolicy,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        thresholds: PressThresholds::DEFAULT,
        timings: StateTimings::DEFAULT,
        fallback_grace: Duration::from_secs(2),
        startup_delay: Duration::from_secs(1),
        unrecognized: UnrecognizedPolicy::Drop,
    };

    /// Parse `key = value` lines on top of the defaults.
    ///
    /// Blank lines and `#` comments are ignored. Durations are given in
    /// (fractional) seconds, counts as integers.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut config = Self::DEFAULT;
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split_once('#').map_or(raw, |(before, _)| before).trim();
            if content.is_empty() {
                continue;
            }
            let Some((key, value)) = content.split_once('=') else {
                return Err(ConfigError::MalformedLine { line });
            };
            config.apply(line, key.trim(), value.trim())?;
        }
        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, line: usize, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            line,
            key: key_name(key),
        };
        let seconds = || parse_seconds(value).ok_or_else(invalid);
        let count = || value.parse::<u16>().map_err(|_| invalid());

        let timings = &mut self.timings;
        match key {
            "short_press" => self.thresholds.short = seconds()?,
            "long_press" => self.thresholds.long = seconds()?,
            "start_flash_on" => timings.start_blink.on = seconds()?,
            "start_flash_off" => timings.start_blink.off = seconds()?,
            "warm_flash_on" => timings.warm_flash.on = seconds()?,
            "warm_flash_off" => timings.warm_flash.off = seconds()?,
            "warm_flash_count" => timings.warm_flash.repeat = count()?,
            "ready_poll" => timings.ready_poll = seconds()?,
            "snap_flash_on" => timings.snap_flash.on = seconds()?,
            "snap_flash_off" => timings.snap_flash.off = seconds()?,
            "snap_flash_count" => timings.snap_flash.repeat = count()?,
            "fallback_grace" => self.fallback_grace = seconds()?,
            "startup_delay" => self.startup_delay = seconds()?,
            "unrecognized" => {
                self.unrecognized = match value {
                    "drop" => UnrecognizedPolicy::Drop,
                    "forward" => UnrecognizedPolicy::Forward,
                    _ => return Err(invalid()),
                };
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    line,
                    key: key_name(key),
                });
            }
        }
        Ok(())
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thresholds.short >= self.thresholds.long {
            return Err(ConfigError::InvalidThresholds);
        }
        let blink = self.timings.start_blink;
        let silent = blink.on.as_ticks() == 0 && blink.off.as_ticks() == 0;
        if blink.repeat == 0 || silent {
            return Err(ConfigError::BusyPoll(StateId::Start));
        }
        if self.timings.ready_poll.as_ticks() == 0 {
            return Err(ConfigError::BusyPoll(StateId::Ready));
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Error returned when a configuration cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Line is neither blank, a comment nor `key = value`
    MalformedLine { line: usize },
    /// Key is not recognized
    UnknownKey { line: usize, key: KeyName },
    /// Value cannot be parsed for its key
    InvalidValue { line: usize, key: KeyName },
    /// Short-press threshold is not below the long-press threshold
    InvalidThresholds,
    /// Waiting state would poll without pausing
    BusyPoll(StateId),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line } => write!(f, "line {line}: expected `key = value`"),
            Self::UnknownKey { line, key } => write!(f, "line {line}: unknown key `{key}`"),
            Self::InvalidValue { line, key } => write!(f, "line {line}: invalid value for `{key}`"),
            Self::InvalidThresholds => {
                f.write_str("short_press threshold must be below long_press threshold")
            }
            Self::BusyPoll(state) => write!(f, "{state} state would poll without pausing"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Parse non-negative fractional seconds, rounded to the microsecond
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn parse_seconds(value: &str) -> Option<Duration> {
    let seconds = value.parse::<f64>().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    let micros = libm::round(seconds * 1_000_000.0);
    if micros > u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_micros(micros as u64))
}

/// Copy a key into a fixed-capacity string, truncating overlong keys
fn key_name(key: &str) -> KeyName {
    let mut name = KeyName::new();
    for ch in key.chars() {
        if name.push(ch).is_err() {
            break;
        }
    }
    name
}
