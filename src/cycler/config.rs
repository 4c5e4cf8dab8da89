//! Timing configuration for a title cycler.

use crate::error::ConfigError;
use std::time::Duration;

/// Default delay between typed characters.
pub const DEFAULT_TYPE_DELAY: Duration = Duration::from_millis(50);

/// Default time a fully typed title stays on screen.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(2000);

/// How long each title is held once fully typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoldPolicy {
    /// Every title is held for the same duration.
    Uniform(Duration),
    /// One duration per title, in title order.
    PerTitle(Vec<Duration>),
}

impl HoldPolicy {
    /// Hold duration for the title at `index`.
    pub fn for_index(&self, index: usize) -> Duration {
        match self {
            Self::Uniform(hold) => *hold,
            Self::PerTitle(holds) => holds[index % holds.len()],
        }
    }

    /// Check the policy against a title count.
    fn validate(&self, title_count: usize) -> Result<(), ConfigError> {
        match self {
            Self::Uniform(hold) => positive_hold(0, *hold),
            Self::PerTitle(holds) => {
                if holds.len() != title_count {
                    return Err(ConfigError::HoldCountMismatch {
                        expected: title_count,
                        actual: holds.len(),
                    });
                }
                holds
                    .iter()
                    .enumerate()
                    .try_for_each(|(index, hold)| positive_hold(index, *hold))
            }
        }
    }
}

impl Default for HoldPolicy {
    fn default() -> Self {
        Self::Uniform(DEFAULT_HOLD)
    }
}

fn positive_hold(index: usize, hold: Duration) -> Result<(), ConfigError> {
    if hold.is_zero() {
        Err(ConfigError::NonPositiveHold { index, millis: 0 })
    } else {
        Ok(())
    }
}

/// Timing configuration for a [`TitleCycler`](super::TitleCycler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclerConfig {
    /// Delay between typed characters. Zero reveals instantly.
    pub type_delay: Duration,
    /// Delay between erased characters.
    pub erase_delay: Duration,
    /// Hold duration per title.
    pub hold: HoldPolicy,
    /// Whether to start over after the last title.
    pub looping: bool,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            type_delay: DEFAULT_TYPE_DELAY,
            erase_delay: DEFAULT_TYPE_DELAY,
            hold: HoldPolicy::default(),
            looping: true,
        }
    }
}

impl CyclerConfig {
    /// Uniform configuration with the same delay for typing and erasing.
    pub fn new(char_delay: Duration, hold: Duration) -> Self {
        Self {
            type_delay: char_delay,
            erase_delay: char_delay,
            hold: HoldPolicy::Uniform(hold),
            looping: true,
        }
    }

    /// Build a configuration from signed millisecond values, as they arrive
    /// from the command line or a data file.
    ///
    /// `erase_ms` defaults to `type_ms` when `None`.
    ///
    /// # Errors
    ///
    /// Rejects negative delays and non-positive holds.
    pub fn from_millis(type_ms: i64, erase_ms: Option<i64>, hold_ms: i64) -> Result<Self, ConfigError> {
        let type_delay = delay_from_millis("type", type_ms)?;
        let erase_delay = match erase_ms {
            Some(ms) => delay_from_millis("erase", ms)?,
            None => type_delay,
        };
        if hold_ms <= 0 {
            return Err(ConfigError::NonPositiveHold { index: 0, millis: hold_ms });
        }
        Ok(Self {
            type_delay,
            erase_delay,
            hold: HoldPolicy::Uniform(Duration::from_millis(hold_ms.unsigned_abs())),
            looping: true,
        })
    }

    /// Set the erase delay (builder pattern).
    #[must_use]
    pub const fn with_erase_delay(mut self, delay: Duration) -> Self {
        self.erase_delay = delay;
        self
    }

    /// Set the hold policy (builder pattern).
    #[must_use]
    pub fn with_hold(mut self, hold: HoldPolicy) -> Self {
        self.hold = hold;
        self
    }

    /// Set looping (builder pattern).
    #[must_use]
    pub const fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Validate against a title count.
    pub(crate) fn validate(&self, title_count: usize) -> Result<(), ConfigError> {
        self.hold.validate(title_count)
    }
}

fn delay_from_millis(which: &'static str, millis: i64) -> Result<Duration, ConfigError> {
    if millis < 0 {
        return Err(ConfigError::NegativeDelay { which, millis });
    }
    Ok(Duration::from_millis(millis.unsigned_abs()))
}
