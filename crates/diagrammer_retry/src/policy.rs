//! Retry configuration values.

use derive_getters::Getters;
use diagrammer_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_retry2::strategy::{FixedInterval, jitter};

/// Pause between consecutive attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DelayPolicy {
    /// Same pause before every retry
    Fixed {
        /// Pause in seconds
        #[serde(default = "default_delay_secs")]
        delay_secs: f64,
    },
    /// Doubling pause bounded by `min_secs` and `max_secs`
    Exponential {
        /// First pause in seconds
        min_secs: f64,
        /// Longest pause in seconds
        max_secs: f64,
        /// Randomize each pause to spread concurrent retries
        #[serde(default)]
        jitter: bool,
    },
}

fn default_delay_secs() -> f64 {
    2.0
}

impl Default for DelayPolicy {
    fn default() -> Self {
        DelayPolicy::Fixed {
            delay_secs: default_delay_secs(),
        }
    }
}

impl DelayPolicy {
    /// Fixed pause.
    pub fn fixed(delay: Duration) -> Self {
        DelayPolicy::Fixed {
            delay_secs: delay.as_secs_f64(),
        }
    }

    /// Pauses before attempts 2..=max_attempts.
    pub fn delays(&self, retries: usize) -> Vec<Duration> {
        match self {
            DelayPolicy::Fixed { delay_secs } => {
                FixedInterval::new(Duration::from_secs_f64(*delay_secs))
                    .take(retries)
                    .collect()
            }
            DelayPolicy::Exponential {
                min_secs,
                max_secs,
                jitter: use_jitter,
            } => (0..retries)
                .map(|n| {
                    let secs = (min_secs * 2f64.powi(n as i32)).min(*max_secs);
                    let delay = Duration::from_secs_f64(secs);
                    if *use_jitter { jitter(delay) } else { delay }
                })
                .collect(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            DelayPolicy::Fixed { delay_secs } if !(*delay_secs > 0.0 && delay_secs.is_finite()) => {
                Err(ConfigError::new(format!(
                    "retry.delay_secs must be positive, got {}",
                    delay_secs
                )))
            }
            DelayPolicy::Exponential { min_secs, max_secs, .. }
                if !(*min_secs > 0.0 && min_secs <= max_secs && max_secs.is_finite()) =>
            {
                Err(ConfigError::new(format!(
                    "retry exponential delay needs 0 < min_secs <= max_secs, got {} and {}",
                    min_secs, max_secs
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Bounded attempts with a monotonically non-decreasing per-attempt timeout.
///
/// # Examples
///
/// ```
/// use diagrammer_retry::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(*policy.max_attempts(), 3);
/// assert_eq!(policy.timeout_for(1), Duration::from_secs(60));
/// assert_eq!(policy.timeout_for(2), Duration::from_secs(90));
/// assert_eq!(policy.timeout_for(3), Duration::from_secs(120));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts including the first one
    max_attempts: u32,
    /// Timeout of the first attempt, in seconds
    initial_timeout_secs: f64,
    /// Ceiling for the per-attempt timeout, in seconds
    max_timeout_secs: f64,
    /// Growth factor applied to the timeout after each failure
    timeout_multiplier: f64,
    /// Pause between attempts
    delay: DelayPolicy,
    /// Optional bound on the whole generation, in seconds
    overall_deadline_secs: Option<f64>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_timeout_secs: 60.0,
            max_timeout_secs: 120.0,
            timeout_multiplier: 1.5,
            delay: DelayPolicy::default(),
            overall_deadline_secs: None,
        }
    }
}

impl RetryPolicy {
    /// Creates a new retry policy builder.
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::default()
    }

    /// Timeout for a 1-based attempt number.
    ///
    /// `min(initial * multiplier^(attempt-1), max)`.
    pub fn timeout_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let secs = (self.initial_timeout_secs * self.timeout_multiplier.powi(exponent))
            .min(self.max_timeout_secs);
        Duration::from_secs_f64(secs)
    }

    /// Inter-attempt pauses for this policy.
    pub fn delays(&self) -> Vec<Duration> {
        self.delay
            .delays(self.max_attempts.saturating_sub(1) as usize)
    }

    /// Overall deadline, if configured.
    pub fn overall_deadline(&self) -> Option<Duration> {
        self.overall_deadline_secs.map(Duration::from_secs_f64)
    }

    /// Check the invariants the orchestrator relies on.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::new("retry.max_attempts must be at least 1"));
        }
        if !(self.initial_timeout_secs > 0.0 && self.initial_timeout_secs.is_finite()) {
            return Err(ConfigError::new(format!(
                "retry.initial_timeout_secs must be positive, got {}",
                self.initial_timeout_secs
            )));
        }
        if !(self.max_timeout_secs.is_finite() && self.max_timeout_secs >= self.initial_timeout_secs) {
            return Err(ConfigError::new(format!(
                "retry.max_timeout_secs ({}) must not be below retry.initial_timeout_secs ({})",
                self.max_timeout_secs, self.initial_timeout_secs
            )));
        }
        if !(self.timeout_multiplier >= 1.0 && self.timeout_multiplier.is_finite()) {
            return Err(ConfigError::new(format!(
                "retry.timeout_multiplier must be at least 1.0, got {}",
                self.timeout_multiplier
            )));
        }
        if let Some(deadline) = self.overall_deadline_secs {
            if !(deadline > 0.0 && deadline.is_finite()) {
                return Err(ConfigError::new(format!(
                    "retry.overall_deadline_secs must be positive, got {}",
                    deadline
                )));
            }
        }
        self.delay.validate()
    }
}
