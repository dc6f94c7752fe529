//! Random request throttling
//!
//! The real upstream rate-limits unpredictably: once triggered, it keeps
//! answering 429 for a while. The mock reproduces that with a
//! probabilistic draw per request that opens a fixed throttle window.
//! Disabled by default (probability 0).

use std::sync::Mutex;
use std::time::{Duration, Instant};

use rand::Rng;

/// Throttle tuning, loaded from the environment
#[derive(Debug, Clone)]
pub struct ThrottleConfig {
    /// Chance in [0, 1] that a request opens a throttle window
    pub probability: f64,
    /// How long an opened window lasts
    pub window: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            probability: 0.0,
            window: Duration::from_secs(10),
        }
    }
}

impl ThrottleConfig {
    /// Load from `MOCK_THROTTLE_PROBABILITY` and
    /// `MOCK_THROTTLE_WINDOW_SECS`; unset variables keep the defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let probability = std::env::var("MOCK_THROTTLE_PROBABILITY")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .map(|p| p.clamp(0.0, 1.0))
            .unwrap_or(defaults.probability);
        let window = std::env::var("MOCK_THROTTLE_WINDOW_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.window);

        Self { probability, window }
    }
}

/// Tracks whether requests are currently throttled
pub struct Throttle {
    config: ThrottleConfig,
    window_until: Mutex<Option<Instant>>,
}

impl Throttle {
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            config,
            window_until: Mutex::new(None),
        }
    }

    /// Check the current request; true means answer 429
    pub fn should_throttle(&self) -> bool {
        let mut until = self.window_until.lock().unwrap();

        if let Some(deadline) = *until {
            if Instant::now() < deadline {
                return true;
            }
            *until = None;
        }

        if self.config.probability > 0.0 && rand::thread_rng().gen_bool(self.config.probability) {
            *until = Some(Instant::now() + self.config.window);
            return true;
        }

        false
    }
}

#[cfg(test)]
impl Throttle {
    fn force_window(&self, duration: Duration) {
        *self.window_until.lock().unwrap() = Some(Instant::now() + duration);
    }
}
