//! Round-timing tunables.

use time::Duration;
use tracing::warn;

/// Env var overriding the round limit, in milliseconds.
const ROUND_LIMIT_ENV: &str = "MISFORTUNE_ROUND_LIMIT_MS";
/// Env var overriding the grace window, in milliseconds.
const GRACE_ENV: &str = "MISFORTUNE_GRACE_MS";

/// Timing configuration for the round timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wall-clock budget the player has to answer a round.
    pub round_limit: Duration,
    /// Extra allowance absorbing network and processing latency, so a
    /// guess sent at the buzzer is not voided by transit time.
    pub grace: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_limit: Duration::seconds(30),
            grace: Duration::seconds(2),
        }
    }
}

impl GameConfig {
    /// Default config with env overrides applied where present and valid.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(limit) = read_millis(ROUND_LIMIT_ENV) {
            config.round_limit = limit;
        }
        if let Some(grace) = read_millis(GRACE_ENV) {
            config.grace = grace;
        }
        config
    }

    /// Total window after which a resolve counts as a timeout.
    pub fn deadline(&self) -> Duration {
        self.round_limit + self.grace
    }
}

fn read_millis(var: &str) -> Option<Duration> {
    let raw = std::env::var(var).ok()?;
    match raw.parse::<i64>() {
        Ok(ms) if ms > 0 => Some(Duration::milliseconds(ms)),
        _ => {
            warn!(var, %raw, "ignoring unparseable duration override");
            None
        }
    }
}
