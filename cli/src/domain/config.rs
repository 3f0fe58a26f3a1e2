//! Configuration values passed explicitly into the workflow and the
//! AWS client factory.
//!
//! Pure data only: no I/O, no async, no environment access.

use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;
pub const DEFAULT_SETTLE_DELAY_SECS: u64 = 7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Timing of the readiness poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionSettings {
    /// Sleep between status queries while the instance is pending.
    pub poll_interval: Duration,
    /// Sleep after the instance reports running, before the address is
    /// handed out, so the web server has time to come up.
    pub settle_delay: Duration,
    /// Overall bound on the time spent waiting for the instance to run.
    pub timeout: Duration,
}

impl Default for ProvisionSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            settle_delay: Duration::from_secs(DEFAULT_SETTLE_DELAY_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Where to find the AWS account. `None` falls back to the SDK's default
/// provider chain for that setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
}
