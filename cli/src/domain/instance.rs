//! Instance launch parameters and status classification.
//!
//! Pure functions only: no I/O, no async.

use serde::Serialize;

/// Instance size requested for every launch.
pub const INSTANCE_TYPE: &str = "t2.micro";

/// Tag key and value applied to a freshly launched instance.
pub const NAME_TAG_KEY: &str = "Name";
pub const NAME_TAG_VALUE: &str = "WordPress";

/// EC2 state code for `pending`.
pub const STATE_PENDING: i32 = 0;
/// EC2 state code for `running`.
pub const STATE_RUNNING: i32 = 16;

/// Scheme prefixed to the public DNS name of a running instance.
pub const URL_SCHEME: &str = "http://";

/// Status category of an observed instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceStatus {
    Pending,
    Running,
    /// Any state other than pending or running, with its raw code.
    Failed(i32),
}

impl InstanceStatus {
    /// Classify a raw EC2 state code.
    ///
    /// The high byte of the code is reserved for internal use by EC2, so
    /// only the low byte is compared.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code & 0xff {
            STATE_PENDING => Self::Pending,
            STATE_RUNNING => Self::Running,
            _ => Self::Failed(code),
        }
    }
}

/// Human-readable name of an EC2 state code.
#[must_use]
pub fn state_name(code: i32) -> &'static str {
    match code & 0xff {
        0 => "pending",
        16 => "running",
        32 => "shutting-down",
        48 => "terminated",
        64 => "stopping",
        80 => "stopped",
        _ => "unknown",
    }
}

/// One observation of an instance from a status query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceObservation {
    pub state_code: Option<i32>,
    pub public_dns_name: Option<String>,
}

impl InstanceObservation {
    /// Status of this observation. An instance with no reported state yet is
    /// still pending.
    #[must_use]
    pub fn status(&self) -> InstanceStatus {
        self.state_code
            .map_or(InstanceStatus::Pending, InstanceStatus::from_code)
    }

    /// The public DNS name, ignoring the empty string EC2 reports before the
    /// address is assigned.
    #[must_use]
    pub fn public_address(&self) -> Option<&str> {
        self.public_dns_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Build the browser URL for a public DNS name.
#[must_use]
pub fn public_url(dns_name: &str) -> String {
    format!("{URL_SCHEME}{dns_name}")
}

/// Result of a completed provisioning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub security_group_id: String,
    pub instance_id: String,
    pub url: String,
    /// `false` when the name tag could not be applied.
    pub tagged: bool,
}
