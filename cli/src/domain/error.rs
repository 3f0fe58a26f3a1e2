//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `std::error::Error` and convert to `anyhow::Error`
//! via the `?` operator. Messages omit their source; callers print the chain
//! with `{:#}`.

use std::fmt;

use thiserror::Error;

// ── Remote API errors ─────────────────────────────────────────────────────────

/// A failed remote API call, reduced to the parts the workflow inspects.
///
/// `code` carries the service error code (e.g. `InvalidGroup.NotFound`) when
/// the failure came back from the service rather than from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: Option<String>,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A service-side failure with an error code.
    #[must_use]
    pub fn service(code: &str, message: impl Into<String>) -> Self {
        Self::new(Some(code.to_owned()), message)
    }

    /// A transport-level failure (no service error code).
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    /// Returns `true` when the service reported exactly `code`.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ApiError {}

// ── Provisioning errors ───────────────────────────────────────────────────────

/// Errors that end the provisioning workflow.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("You must supply an AMI. Pass --ami <IMAGE_ID> or set WPLAUNCH_AMI.")]
    MissingImage,

    #[error("AWS configuration error: {0}")]
    Configuration(String),

    #[error("failed to look up security group '{name}'")]
    SecurityGroupLookup {
        name: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to create security group '{name}'")]
    SecurityGroupCreate {
        name: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to open port 80 on security group {group_id}")]
    SecurityGroupIngress {
        group_id: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to create instance")]
    InstanceLaunch(#[source] ApiError),

    #[error("failed to query instance {instance_id}")]
    InstanceQuery {
        instance_id: String,
        #[source]
        source: ApiError,
    },

    #[error("instance {instance_id} entered state '{state}' (code {code}) instead of running")]
    InstanceFailed {
        instance_id: String,
        code: i32,
        state: &'static str,
    },

    #[error("instance {instance_id} is running but has no public DNS name")]
    NoPublicAddress { instance_id: String },

    #[error("instance {instance_id} was still pending after {waited_secs}s")]
    TimedOut { instance_id: String, waited_secs: u64 },

    #[error("Provisioning cancelled.")]
    Cancelled,

    #[error("cannot open a browser on unsupported platform '{0}'")]
    UnsupportedPlatform(String),
}

impl ProvisionError {
    /// Stable machine-readable code used in `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingImage => "MISSING_IMAGE",
            Self::Configuration(_) => "AWS_CONFIGURATION",
            Self::SecurityGroupLookup { .. } => "SECURITY_GROUP_LOOKUP",
            Self::SecurityGroupCreate { .. } => "SECURITY_GROUP_CREATE",
            Self::SecurityGroupIngress { .. } => "SECURITY_GROUP_INGRESS",
            Self::InstanceLaunch(_) => "INSTANCE_LAUNCH",
            Self::InstanceQuery { .. } => "INSTANCE_QUERY",
            Self::InstanceFailed { .. } => "INSTANCE_FAILED",
            Self::NoPublicAddress { .. } => "NO_PUBLIC_ADDRESS",
            Self::TimedOut { .. } => "TIMED_OUT",
            Self::Cancelled => "CANCELLED",
            Self::UnsupportedPlatform(_) => "UNSUPPORTED_PLATFORM",
        }
    }
}
