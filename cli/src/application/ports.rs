//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::domain::{ApiError, IngressRule, InstanceObservation};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Launch parameters for creating a new instance.
pub struct InstanceSpec<'a> {
    /// Machine image to boot, e.g. `"ami-0abcdef1234567890"`.
    pub image_id: &'a str,
    /// Instance size, e.g. `"t2.micro"`.
    pub instance_type: &'a str,
    /// Security group the instance is attached to.
    pub security_group_id: &'a str,
}

/// A key/value tag applied to a cloud resource.
pub struct ResourceTag<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

// ── Cloud API Port Traits ─────────────────────────────────────────────────────

/// Security group operations: lookup, create, open ports.
#[allow(async_fn_in_trait)]
pub trait SecurityGroupApi {
    /// Look up security groups by name and return their ids.
    ///
    /// Depending on the backend an unknown name either yields an empty list
    /// or an error carrying a not-found code; callers must handle both.
    async fn describe_security_groups(&self, name: &str) -> Result<Vec<String>, ApiError>;
    /// Create a security group and return its id.
    async fn create_security_group(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, ApiError>;
    /// Add inbound permissions to an existing security group.
    async fn authorize_ingress(
        &self,
        group_id: &str,
        rules: &[IngressRule],
    ) -> Result<(), ApiError>;
}

/// Instance operations: launch, tag, observe.
#[allow(async_fn_in_trait)]
pub trait InstanceApi {
    /// Launch exactly one instance and return its id.
    async fn run_instance(&self, spec: &InstanceSpec<'_>) -> Result<String, ApiError>;
    /// Apply tags to a resource.
    async fn create_tags(
        &self,
        resource_id: &str,
        tags: &[ResourceTag<'_>],
    ) -> Result<(), ApiError>;
    /// Observe an instance. `None` when the instance is not (yet) visible.
    async fn describe_instance(
        &self,
        instance_id: &str,
    ) -> Result<Option<InstanceObservation>, ApiError>;
}

/// Composite trait: any type implementing both sub-traits is a `CloudApi`.
pub trait CloudApi: SecurityGroupApi + InstanceApi {}

/// Blanket implementation: any type implementing both sub-traits is a `CloudApi`.
impl<T> CloudApi for T where T: SecurityGroupApi + InstanceApi {}

// ── Time Port ─────────────────────────────────────────────────────────────────

/// Abstracts time so the poll loop can be tested without real sleeps.
#[allow(async_fn_in_trait)]
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
    /// Suspend for `duration`.
    async fn sleep(&self, duration: Duration);
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
pub trait CommandRunner {
    /// Start a program and return without waiting for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn spawn_detached(&self, program: &str, args: &[&str]) -> Result<()>;
}

// ── Browser Port ──────────────────────────────────────────────────────────────

/// Opens a URL in the operator's browser.
pub trait BrowserLauncher {
    /// Open `url` with the host's default browser.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is unsupported or the opener cannot
    /// be started.
    fn open(&self, url: &str) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
