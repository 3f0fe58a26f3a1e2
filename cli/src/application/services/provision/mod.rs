//! Application services for provisioning a WordPress instance.
//!
//! Each step module imports only from `crate::domain` and
//! `crate::application::ports`; `workflow` chains them.

pub mod launcher;
pub mod readiness;
pub mod security_group;
pub mod workflow;


pub use launcher::LaunchedInstance;
pub use readiness::ReadinessOutcome;
pub use security_group::ResolvedGroup;
pub use workflow::Provisioner;
