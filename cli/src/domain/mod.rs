//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod firewall;
pub mod instance;
pub mod request;

pub use config::{CloudSettings, ProvisionSettings};
pub use error::{ApiError, ProvisionError};
pub use firewall::IngressRule;
pub use instance::{Deployment, InstanceObservation, InstanceStatus};
pub use request::ProvisionRequest;
