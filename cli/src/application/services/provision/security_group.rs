//! Security group lookup-or-create.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::{ProgressReporter, SecurityGroupApi};
use crate::domain::ProvisionError;
use crate::domain::firewall::{GROUP_NOT_FOUND_CODE, SECURITY_GROUP_DESCRIPTION, WEB_INGRESS};

/// A security group ready to attach to an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGroup {
    pub id: String,
    /// `true` when this run created the group.
    pub created: bool,
}

/// Find the security group called `name`, creating it with HTTP ingress
/// when it does not exist yet.
///
/// Only a lookup that fails with `InvalidGroup.NotFound` (or returns no
/// groups) leads to creation. Any other lookup failure is returned as-is so
/// a transient or permission error never produces a duplicate group.
///
/// # Errors
///
/// - [`ProvisionError::SecurityGroupLookup`] if the lookup fails for any
///   reason other than the group being absent.
/// - [`ProvisionError::SecurityGroupCreate`] if creation fails.
/// - [`ProvisionError::SecurityGroupIngress`] if port 80 cannot be opened on
///   the new group.
pub async fn resolve(
    api: &impl SecurityGroupApi,
    reporter: &impl ProgressReporter,
    name: &str,
) -> Result<ResolvedGroup, ProvisionError> {
    reporter.step(&format!("looking up security group {name}..."));

    match api.describe_security_groups(name).await {
        Ok(ids) => {
            if let Some(id) = ids.into_iter().next() {
                tracing::debug!(group_id = %id, "security group exists");
                reporter.success(&format!("using security group {name} ({id})"));
                return Ok(ResolvedGroup { id, created: false });
            }
        }
        Err(err) if err.has_code(GROUP_NOT_FOUND_CODE) => {
            tracing::debug!(%name, "security group not found");
        }
        Err(source) => {
            return Err(ProvisionError::SecurityGroupLookup {
                name: name.to_owned(),
                source,
            });
        }
    }

    create(api, reporter, name).await
}

async fn create(
    api: &impl SecurityGroupApi,
    reporter: &impl ProgressReporter,
    name: &str,
) -> Result<ResolvedGroup, ProvisionError> {
    reporter.step(&format!("creating security group {name}..."));

    let id = api
        .create_security_group(name, SECURITY_GROUP_DESCRIPTION)
        .await
        .map_err(|source| ProvisionError::SecurityGroupCreate {
            name: name.to_owned(),
            source,
        })?;

    api.authorize_ingress(&id, &WEB_INGRESS)
        .await
        .map_err(|source| ProvisionError::SecurityGroupIngress {
            group_id: id.clone(),
            source,
        })?;

    reporter.success(&format!("created security group {name} ({id}) with port 80 open"));
    Ok(ResolvedGroup { id, created: true })
}
