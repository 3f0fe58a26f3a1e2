//! Instance launch and naming.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::{InstanceApi, InstanceSpec, ProgressReporter, ResourceTag};
use crate::domain::ProvisionError;
use crate::domain::ProvisionRequest;
use crate::domain::instance::{INSTANCE_TYPE, NAME_TAG_KEY, NAME_TAG_VALUE};

/// A launched instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchedInstance {
    pub id: String,
    /// `false` when the name tag could not be applied.
    pub tagged: bool,
}

/// Launch one `t2.micro` instance from the requested image, attached to
/// `security_group_id`, then tag it `Name=WordPress`.
///
/// The launch request is issued exactly once. Tagging is best effort: a
/// failure is reported as a warning and recorded in the result.
///
/// # Errors
///
/// Returns [`ProvisionError::InstanceLaunch`] if the launch request fails.
pub async fn launch(
    api: &impl InstanceApi,
    reporter: &impl ProgressReporter,
    request: &ProvisionRequest,
    security_group_id: &str,
) -> Result<LaunchedInstance, ProvisionError> {
    reporter.step(&format!(
        "launching {INSTANCE_TYPE} instance from {}...",
        request.image_id()
    ));

    let id = api
        .run_instance(&InstanceSpec {
            image_id: request.image_id(),
            instance_type: INSTANCE_TYPE,
            security_group_id,
        })
        .await
        .map_err(ProvisionError::InstanceLaunch)?;
    reporter.success(&format!("instance {id} launched"));

    let tags = [ResourceTag {
        key: NAME_TAG_KEY,
        value: NAME_TAG_VALUE,
    }];
    let tagged = match api.create_tags(&id, &tags).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(instance_id = %id, error = %err, "tagging failed");
            reporter.warn(&format!("could not tag instance {id}: {err}"));
            false
        }
    };

    Ok(LaunchedInstance { id, tagged })
}
