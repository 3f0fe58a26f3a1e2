//! The provisioning pipeline: security group → instance → readiness.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::{CloudApi, Clock, ProgressReporter};
use crate::domain::firewall::SECURITY_GROUP_NAME;
use crate::domain::{Deployment, ProvisionError, ProvisionRequest, ProvisionSettings};

use super::{launcher, readiness, security_group};

/// Runs the three provisioning steps in order against one cloud backend.
///
/// Each step consumes only the previous step's output; the first failure
/// ends the pipeline. Nothing is rolled back.
pub struct Provisioner<'a, A, C, R> {
    api: &'a A,
    clock: &'a C,
    reporter: &'a R,
    settings: ProvisionSettings,
}

impl<'a, A, C, R> Provisioner<'a, A, C, R>
where
    A: CloudApi,
    C: Clock,
    R: ProgressReporter,
{
    #[must_use]
    pub fn new(api: &'a A, clock: &'a C, reporter: &'a R, settings: ProvisionSettings) -> Self {
        Self {
            api,
            clock,
            reporter,
            settings,
        }
    }

    /// Provision one WordPress instance and wait until it is reachable.
    ///
    /// # Errors
    ///
    /// Returns the [`ProvisionError`] of the first step that fails.
    pub async fn provision(
        &self,
        request: &ProvisionRequest,
    ) -> Result<Deployment, ProvisionError> {
        let group = security_group::resolve(self.api, self.reporter, SECURITY_GROUP_NAME).await?;

        let instance = launcher::launch(self.api, self.reporter, request, &group.id).await?;

        let url = readiness::await_running(
            self.api,
            self.clock,
            self.reporter,
            &instance.id,
            &self.settings,
        )
        .await
        .into_result(&instance.id)?;

        Ok(Deployment {
            security_group_id: group.id,
            instance_id: instance.id,
            url,
            tagged: instance.tagged,
        })
    }

    /// [`provision`](Self::provision), abandoned as soon as `cancel`
    /// completes. Resources created before the cancellation are left as is.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::Cancelled`] if `cancel` wins the race,
    /// otherwise whatever `provision` returns.
    pub async fn provision_until(
        &self,
        request: &ProvisionRequest,
        cancel: impl Future<Output = ()>,
    ) -> Result<Deployment, ProvisionError> {
        tokio::select! {
            result = self.provision(request) => result,
            () = cancel => {
                tracing::debug!("provisioning cancelled");
                Err(ProvisionError::Cancelled)
            }
        }
    }
}
