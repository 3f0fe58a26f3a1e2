//! Readiness polling: wait for a launched instance to reach `running`.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::time::{Duration, Instant};

use crate::application::ports::{Clock, InstanceApi, ProgressReporter};
use crate::domain::instance::{public_url, state_name};
use crate::domain::{ApiError, InstanceStatus, ProvisionError, ProvisionSettings};

/// How the poll loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadinessOutcome {
    /// Running, with the URL of its public address.
    Ready { url: String },
    /// Left `pending` for a state other than `running`.
    Failed { code: i32 },
    /// Running but without a public DNS name.
    NoPublicAddress,
    /// The status query itself failed.
    QueryError(ApiError),
    /// Still pending when the deadline was reached.
    TimedOut { waited: Duration },
}

impl ReadinessOutcome {
    /// Convert to the workflow's result type.
    ///
    /// # Errors
    ///
    /// Every outcome other than `Ready` maps to its `ProvisionError`.
    pub fn into_result(self, instance_id: &str) -> Result<String, ProvisionError> {
        let instance_id = instance_id.to_owned();
        match self {
            Self::Ready { url } => Ok(url),
            Self::Failed { code } => Err(ProvisionError::InstanceFailed {
                instance_id,
                code,
                state: state_name(code),
            }),
            Self::NoPublicAddress => Err(ProvisionError::NoPublicAddress { instance_id }),
            Self::QueryError(source) => Err(ProvisionError::InstanceQuery {
                instance_id,
                source,
            }),
            Self::TimedOut { waited } => Err(ProvisionError::TimedOut {
                instance_id,
                waited_secs: waited.as_secs(),
            }),
        }
    }
}

/// Poll `instance_id` until it is running, fails, the query errors, or
/// `settings.timeout` elapses.
///
/// Pending → sleep `poll_interval` and query again. Running → sleep
/// `settle_delay`, then return `http://<public dns>`. Any other state and any
/// query error end the loop on the spot; nothing is retried.
pub async fn await_running(
    api: &impl InstanceApi,
    clock: &impl Clock,
    reporter: &impl ProgressReporter,
    instance_id: &str,
    settings: &ProvisionSettings,
) -> ReadinessOutcome {
    let started = clock.now();
    // `None` when the timeout is too large to represent: no reachable deadline.
    let deadline = started.checked_add(settings.timeout);

    loop {
        let observation = match api.describe_instance(instance_id).await {
            Ok(observation) => observation,
            Err(err) => {
                tracing::debug!(%instance_id, error = %err, "status query failed");
                return ReadinessOutcome::QueryError(err);
            }
        };

        let status = observation
            .as_ref()
            .map_or(InstanceStatus::Pending, |o| o.status());
        tracing::debug!(%instance_id, ?status, "instance observed");

        match status {
            InstanceStatus::Running => {
                let Some(address) = observation
                    .as_ref()
                    .and_then(|o| o.public_address())
                    .map(public_url)
                else {
                    return ReadinessOutcome::NoPublicAddress;
                };
                reporter.step(&format!(
                    "instance {instance_id} running, waiting for it to settle..."
                ));
                clock.sleep(settings.settle_delay).await;
                reporter.success(&format!("instance {instance_id} ready at {address}"));
                return ReadinessOutcome::Ready { url: address };
            }
            InstanceStatus::Failed(code) => {
                return ReadinessOutcome::Failed { code };
            }
            InstanceStatus::Pending => {
                let now = clock.now();
                let waited = now.duration_since(started);
                if wakes_past(now, settings.poll_interval, deadline) {
                    return ReadinessOutcome::TimedOut { waited };
                }
                reporter.step(&format!(
                    "instance {instance_id} still pending ({}s)...",
                    waited.as_secs()
                ));
                clock.sleep(settings.poll_interval).await;
            }
        }
    }
}

/// Whether sleeping `interval` from `now` would end past `deadline`.
fn wakes_past(now: Instant, interval: Duration, deadline: Option<Instant>) -> bool {
    match (deadline, now.checked_add(interval)) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(deadline), Some(wake)) => wake > deadline,
    }
}
