//! Workflow tests for `Provisioner` through the public API.
//!
//! Every scenario runs against `ScriptedCloud`, so no AWS account is needed
//! and no test ever sleeps for real.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use wplaunch_cli::application::services::provision::Provisioner;
use wplaunch_cli::domain::{ApiError, ProvisionError, ProvisionRequest, ProvisionSettings};

use crate::mocks::{InstantClock, Scenario, ScriptedCloud, SilentReporter, pending, running};

const DNS: &str = "ec2-1-2-3-4.compute.amazonaws.com";

async fn provision(
    cloud: &ScriptedCloud,
    clock: &InstantClock,
    settings: ProvisionSettings,
) -> Result<wplaunch_cli::domain::Deployment, ProvisionError> {
    let request = ProvisionRequest::new("ami-123").expect("valid request");
    Provisioner::new(cloud, clock, &SilentReporter, settings)
        .provision(&request)
        .await
}

#[tokio::test]
async fn existing_group_pending_then_running_yields_url() {
    let cloud = ScriptedCloud::new(Scenario {
        groups: [Ok(vec!["sg-1".to_owned()])].into(),
        launch: [Ok("i-abc".to_owned())].into(),
        tag: [Ok(())].into(),
        statuses: [pending(), running(DNS)].into(),
        ..Scenario::default()
    });
    let clock = InstantClock::new();

    let deployment = provision(&cloud, &clock, ProvisionSettings::default())
        .await
        .expect("provisioned");

    assert_eq!(deployment.url, "http://ec2-1-2-3-4.compute.amazonaws.com");
    assert_eq!(deployment.instance_id, "i-abc");
    assert_eq!(
        cloud.recorded_calls(),
        vec![
            ("describe_security_groups".to_owned(), "wordpress-sg".to_owned()),
            ("run_instance".to_owned(), "ami-123".to_owned()),
            ("create_tags".to_owned(), "i-abc".to_owned()),
            ("describe_instance".to_owned(), "i-abc".to_owned()),
            ("describe_instance".to_owned(), "i-abc".to_owned()),
        ]
    );
    assert_eq!(
        clock.sleeps(),
        vec![Duration::from_secs(3), Duration::from_secs(7)]
    );
}

#[tokio::test]
async fn missing_group_is_created_and_attached() {
    let cloud = ScriptedCloud::new(Scenario {
        groups: [Err(ApiError::service("InvalidGroup.NotFound", "no such group"))].into(),
        created_group: [Ok("sg-new".to_owned())].into(),
        authorize: [Ok(())].into(),
        launch: [Ok("i-abc".to_owned())].into(),
        tag: [Ok(())].into(),
        statuses: [running(DNS)].into(),
        ..Scenario::default()
    });
    let clock = InstantClock::new();

    let deployment = provision(&cloud, &clock, ProvisionSettings::default())
        .await
        .expect("provisioned");

    assert_eq!(deployment.security_group_id, "sg-new");
    assert_eq!(cloud.count("create_security_group"), 1);
    assert_eq!(cloud.count("authorize_ingress"), 1);
}

#[tokio::test]
async fn tag_failure_does_not_fail_the_run() {
    let cloud = ScriptedCloud::new(Scenario {
        groups: [Ok(vec!["sg-1".to_owned()])].into(),
        launch: [Ok("i-abc".to_owned())].into(),
        tag: [Err(ApiError::transport("connection reset"))].into(),
        statuses: [running(DNS)].into(),
        ..Scenario::default()
    });
    let clock = InstantClock::new();

    let deployment = provision(&cloud, &clock, ProvisionSettings::default())
        .await
        .expect("provisioned");

    assert!(!deployment.tagged);
    assert_eq!(deployment.instance_id, "i-abc");
}

#[tokio::test]
async fn terminated_instance_fails_without_more_queries() {
    let cloud = ScriptedCloud::new(Scenario {
        groups: [Ok(vec!["sg-1".to_owned()])].into(),
        launch: [Ok("i-abc".to_owned())].into(),
        tag: [Ok(())].into(),
        statuses: [
            pending(),
            Ok(Some(wplaunch_cli::domain::InstanceObservation {
                state_code: Some(48),
                public_dns_name: None,
            })),
            running(DNS),
        ]
        .into(),
        ..Scenario::default()
    });
    let clock = InstantClock::new();

    let err = provision(&cloud, &clock, ProvisionSettings::default())
        .await
        .unwrap_err();

    assert_eq!(err.code(), "INSTANCE_FAILED");
    assert_eq!(cloud.count("describe_instance"), 2);
}

#[tokio::test]
async fn stuck_pending_instance_times_out() {
    let cloud = ScriptedCloud::new(Scenario {
        groups: [Ok(vec!["sg-1".to_owned()])].into(),
        launch: [Ok("i-abc".to_owned())].into(),
        tag: [Ok(())].into(),
        statuses: std::iter::repeat_with(pending).take(100).collect(),
        ..Scenario::default()
    });
    let clock = InstantClock::new();
    let settings = ProvisionSettings {
        timeout: Duration::from_secs(30),
        ..ProvisionSettings::default()
    };

    let err = provision(&cloud, &clock, settings).await.unwrap_err();

    assert!(matches!(err, ProvisionError::TimedOut { .. }), "got {err}");
    assert!(cloud.count("describe_instance") < 100);
}

#[tokio::test]
async fn status_query_error_is_not_retried() {
    let cloud = ScriptedCloud::new(Scenario {
        groups: [Ok(vec!["sg-1".to_owned()])].into(),
        launch: [Ok("i-abc".to_owned())].into(),
        tag: [Ok(())].into(),
        statuses: [
            Err(ApiError::service("RequestLimitExceeded", "Request limit exceeded.")),
            running(DNS),
        ]
        .into(),
        ..Scenario::default()
    });
    let clock = InstantClock::new();

    let err = provision(&cloud, &clock, ProvisionSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ProvisionError::InstanceQuery { .. }));
    assert_eq!(cloud.count("describe_instance"), 1);
    assert!(clock.sleeps().is_empty());
}
