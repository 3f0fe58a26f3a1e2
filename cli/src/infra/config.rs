//! Resolution of the AWS SDK configuration from explicit settings.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_ec2::error::DisplayErrorContext;

use crate::domain::{CloudSettings, ProvisionError};

/// Load the SDK configuration for `settings` and verify that a region and
/// credentials are available.
///
/// Settings left as `None` fall back to the SDK's default provider chain
/// (environment, shared config files, instance metadata). Credentials are
/// resolved eagerly so a misconfigured environment fails before any
/// resource is touched.
///
/// # Errors
///
/// Returns [`ProvisionError::Configuration`] if no region is configured or
/// no credentials can be resolved.
pub async fn load_sdk_config(settings: &CloudSettings) -> Result<SdkConfig, ProvisionError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    let config = loader.load().await;

    let Some(region) = config.region() else {
        return Err(ProvisionError::Configuration(
            "no region configured; pass --region or set AWS_REGION".to_owned(),
        ));
    };

    let provider = config.credentials_provider().ok_or_else(|| {
        ProvisionError::Configuration("no credentials provider configured".to_owned())
    })?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| ProvisionError::Configuration(DisplayErrorContext(&e).to_string()))?;

    tracing::debug!(%region, profile = ?settings.profile, "AWS configuration loaded");
    Ok(config)
}
