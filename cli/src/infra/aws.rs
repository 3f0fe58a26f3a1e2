//! EC2 implementation of the cloud API ports.
//!
//! This is the only module that touches `aws_sdk_ec2` types; everything it
//! returns is converted to domain types.

use aws_sdk_ec2::Client;
use aws_sdk_ec2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ec2::types::{InstanceType, IpPermission, IpRange, Ipv6Range, Tag};

use crate::application::ports::{InstanceApi, InstanceSpec, ResourceTag, SecurityGroupApi};
use crate::domain::{ApiError, IngressRule, InstanceObservation};

/// EC2 backend for [`SecurityGroupApi`] and [`InstanceApi`].
#[derive(Clone)]
pub struct Ec2Api {
    client: Client,
}

impl Ec2Api {
    /// Build a client from an already resolved SDK configuration.
    #[must_use]
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

/// Reduce an SDK error to its service error code and a full message.
fn api_error<E>(err: &SdkError<E>) -> ApiError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let code = err
        .as_service_error()
        .and_then(|e| e.code())
        .map(str::to_owned);
    ApiError::new(code, DisplayErrorContext(err).to_string())
}

fn ip_permission(rule: &IngressRule) -> IpPermission {
    let builder = IpPermission::builder()
        .ip_protocol(rule.protocol)
        .from_port(rule.from_port)
        .to_port(rule.to_port);
    if rule.is_ipv6() {
        builder
            .ipv6_ranges(Ipv6Range::builder().cidr_ipv6(rule.cidr).build())
            .build()
    } else {
        builder
            .ip_ranges(IpRange::builder().cidr_ip(rule.cidr).build())
            .build()
    }
}

impl SecurityGroupApi for Ec2Api {
    async fn describe_security_groups(&self, name: &str) -> Result<Vec<String>, ApiError> {
        tracing::debug!(%name, "DescribeSecurityGroups");
        let output = self
            .client
            .describe_security_groups()
            .group_names(name)
            .send()
            .await
            .map_err(|e| api_error(&e))?;
        Ok(output
            .security_groups()
            .iter()
            .filter_map(|g| g.group_id())
            .map(str::to_owned)
            .collect())
    }

    async fn create_security_group(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, ApiError> {
        tracing::debug!(%name, "CreateSecurityGroup");
        let output = self
            .client
            .create_security_group()
            .group_name(name)
            .description(description)
            .send()
            .await
            .map_err(|e| api_error(&e))?;
        output
            .group_id()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::transport("CreateSecurityGroup returned no group id"))
    }

    async fn authorize_ingress(
        &self,
        group_id: &str,
        rules: &[IngressRule],
    ) -> Result<(), ApiError> {
        tracing::debug!(%group_id, rules = rules.len(), "AuthorizeSecurityGroupIngress");
        let permissions: Vec<IpPermission> = rules.iter().map(ip_permission).collect();
        self.client
            .authorize_security_group_ingress()
            .group_id(group_id)
            .set_ip_permissions(Some(permissions))
            .send()
            .await
            .map_err(|e| api_error(&e))?;
        Ok(())
    }
}

impl InstanceApi for Ec2Api {
    async fn run_instance(&self, spec: &InstanceSpec<'_>) -> Result<String, ApiError> {
        tracing::debug!(
            image_id = %spec.image_id,
            instance_type = %spec.instance_type,
            "RunInstances"
        );
        let output = self
            .client
            .run_instances()
            .image_id(spec.image_id)
            .instance_type(InstanceType::from(spec.instance_type))
            .min_count(1)
            .max_count(1)
            .security_group_ids(spec.security_group_id)
            .send()
            .await
            .map_err(|e| api_error(&e))?;
        output
            .instances()
            .first()
            .and_then(|i| i.instance_id())
            .map(str::to_owned)
            .ok_or_else(|| ApiError::transport("RunInstances returned no instance id"))
    }

    async fn create_tags(
        &self,
        resource_id: &str,
        tags: &[ResourceTag<'_>],
    ) -> Result<(), ApiError> {
        tracing::debug!(%resource_id, "CreateTags");
        let tags: Vec<Tag> = tags
            .iter()
            .map(|t| Tag::builder().key(t.key).value(t.value).build())
            .collect();
        self.client
            .create_tags()
            .resources(resource_id)
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(|e| api_error(&e))?;
        Ok(())
    }

    async fn describe_instance(
        &self,
        instance_id: &str,
    ) -> Result<Option<InstanceObservation>, ApiError> {
        tracing::debug!(%instance_id, "DescribeInstances");
        let output = self
            .client
            .describe_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| api_error(&e))?;
        Ok(output
            .reservations()
            .iter()
            .flat_map(|r| r.instances())
            .find(|i| i.instance_id() == Some(instance_id))
            .map(|i| InstanceObservation {
                state_code: i.state().and_then(|s| s.code()),
                public_dns_name: i.public_dns_name().map(str::to_owned),
            }))
    }
}
