//! `wplaunch --ami <IMAGE_ID>`: provision a WordPress instance and open it.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Args;

use crate::application::ports::BrowserLauncher;
use crate::application::services::provision::Provisioner;
use crate::domain::config::{
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_SETTLE_DELAY_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::domain::{CloudSettings, ProvisionRequest, ProvisionSettings};
use crate::infra::aws::Ec2Api;
use crate::infra::browser::SystemBrowser;
use crate::infra::clock::TokioClock;
use crate::infra::config::load_sdk_config;
use crate::output::{HumanRenderer, OutputContext, TerminalReporter, json};

/// Arguments for provisioning.
#[derive(Args)]
pub struct ProvisionArgs {
    /// The image id for the instance
    #[arg(long, value_name = "IMAGE_ID", env = "WPLAUNCH_AMI")]
    pub ami: Option<String>,

    /// AWS region (defaults to the SDK's region chain)
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS shared-config profile
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Give up waiting for the instance after this many seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Seconds between status checks while the instance is pending
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_POLL_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval: u64,

    /// Seconds to wait after the instance is running before opening it
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_SETTLE_DELAY_SECS)]
    pub settle: u64,

    /// Print the URL instead of opening a browser
    #[arg(long)]
    pub no_browser: bool,
}

impl ProvisionArgs {
    /// Poll timings from the flags.
    #[must_use]
    pub fn settings(&self) -> ProvisionSettings {
        ProvisionSettings {
            poll_interval: Duration::from_secs(self.poll_interval),
            settle_delay: Duration::from_secs(self.settle),
            timeout: Duration::from_secs(self.timeout),
        }
    }

    /// AWS account settings from the flags.
    #[must_use]
    pub fn cloud(&self) -> CloudSettings {
        CloudSettings {
            region: self.region.clone(),
            profile: self.profile.clone(),
        }
    }
}

/// Run the provisioning workflow end to end.
///
/// Input is validated before the AWS configuration is loaded, so a missing
/// image never reaches the network. The workflow races Ctrl-C; an interrupt
/// abandons it without rolling back resources already created. The elapsed
/// time is reported on failure as well as on success.
///
/// # Errors
///
/// Returns an error if the image is missing, AWS configuration cannot be
/// resolved, any provisioning step fails, or the browser cannot be opened.
pub async fn run(ctx: &OutputContext, args: &ProvisionArgs, json: bool) -> Result<()> {
    let started = Instant::now();
    let result = provision_and_open(ctx, args, json, started).await;
    if let Err(err) = &result {
        let elapsed_secs = started.elapsed().as_secs();
        tracing::info!(elapsed_secs, error = %format!("{err:#}"), "provisioning failed");
        ctx.info(&format!("Start-up time: {elapsed_secs}s"));
    }
    result
}

async fn provision_and_open(
    ctx: &OutputContext,
    args: &ProvisionArgs,
    json: bool,
    started: Instant,
) -> Result<()> {
    let request = ProvisionRequest::new(args.ami.as_deref().unwrap_or_default())?;

    let sdk_config = load_sdk_config(&args.cloud()).await?;
    let api = Ec2Api::new(&sdk_config);
    let clock = TokioClock;

    let deployment = {
        let reporter = TerminalReporter::new(ctx);
        Provisioner::new(&api, &clock, &reporter, args.settings())
            .provision_until(&request, interrupted())
            .await?
    };
    let elapsed = started.elapsed();
    tracing::info!(
        instance_id = %deployment.instance_id,
        url = %deployment.url,
        elapsed_secs = elapsed.as_secs(),
        "instance ready"
    );

    if json {
        println!("{}", json::format_deployment(&deployment, elapsed.as_secs())?);
    } else {
        HumanRenderer::new(ctx).render_deployment(&deployment, elapsed);
    }

    if !args.no_browser {
        SystemBrowser::host()
            .open(&deployment.url)
            .with_context(|| format!("failed to open browser at {}", deployment.url))?;
    }
    Ok(())
}

/// Completes on Ctrl-C. If the handler cannot be installed it never
/// completes, so the run carries on uninterruptible.
async fn interrupted() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
