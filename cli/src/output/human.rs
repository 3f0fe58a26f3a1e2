//! Human-readable terminal renderer.

use std::time::Duration;

use owo_colors::OwoColorize as _;

use crate::domain::Deployment;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the summary of a finished deployment.
    pub fn render_deployment(&self, deployment: &Deployment, elapsed: Duration) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.kv("Instance:      ", &deployment.instance_id);
        self.ctx.kv("Security group:", &deployment.security_group_id);
        println!(
            "  {}  {}",
            "URL:           ".style(self.ctx.styles.dim),
            deployment.url.style(self.ctx.styles.bold)
        );
        if !deployment.tagged {
            self.ctx.warn("instance is not tagged Name=WordPress");
        }
        self.ctx.info(&format!("Start-up time: {}s", elapsed.as_secs()));
    }
}
