//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for process spawning.

use std::process::Stdio;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`: spawns processes with tokio and lets them
/// run on after the handle is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    fn spawn_detached(&self, program: &str, args: &[&str]) -> Result<()> {
        let child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(false)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;
        tracing::debug!(%program, pid = ?child.id(), "spawned detached process");
        Ok(())
    }
}
