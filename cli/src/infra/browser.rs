//! Opening URLs in the host browser.
//!
//! Platform dispatch lives here so the provisioning workflow never branches
//! on the operating system.

use anyhow::Result;

use crate::application::ports::{BrowserLauncher, CommandRunner};
use crate::domain::ProvisionError;
use crate::infra::command_runner::TokioCommandRunner;

/// The opener program and its arguments for `url` on operating system `os`
/// (as reported by `std::env::consts::OS`).
///
/// # Errors
///
/// Returns [`ProvisionError::UnsupportedPlatform`] for any OS other than
/// Linux, Windows, and macOS.
pub fn opener_command<'a>(
    os: &str,
    url: &'a str,
) -> Result<(&'static str, Vec<&'a str>), ProvisionError> {
    match os {
        "linux" => Ok(("xdg-open", vec![url])),
        "windows" => Ok(("rundll32", vec!["url.dll,FileProtocolHandler", url])),
        "macos" => Ok(("open", vec![url])),
        other => Err(ProvisionError::UnsupportedPlatform(other.to_owned())),
    }
}

/// `BrowserLauncher` that runs the platform's URL opener.
pub struct SystemBrowser<R> {
    runner: R,
    os: &'static str,
}

impl SystemBrowser<TokioCommandRunner> {
    /// Browser for the host operating system.
    #[must_use]
    pub fn host() -> Self {
        Self::new(TokioCommandRunner, std::env::consts::OS)
    }
}

impl<R: CommandRunner> SystemBrowser<R> {
    #[must_use]
    pub fn new(runner: R, os: &'static str) -> Self {
        Self { runner, os }
    }
}

impl<R: CommandRunner> BrowserLauncher for SystemBrowser<R> {
    fn open(&self, url: &str) -> Result<()> {
        let (program, args) = opener_command(self.os, url)?;
        self.runner.spawn_detached(program, &args)
    }
}
