use crate::models::config::Config;
use crate::models::outcome::StopOutcome;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub struct LaunchAgent {
    label: String,
    plist: PathBuf,
    launchctl: PathBuf,
}

impl LaunchAgent {
    pub fn new(config: &Config) -> Self {
        Self {
            label: config.launch_agent_label.clone(),
            plist: config.launch_agent_plist.clone(),
            launchctl: config.launchctl.clone(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.launchctl);
        cmd.stdin(Stdio::null());
        cmd
    }

    pub fn is_loaded(&self) -> Result<bool> {
        let output = self
            .command()
            .arg("list")
            .output()
            .with_context(|| format!("Failed to run {} list", self.launchctl.display()))?;
        if !output.status.success() {
            return Err(anyhow::anyhow!("launchctl list exited with {}", output.status));
        }
        Ok(job_listed(&String::from_utf8_lossy(&output.stdout), &self.label))
    }

    pub fn unload(&self) -> Result<()> {
        let output = self
            .command()
            .arg("unload")
            .arg(&self.plist)
            .output()
            .with_context(|| format!("Failed to run {} unload", self.launchctl.display()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow::anyhow!(
                "launchctl unload exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }
        Ok(())
    }

    /// Best effort: anything short of a missing plist is reported as either
    /// stopped or not running, never as a failure.
    pub fn stop(&self) -> StopOutcome {
        if !self.plist.exists() {
            return StopOutcome::NotFound;
        }

        let result = self.is_loaded().and_then(|loaded| {
            if loaded {
                self.unload().map(|_| true)
            } else {
                Ok(false)
            }
        });

        match result {
            Ok(true) => {
                log::debug!("unloaded {}", self.label);
                StopOutcome::Stopped
            }
            Ok(false) => StopOutcome::NotRunning("not loaded".to_string()),
            Err(e) => {
                log::warn!("{:#}", e);
                StopOutcome::NotRunning(format!("{:#}", e))
            }
        }
    }
}

/// `launchctl list` prints `PID Status Label` rows; match on the label column.
fn job_listed(listing: &str, label: &str) -> bool {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .any(|l| l == label)
}
