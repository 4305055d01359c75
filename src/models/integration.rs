use crate::models::config::Config;
use std::path::PathBuf;

/// An AI assistant whose configuration the installer may have touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assistant {
    Claude,
    Amp,
    Opencode,
}

impl Assistant {
    /// Scan order.
    pub const ALL: [Assistant; 3] = [Assistant::Claude, Assistant::Amp, Assistant::Opencode];

    pub fn name(&self) -> &'static str {
        match self {
            Assistant::Claude => "Claude Code",
            Assistant::Amp => "Amp",
            Assistant::Opencode => "Opencode",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Assistant::Claude => "claude",
            Assistant::Amp => "amp",
            Assistant::Opencode => "opencode",
        }
    }

    /// Substring marking the file as installed. `None` means the file is
    /// owned by the integration and its existence is enough.
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            Assistant::Claude => Some("qmd-claude-history"),
            Assistant::Amp => Some("qmd-history"),
            Assistant::Opencode => None,
        }
    }

    pub fn config_path(&self, config: &Config) -> PathBuf {
        match self {
            Assistant::Claude => config.claude_config_file(),
            Assistant::Amp => config.amp_config_file(),
            Assistant::Opencode => config.opencode_agent_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    pub name: String,
    pub id: String,
    pub config_path: PathBuf,
    pub exists: bool,
}

impl Integration {
    pub fn found(assistant: Assistant, config_path: PathBuf) -> Self {
        Self {
            name: assistant.name().to_string(),
            id: assistant.id().to_string(),
            config_path,
            exists: true,
        }
    }
}
