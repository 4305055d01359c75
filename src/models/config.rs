use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub home_dir: PathBuf,
    pub claude_dir: PathBuf,
    pub launch_agent_label: String,
    pub launch_agent_plist: PathBuf,
    pub launchctl: PathBuf,
    pub converter_script: PathBuf,
    pub skill_dir: PathBuf,
    pub converted_history_dir: PathBuf,
}

impl Config {
    pub const LAUNCH_AGENT_LABEL: &'static str = "com.user.qmd-claude-history";

    pub fn new() -> anyhow::Result<Self> {
        let home = dirs_next::home_dir().context("Failed to get home directory")?;
        Ok(Self::with_home(home))
    }

    pub fn with_home<P: AsRef<Path>>(home: P) -> Self {
        let home_dir = home.as_ref().to_path_buf();
        let claude_dir = home_dir.join(".claude");
        let launch_agent_plist = home_dir
            .join("Library")
            .join("LaunchAgents")
            .join(format!("{}.plist", Self::LAUNCH_AGENT_LABEL));

        Self {
            launch_agent_label: Self::LAUNCH_AGENT_LABEL.to_string(),
            launch_agent_plist,
            launchctl: PathBuf::from("launchctl"),
            converter_script: home_dir
                .join(".local")
                .join("bin")
                .join("convert-claude-history.sh"),
            skill_dir: claude_dir.join("skills").join("qmd-claude-history"),
            converted_history_dir: claude_dir.join("converted-history"),
            claude_dir,
            home_dir,
        }
    }

    pub fn claude_config_file(&self) -> PathBuf {
        self.claude_dir.join("CLAUDE.md")
    }

    pub fn amp_config_file(&self) -> PathBuf {
        self.home_dir.join(".config").join("amp").join("AGENTS.md")
    }

    pub fn opencode_agent_file(&self) -> PathBuf {
        self.home_dir
            .join(".config")
            .join("opencode")
            .join("agents")
            .join("qmd-history.md")
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.claude_dir.join("projects")
    }

    /// Renders `path` with the home directory abbreviated to `~`.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.home_dir) {
            Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
            Ok(rest) => format!("~/{}", rest.display()),
            Err(_) => path.display().to_string(),
        }
    }
}
