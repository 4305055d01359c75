use crate::models::config::Config;
use crate::models::integration::{Assistant, Integration};
use crate::services::stripper::contains;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reports which assistant configs still carry the integration, in scan order.
pub fn scan(config: &Config) -> Vec<Integration> {
    Assistant::ALL
        .iter()
        .filter_map(|assistant| {
            let path = assistant.config_path(config);
            if is_installed(&path, assistant.sentinel()) {
                Some(Integration::found(*assistant, path))
            } else {
                None
            }
        })
        .collect()
}

fn is_installed(path: &Path, sentinel: Option<&str>) -> bool {
    let Some(sentinel) = sentinel else {
        return path.is_file();
    };
    match fs::read(path) {
        Ok(content) => contains(&content, sentinel.as_bytes()),
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => {
            log::debug!("skipping unreadable {}: {}", path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn empty_home_has_no_integrations() {
        let home = TempDir::new().unwrap();
        assert!(scan(&Config::with_home(home.path())).is_empty());
    }

    #[test]
    fn finds_all_in_fixed_order() {
        let home = TempDir::new().unwrap();
        let config = Config::with_home(home.path());
        write(&config.opencode_agent_file(), b"anything");
        write(&config.amp_config_file(), b"use qmd-history for recall\n");
        write(&config.claude_config_file(), b"## Memory\nskill qmd-claude-history\n");

        let ids: Vec<_> = scan(&config).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["claude", "amp", "opencode"]);
    }

    #[test]
    fn sentinel_is_required_for_shared_files() {
        let home = TempDir::new().unwrap();
        let config = Config::with_home(home.path());
        write(&config.claude_config_file(), b"# my notes\n");
        write(&config.amp_config_file(), b"nothing here\n");

        assert!(scan(&config).is_empty());
    }

    #[test]
    fn descriptor_carries_path_and_presence() {
        let home = TempDir::new().unwrap();
        let config = Config::with_home(home.path());
        write(&config.amp_config_file(), b"qmd-history");

        let found = scan(&config);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Amp");
        assert_eq!(found[0].config_path, config.amp_config_file());
        assert!(found[0].exists);
    }

    #[test]
    fn non_utf8_config_is_still_detected() {
        let home = TempDir::new().unwrap();
        let config = Config::with_home(home.path());
        write(
            &config.claude_config_file(),
            b"# Caf\xe9 notes\n## Memory & Context Retrieval\nUse qmd-claude-history\n",
        );

        let ids: Vec<_> = scan(&config).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["claude"]);
    }

    #[test]
    fn unreadable_config_is_skipped() {
        let home = TempDir::new().unwrap();
        let config = Config::with_home(home.path());
        // Reading a directory fails even for root.
        fs::create_dir_all(config.claude_config_file()).unwrap();
        fs::create_dir_all(config.amp_config_file()).unwrap();

        assert!(scan(&config).is_empty());
    }

    #[test]
    fn directory_in_place_of_config_is_not_installed() {
        let home = TempDir::new().unwrap();
        let config = Config::with_home(home.path());
        fs::create_dir_all(config.opencode_agent_file()).unwrap();

        assert!(scan(&config).is_empty());
    }
}
