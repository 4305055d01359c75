use crate::models::outcome::RemovalOutcome;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Deletes `path` if present. Directories go recursively; symlinks are
/// unlinked, never followed.
pub fn remove(path: &Path, label: &str) -> RemovalOutcome {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("{} missing: {}", label, path.display());
            return RemovalOutcome::NotFound;
        }
        Err(e) => {
            log::error!("cannot stat {} {}: {}", label, path.display(), e);
            return RemovalOutcome::Failed(e.to_string());
        }
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(_) => {
            log::debug!("removed {}: {}", label, path.display());
            RemovalOutcome::Removed
        }
        Err(e) => {
            log::error!("failed to remove {} {}: {}", label, path.display(), e);
            RemovalOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn removes_file_then_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("convert-claude-history.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();

        assert_eq!(remove(&script, "Converter script"), RemovalOutcome::Removed);
        assert!(!script.exists());
        assert_eq!(remove(&script, "Converter script"), RemovalOutcome::NotFound);
    }

    #[test]
    fn removes_directory_recursively() {
        let dir = TempDir::new().unwrap();
        let skill = dir.path().join("skills").join("qmd-claude-history");
        fs::create_dir_all(skill.join("scripts")).unwrap();
        fs::write(skill.join("SKILL.md"), "skill").unwrap();
        fs::write(skill.join("scripts").join("run.sh"), "run").unwrap();

        assert_eq!(remove(&skill, "Skill directory"), RemovalOutcome::Removed);
        assert!(!skill.exists());
        assert!(dir.path().join("skills").exists());
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            remove(&dir.path().join("nope.plist"), "LaunchAgent plist"),
            RemovalOutcome::NotFound
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_unlinked_not_followed() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "keep").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(remove(&link, "Skill directory"), RemovalOutcome::Removed);
        assert!(fs::symlink_metadata(&link).is_err());
        assert!(target.join("keep.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_removed() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

        assert_eq!(remove(&link, "Converter script"), RemovalOutcome::Removed);
    }
}
