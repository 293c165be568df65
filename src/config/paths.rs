// Filesystem locations for configuration, content, session state, and logs.
// Resolved through the platform's project directories.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "folio")
}

/// Base configuration directory (~/.config/folio on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the site configuration file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("site.toml"))
}

/// Base data directory (~/.local/share/folio on Linux).
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Default root of the markdown content tree.
pub fn content_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("content"))
}

/// Base cache directory (~/.cache/folio on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the persisted session file.
pub fn state_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("session.json"))
}

/// Directory holding log files.
pub fn log_dir() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_project_dirs() {
        // Path construction only, nothing touches the filesystem
        let Some(cache) = cache_dir() else {
            return;
        };
        assert!(state_path().unwrap().starts_with(&cache));
        assert!(state_path().unwrap().ends_with("session.json"));
        assert!(log_dir().unwrap().ends_with("logs"));
        assert!(config_path().unwrap().ends_with("site.toml"));
        assert!(content_dir().unwrap().ends_with("content"));
    }
}
