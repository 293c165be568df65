// External link launcher.
// Hands URLs to the platform opener so they land in a new browser context.

use std::process::{Command, Stdio};

use crate::error::{FolioError, Result};

/// Platform command used to open URLs.
fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Whether `url` may be handed to the opener.
pub fn is_openable(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Open `url` in the system browser without waiting for it.
pub fn open_url(url: &str) -> Result<()> {
    if !is_openable(url) {
        return Err(FolioError::Other(format!("refusing to open '{}'", url)));
    }

    tracing::info!(url, "opening external link");
    opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_openable() {
        assert!(is_openable("https://zh-hans.react.dev/"));
        assert!(is_openable("http://example.com"));
        assert!(!is_openable("/notes/html"));
        assert!(!is_openable("file:///etc/passwd"));
    }

    #[test]
    fn test_open_rejects_relative() {
        assert!(matches!(open_url("/docs"), Err(FolioError::Other(_))));
    }
}
