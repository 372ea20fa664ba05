//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! usually resolves to the user's home directory. Paths coming from the
//! plugin configuration are written the way the user sees them (`~/...`)
//! and translated here.

use std::path::PathBuf;

/// File holding persisted preferences inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Returns the default data directory, `/host/.local/share/zellij/custom-board`.
///
/// # Examples
///
/// ```
/// use custom_board::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/custom-board");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("custom-board")
}

/// Resolves the data directory, honouring a configured override.
///
/// Blank overrides are ignored.
#[must_use]
pub fn resolve_data_dir(configured: Option<&str>) -> PathBuf {
    configured
        .map(str::trim)
        .filter(|dir| !dir.is_empty())
        .map_or_else(get_data_dir, |dir| PathBuf::from(expand_tilde(dir)))
}

/// Path of the preferences file under `data_dir`.
#[must_use]
pub fn preferences_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join(PREFERENCES_FILE)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use custom_board::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/paper.toml"), "/host/themes/paper.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_data_dir_wins_over_default() {
        assert_eq!(resolve_data_dir(None), get_data_dir());
        assert_eq!(resolve_data_dir(Some("  ")), get_data_dir());
        assert_eq!(
            resolve_data_dir(Some("~/.board")),
            PathBuf::from("/host/.board")
        );
        assert_eq!(
            preferences_path(&PathBuf::from("/tmp/board")),
            PathBuf::from("/tmp/board/preferences.json")
        );
    }
}
