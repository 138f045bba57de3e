//! Default filesystem locations shared by the host and the CLI

use std::path::PathBuf;

/// Default control socket path.
///
/// Prefers the user runtime directory, falling back to /tmp for systems
/// without one.
pub fn default_socket_path() -> PathBuf {
    if let Ok(runtime_dir) = std::env::var("XDG_RUNTIME_DIR") {
        return PathBuf::from(runtime_dir).join("weft").join("control.sock");
    }
    std::env::temp_dir().join("weft-control.sock")
}

/// Default weft configuration directory (`~/.config/weft`).
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weft")
}

/// Default CLI configuration file path.
pub fn default_ctl_config_path() -> PathBuf {
    default_config_dir().join("ctl.toml")
}

/// Default host color configuration file path.
pub fn default_host_config_path() -> PathBuf {
    default_config_dir().join("weft.conf")
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_user(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_untouched() {
        assert_eq!(expand_user("/etc/colors.conf"), PathBuf::from("/etc/colors.conf"));
        assert_eq!(expand_user("relative.conf"), PathBuf::from("relative.conf"));
    }

    #[test]
    fn test_tilde_expansion() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_user("~/colors.conf"), home.join("colors.conf"));
            assert_eq!(expand_user("~"), home);
        }
    }

    #[test]
    fn test_config_paths_share_directory() {
        let dir = default_config_dir();
        assert!(default_ctl_config_path().starts_with(&dir));
        assert!(default_host_config_path().starts_with(&dir));
    }
}
