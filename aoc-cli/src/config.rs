//! Configuration resolution from CLI args

use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Data directory holding the store's table files
    pub data_dir: PathBuf,
}

impl Config {
    /// Build config from the parsed data directory argument, expanding `~`
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Config {
            data_dir: expand_tilde(data_dir),
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches("~/").trim_start_matches('~'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_unchanged() {
        let path = Path::new("/tmp/aoc_data");
        assert_eq!(expand_tilde(path), PathBuf::from("/tmp/aoc_data"));
    }

    #[test]
    fn test_tilde_expands_under_home() {
        if let Some(home) = dirs::home_dir() {
            let expanded = expand_tilde(Path::new("~/aoc"));
            assert_eq!(expanded, home.join("aoc"));
        }
    }
}
