use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".char-diff.toml";

/// Load config file content from CWD first, then home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let mut search = vec![PathBuf::from(".")];
    search.extend(dirs::home_dir());
    load_config_file_from(&search)
}

/// First readable `CONFIG_FILE` among `dirs`.
fn load_config_file_from(dirs: &[PathBuf]) -> Option<String> {
    dirs.iter().find_map(|dir| read_config(dir))
}

fn read_config(dir: &Path) -> Option<String> {
    let path = dir.join(CONFIG_FILE);
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_directory_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(first.path().join(CONFIG_FILE), "preset = \"html\"").unwrap();
        std::fs::write(second.path().join(CONFIG_FILE), "preset = \"plain\"").unwrap();

        let dirs = [first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(
            load_config_file_from(&dirs).as_deref(),
            Some("preset = \"html\"")
        );
    }

    #[test]
    fn test_falls_through_missing_files() {
        let empty = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        std::fs::write(home.path().join(CONFIG_FILE), "indent_width = 2").unwrap();

        let dirs = [empty.path().to_path_buf(), home.path().to_path_buf()];
        assert_eq!(
            load_config_file_from(&dirs).as_deref(),
            Some("indent_width = 2")
        );
    }

    #[test]
    fn test_nothing_found() {
        let empty = tempfile::tempdir().unwrap();
        assert_eq!(load_config_file_from(&[empty.path().to_path_buf()]), None);
        assert_eq!(load_config_file_from(&[]), None);
    }
}
