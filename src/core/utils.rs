use dirs::home_dir;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".dream_calc";
const HOME_ENV: &str = "DREAM_CALC_HOME";

/// Resolves where persisted records live on disk.
pub struct PathResolver;

impl PathResolver {
    /// Application data directory: `$DREAM_CALC_HOME` when set, `~/.dream_calc` otherwise.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    /// Uses `root` when given, falling back to [`PathResolver::base_dir`].
    pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
        root.unwrap_or_else(Self::base_dir)
    }

    /// File backing a key of the key-value store.
    pub fn record_file_in(base: &Path, key: &str) -> PathBuf {
        base.join(format!("{}.json", canonical_key(key)))
    }
}

/// Creates `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Restricts record keys to a filesystem-safe alphabet.
pub fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "record".into()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_replaces_unsafe_characters() {
        assert_eq!(canonical_key("dream_calc"), "dream_calc");
        assert_eq!(canonical_key("../Theme"), "___theme");
        assert_eq!(canonical_key("  "), "record");
    }

    #[test]
    fn explicit_root_wins_over_default() {
        let root = PathBuf::from("/tmp/dream-calc-test");
        assert_eq!(PathResolver::resolve_base(Some(root.clone())), root);
        assert_eq!(
            PathResolver::record_file_in(&root, "theme"),
            root.join("theme.json")
        );
    }
}
