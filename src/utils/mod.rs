use std::sync::Once;
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::errors::StoreError;

const DEFAULT_DIR_NAME: &str = ".financy";
const USERS_DIR: &str = "users";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("financy_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.financy`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINANCY_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Base directory holding one subdirectory per user.
pub fn users_dir_in(base: &Path) -> PathBuf {
    base.join(USERS_DIR)
}

/// Path to the application configuration file.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes `data` through a sibling temp file and renames it into place, so a
/// reader never observes a partially written document.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_atomic_leaves_no_temp_file_behind() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("doc.json");
        write_atomic(&path, "{}").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "{}");
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .expect("read dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path() != path)
            .collect();
        assert!(leftovers.is_empty(), "unexpected files: {leftovers:?}");
    }

    #[test]
    fn write_atomic_replaces_existing_content() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("doc.json");
        write_atomic(&path, "old").expect("first write");
        write_atomic(&path, "new").expect("second write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "new");
    }
}
