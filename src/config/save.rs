use std::io::Write;
use std::path::Path;

use super::errors::ConfigError;
use super::types::AppConfig;

const TEMP_NAME_ATTEMPTS: usize = 5;

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, data.as_bytes())
}

/// Write through a sibling temp file and rename it over `path`.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    let write_err = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = path
        .parent()
        .ok_or_else(|| write_err(other_io("config path has no parent directory")))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| write_err(other_io("config path has no file name")))?
        .to_string_lossy()
        .into_owned();

    for _ in 0..TEMP_NAME_ATTEMPTS {
        let tmp_path = dir.join(format!("{file_name}.tmp-{}", temp_suffix()));
        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(write_err(err)),
        };
        let written = file
            .write_all(data)
            .and_then(|()| file.sync_all())
            .and_then(|()| {
                drop(file);
                std::fs::rename(&tmp_path, path)
            });
        if let Err(err) = written {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_err(err));
        }
        return Ok(());
    }
    Err(write_err(std::io::Error::new(
        std::io::ErrorKind::AlreadyExists,
        format!("failed to create temporary file for {}", path.display()),
    )))
}

fn temp_suffix() -> String {
    let bytes: [u8; 6] = rand::random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn other_io(message: &str) -> std::io::Error {
    std::io::Error::other(message.to_string())
}
