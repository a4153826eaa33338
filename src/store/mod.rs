mod error;
mod path;

use crate::model::FlightRecord;
use crate::report::Reporter;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub use error::{ErrorKind, Result, StoreError};
pub use path::{StorageDirectory, resolve_store_path};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<FlightRecord>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} not found, starting a new list", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&data).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    pub fn load_or_report(&self, reporter: &dyn Reporter) -> Vec<FlightRecord> {
        self.load().unwrap_or_else(|err| {
            reporter.error(&format!("Failed to load flights: {}", err));
            Vec::new()
        })
    }

    pub fn save(&self, flights: &[FlightRecord]) -> Result<()> {
        let data = encode(flights)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|source| self.write_error(source))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|source| self.write_error(source))?;
        file.write_all(&data)
            .and_then(|()| file.as_file().sync_all())
            .map_err(|source| self.write_error(source))?;
        // temp files are created 0600; keep the target's mode instead
        if let Some(permissions) = self.target_permissions() {
            file.as_file()
                .set_permissions(permissions)
                .map_err(|source| self.write_error(source))?;
        }
        file.persist(&self.path)
            .map_err(|err| self.write_error(err.error))?;
        Ok(())
    }

    fn target_permissions(&self) -> Option<fs::Permissions> {
        match fs::metadata(&self.path) {
            Ok(metadata) if metadata.is_file() => Some(metadata.permissions()),
            Ok(_) => None,
            Err(_) => new_file_permissions(),
        }
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

fn encode(flights: &[FlightRecord]) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
    flights
        .serialize(&mut serializer)
        .map_err(StoreError::Encode)?;
    data.push(b'\n');
    Ok(data)
}
