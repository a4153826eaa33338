use super::error::{Result, StoreError};
use clap::ValueEnum;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageDirectory {
    /// The user's home directory, keeping only the base filename.
    #[default]
    Home,
    /// Exactly the path given on the command line.
    AsGiven,
}

pub fn resolve_store_path(path: &Path, storage: StorageDirectory) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidFileName {
            path: path.to_path_buf(),
        })?;

    match storage {
        StorageDirectory::AsGiven => Ok(path.to_path_buf()),
        StorageDirectory::Home => {
            let base_dirs = BaseDirs::new().ok_or(StoreError::HomeDirectoryUnavailable)?;
            Ok(base_dirs.home_dir().join(file_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn as_given_keeps_path() {
        let path = PathBuf::from("data/flights.json");
        let resolved = resolve_store_path(&path, StorageDirectory::AsGiven).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn home_relocates_base_name() {
        let home = tempdir().expect("tempdir");
        temp_env::with_var("HOME", Some(home.path()), || {
            let resolved = resolve_store_path(
                Path::new("/var/tmp/nested/flights.json"),
                StorageDirectory::Home,
            )
            .unwrap();
            assert_eq!(resolved, home.path().join("flights.json"));
        });
    }

    #[test]
    fn home_keeps_path_already_in_home() {
        let home = tempdir().expect("tempdir");
        let inside = home.path().join("flights.json");
        temp_env::with_var("HOME", Some(home.path()), || {
            let resolved = resolve_store_path(&inside, StorageDirectory::Home).unwrap();
            assert_eq!(resolved, inside);
        });
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        for raw in ["", "/", "data/.."] {
            let err = resolve_store_path(Path::new(raw), StorageDirectory::AsGiven)
                .expect_err("should reject");
            assert!(matches!(err, StoreError::InvalidFileName { .. }));
        }
    }

    #[test]
    fn default_policy_is_home() {
        assert_eq!(StorageDirectory::default(), StorageDirectory::Home);
    }
}
