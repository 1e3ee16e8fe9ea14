use std::panic::Location;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("database.path cannot be empty {location}")]
    EmptyDatabasePath { location: ErrorLocation },

    #[error("database.path '{path}' must be relative and cannot contain '..' {location}")]
    InvalidDatabasePath {
        path: String,
        location: ErrorLocation,
    },

    #[error("logging.file '{path}' must be relative and cannot contain '..' {location}")]
    InvalidLogFile {
        path: String,
        location: ErrorLocation,
    },

    #[error("Cannot resolve the config directory: {source} {location}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("TOML parse error in {path}: {source} {location}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub(crate) fn empty_database_path() -> Self {
        Self::EmptyDatabasePath {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn invalid_database_path(path: &str) -> Self {
        Self::InvalidDatabasePath {
            path: path.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn invalid_log_file(path: &str) -> Self {
        Self::InvalidLogFile {
            path: path.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn working_directory(source: std::io::Error) -> Self {
        Self::WorkingDirectory {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn toml(path: &Path, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
