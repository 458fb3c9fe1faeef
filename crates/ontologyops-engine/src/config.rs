//! Engine configuration.
//!
//! Loaded from an optional YAML file. Every key has a default, so a file
//! only needs the keys it overrides; sections this crate does not know
//! (`deployment`, `monitoring`, ...) are ignored.
//!
//! ```yaml
//! version_control:
//!   storage_path: .ontologyops/versions
//!   hash_algorithm: sha256
//!   fingerprint_length: 16
//! vocabulary:
//!   reserved_prefixes:
//!     - "http://www.w3.org/"
//! ```

use ontologyops_core::errors::{ExError, ExErrorKind};
use ontologyops_core::snapshot::digest::validate_length;
use ontologyops_core::snapshot::DEFAULT_FINGERPRINT_LENGTH;
use ontologyops_core::vocabulary::{Vocabulary, W3C_PREFIX};
use ontologyops_store::errors::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Files probed, relative to the working directory, when no explicit
/// config path is given. The first one that exists wins.
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config/example-config.yml",
    "config.yml",
    ".ontologyops/config.yml",
];

/// Default snapshot storage root
pub const DEFAULT_STORAGE_PATH: &str = ".ontologyops/versions";

/// The only supported content hash
pub const SUPPORTED_HASH_ALGORITHM: &str = "sha256";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub version_control: VersionControlConfig,
    pub vocabulary: VocabularyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionControlConfig {
    /// Root directory; each tracked graph gets a subdirectory
    pub storage_path: PathBuf,
    pub hash_algorithm: String,
    /// Fingerprint width in hex characters (8..=64)
    pub fingerprint_length: usize,
}

impl Default for VersionControlConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            hash_algorithm: SUPPORTED_HASH_ALGORITHM.to_string(),
            fingerprint_length: DEFAULT_FINGERPRINT_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub reserved_prefixes: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            reserved_prefixes: vec![W3C_PREFIX.to_string()],
        }
    }
}

fn invalid_config(message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_config")
        .with_message(message)
}

impl EngineConfig {
    /// Parse and validate YAML text. Empty text yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the YAML is malformed or a value is invalid.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text)
            .map_err(|e| invalid_config(format!("malformed configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file.
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be read
    /// - `InvalidConfig` if its content is invalid
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_message(format!("{}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&text).map_err(|e| {
            let message = format!("{}: {}", path.display(), e.message());
            e.with_message(message)
        })
    }

    /// Resolve the configuration for a process.
    ///
    /// An explicit path must exist. Otherwise the search paths are probed
    /// under `base_dir`, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::from_file`].
    pub fn load(explicit: Option<&Path>, base_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::discover(base_dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using discovered config");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// First existing search path under `base_dir`.
    pub fn discover(base_dir: &Path) -> Option<PathBuf> {
        CONFIG_SEARCH_PATHS
            .iter()
            .map(|p| base_dir.join(p))
            .find(|p| p.is_file())
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` on an unsupported hash algorithm, a
    /// fingerprint length outside 8..=64 or an empty storage path.
    pub fn validate(&self) -> Result<()> {
        let vc = &self.version_control;
        if !vc.hash_algorithm.eq_ignore_ascii_case(SUPPORTED_HASH_ALGORITHM) {
            return Err(invalid_config(format!(
                "unsupported hash_algorithm '{}': only {} is available",
                vc.hash_algorithm, SUPPORTED_HASH_ALGORITHM
            )));
        }
        validate_length(vc.fingerprint_length).map_err(ExError::from)?;
        if vc.storage_path.as_os_str().is_empty() {
            return Err(invalid_config("storage_path must not be empty"));
        }
        Ok(())
    }

    /// Override the storage root.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.version_control.storage_path = path.into();
        self
    }

    pub fn storage_path(&self) -> &Path {
        &self.version_control.storage_path
    }

    pub fn fingerprint_length(&self) -> usize {
        self.version_control.fingerprint_length
    }

    /// Vocabulary predicate built from the configured prefixes.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::with_reserved_prefixes(self.vocabulary.reserved_prefixes.iter().cloned())
    }
}
