use ontologyops_core_types::RequestId;
use thiserror::Error;

/// Result type alias using VcError
pub type Result<T> = std::result::Result<T, VcError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output. None of the kinds are transient:
/// the store is local and snapshots are immutable, so nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    /// Fingerprint or entity absent
    NotFound,

    // Merge
    /// Manual merge selected a statement not present in its claimed source
    InvalidSelection,

    // Store integrity
    /// Version-log or snapshot metadata failed to parse or verify
    CorruptMetadata,
    /// Two different statement sets truncate to the same fingerprint
    FingerprintCollision,

    // Input
    InvalidInput,
    InvalidConfig,
    /// Graph source could not be parsed
    Parse,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Concurrency,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidSelection => "ERR_INVALID_SELECTION",
            ExErrorKind::CorruptMetadata => "ERR_CORRUPT_METADATA",
            ExErrorKind::FingerprintCollision => "ERR_FINGERPRINT_COLLISION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context for
/// debugging. Store and engine functions return this type.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    fingerprint: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            fingerprint: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add snapshot fingerprint context
    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the fingerprint context, if any
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(fingerprint) = &self.fingerprint {
            write!(f, " (fingerprint: {})", fingerprint)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for the pure version control operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VcError {
    /// No snapshot with this fingerprint exists
    #[error("Snapshot not found: {fingerprint}")]
    SnapshotNotFound { fingerprint: String },

    /// Entity is not part of the snapshot's entity index
    #[error("Entity {entity_id} not found in snapshot {fingerprint}")]
    EntityNotFound {
        fingerprint: String,
        entity_id: String,
    },

    /// Manual merge references a statement absent from its claimed source
    #[error("Selected statement {statement} is not present in snapshot {side}")]
    InvalidSelection { side: String, statement: String },

    /// Persisted snapshot data failed to parse or verify
    #[error("Corrupt metadata for snapshot {fingerprint}: {reason}")]
    CorruptMetadata { fingerprint: String, reason: String },

    /// Fingerprint already taken by a different statement set
    #[error("Fingerprint {fingerprint} collides: stored digest {existing_digest}, new digest {new_digest}")]
    FingerprintCollision {
        fingerprint: String,
        existing_digest: String,
        new_digest: String,
    },

    /// Merge strategy name not recognised
    #[error("Unknown merge strategy '{name}': expected union, intersection or manual")]
    UnknownMergeStrategy { name: String },

    /// Fingerprint length outside the supported range
    #[error("Invalid fingerprint length {length}: must be between 8 and 64")]
    InvalidFingerprintLength { length: usize },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<VcError> for ExError {
    fn from(err: VcError) -> Self {
        match err {
            VcError::SnapshotNotFound { fingerprint } => ExError::new(ExErrorKind::NotFound)
                .with_fingerprint(fingerprint)
                .with_message("snapshot not found"),

            VcError::EntityNotFound {
                fingerprint,
                entity_id,
            } => ExError::new(ExErrorKind::NotFound)
                .with_fingerprint(fingerprint)
                .with_entity_id(entity_id)
                .with_message("entity not found in snapshot"),

            VcError::InvalidSelection { side, statement } => {
                ExError::new(ExErrorKind::InvalidSelection)
                    .with_op("merge")
                    .with_message(format!(
                        "statement {} is not present in snapshot {}",
                        statement, side
                    ))
            }

            VcError::CorruptMetadata {
                fingerprint,
                reason,
            } => ExError::new(ExErrorKind::CorruptMetadata)
                .with_fingerprint(fingerprint)
                .with_message(reason),

            VcError::FingerprintCollision {
                fingerprint,
                existing_digest,
                new_digest,
            } => ExError::new(ExErrorKind::FingerprintCollision)
                .with_fingerprint(fingerprint)
                .with_message(format!(
                    "stored content digest {} differs from new content digest {}",
                    existing_digest, new_digest
                )),

            VcError::UnknownMergeStrategy { name } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("merge")
                .with_message(format!("unknown merge strategy '{}'", name)),

            VcError::InvalidFingerprintLength { length } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(format!(
                    "fingerprint length {} is outside 8..=64",
                    length
                ))
            }

            VcError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            VcError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to VcError
impl From<serde_json::Error> for VcError {
    fn from(err: serde_json::Error) -> Self {
        VcError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::InvalidSelection, "ERR_INVALID_SELECTION"),
            (ExErrorKind::CorruptMetadata, "ERR_CORRUPT_METADATA"),
            (
                ExErrorKind::FingerprintCollision,
                "ERR_FINGERPRINT_COLLISION",
            ),
            (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("load")
            .with_fingerprint("abcd1234abcd1234")
            .with_message("snapshot not found");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_NOT_FOUND] in operation 'load'"));
        assert!(text.contains("abcd1234abcd1234"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk full");
        let outer = ExError::new(ExErrorKind::Persistence).with_source(inner);
        let source = std::error::Error::source(&outer).expect("source should be set");
        assert!(source.to_string().contains("disk full"));
    }
}
