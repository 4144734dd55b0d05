//! Domain error types

use thiserror::Error;

use crate::key::KeyType;

/// Domain-level errors raised synchronously at the point of misuse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The credential key is not of the shape the caller needs.
    #[error("key '{key_id}' has type {found}, expected {expected}")]
    CredentialTypeMismatch {
        /// Identifier of the offending key.
        key_id: String,
        /// Key type the caller required.
        expected: KeyType,
        /// Key type the key actually has.
        found: KeyType,
    },

    /// A required credential field is absent or empty.
    #[error("key '{key_id}' is missing credential field '{field}'")]
    MissingCredentialField {
        /// Identifier of the offending key.
        key_id: String,
        /// Name of the missing field.
        field: String,
    },

    /// A resource owner from another provider family was supplied.
    #[error("resource owner belongs to provider '{found}', expected '{expected}'")]
    ResourceOwnerTypeMismatch {
        /// Provider family the caller handles.
        expected: String,
        /// Provider family of the supplied owner.
        found: String,
    },

    /// A provider option has an unusable value.
    #[error("invalid provider option '{name}': {message}")]
    InvalidOption {
        /// Option name.
        name: String,
        /// What is wrong with it.
        message: String,
    },

    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
