//! Credential key domain types

mod types;

pub use types::{
    CLIENT_ID_FIELD, CLIENT_SECRET_FIELD, CredentialKey, KeyType, OauthClientCredentials,
};
