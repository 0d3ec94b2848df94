// Document Store: the canonical résumé value and its pure mutation operations.
// The live copy is owned by `session::Session`, never by this module.

pub mod handlers;
pub mod migration;
pub mod preset;
pub mod store;

use thiserror::Error;

use crate::models::resume::{SectionKey, UnknownKey};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownKey(#[from] UnknownKey),

    #[error("section '{0}' has no nested fields")]
    NotNested(SectionKey),
}

pub use migration::{decode_document, encode_document, initialize};
pub use preset::load_preset;
