//! Form definitions backing the blog routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod blog;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid title")]
    InvalidTitle,

    #[error("invalid description")]
    InvalidDescription,

    #[error("invalid image url")]
    InvalidImageUrl,

    #[error("invalid date")]
    InvalidDate,
}
