//! Error types for page rendering.

use storefront_commerce::CommerceError;
use thiserror::Error;

use crate::data::DataError;

/// Errors that can occur while preparing a page.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A collaborator failed to supply data.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Domain rule violated by the supplied data.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Checkout requested with nothing in the basket.
    #[error("Cannot check out an empty basket")]
    EmptyBasket,
}
