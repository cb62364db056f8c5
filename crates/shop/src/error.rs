//! Shop error type.

use catalog::CatalogError;
use domain::OrderError;
use payment::PaymentError;
use thiserror::Error;

/// Anything that can stop a shop run.
///
/// Invalid amounts arrive wrapped in [`PaymentError::InvalidAmount`], since
/// payment and loyalty are where amounts are validated.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}
