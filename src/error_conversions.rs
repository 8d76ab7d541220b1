//! Error conversion glue between the layers.
//!
//! The domain layer must not depend on service or repository error types;
//! conversions live here so `data`-only consumers still get them.

use crate::repository::errors::RepositoryError;

#[cfg(feature = "server")]
use crate::services::ServiceError;

#[cfg(feature = "server")]
impl From<RepositoryError> for ServiceError {
    fn from(_err: RepositoryError) -> Self {
        ServiceError::Internal
    }
}
