pub mod access;
pub mod analytics_service;
pub mod call_request_service;
pub mod comment_service;
pub mod complaint_service;
pub mod identity_service;
pub mod reference;

#[cfg(test)]
pub mod test_support;

pub use access::*;
pub use analytics_service::*;
pub use call_request_service::*;
pub use comment_service::*;
pub use complaint_service::*;
pub use identity_service::*;
pub use reference::*;

use complaints_core_api::error::CoreError;

/// Repositories speak boxed errors; everything surfacing from them is a
/// database failure as far as callers are concerned.
pub(crate) fn db_err(err: Box<dyn std::error::Error + Send + Sync>) -> CoreError {
    CoreError::Database(err.to_string())
}
