pub mod call_request_repository;
pub mod comment_repository;
pub mod complaint_repository;
pub mod principal_repository;

pub use call_request_repository::*;
pub use comment_repository::*;
pub use complaint_repository::*;
pub use principal_repository::*;
