pub mod call_request_repository;
pub mod comment_repository;
pub mod complaint_repository;
pub mod principal_repository;
