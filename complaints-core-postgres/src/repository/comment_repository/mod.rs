pub mod create;
pub mod list_by_complaint;
pub mod repo_impl;

pub use repo_impl::CommentRepositoryImpl;
