pub mod create_if_no_active;
pub mod find;
pub mod repo_impl;
pub mod transitions;

pub use repo_impl::CallRequestRepositoryImpl;
