pub mod aggregates;
pub mod create;
pub mod find_by_id;
pub mod list;
pub mod repo_impl;
pub mod update_status;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ComplaintRepositoryImpl;
