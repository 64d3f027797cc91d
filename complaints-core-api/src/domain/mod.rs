pub mod analytics;
pub mod auth;
pub mod call_request_status;
pub mod category;
pub mod commands;
pub mod complaint_status;
pub mod filters;
pub mod priority;
pub mod role;

pub use analytics::*;
pub use auth::*;
pub use call_request_status::*;
pub use category::*;
pub use commands::*;
pub use complaint_status::*;
pub use filters::*;
pub use priority::*;
pub use role::*;
