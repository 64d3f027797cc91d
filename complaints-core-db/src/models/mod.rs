pub mod call_request;
pub mod comment;
pub mod complaint;
pub mod identifiable;
pub mod principal;

pub use call_request::*;
pub use comment::*;
pub use complaint::*;
pub use identifiable::*;
pub use principal::*;
