pub mod call;
pub mod token;

pub use call::{CallCredentials, CreateCallRequest, JoinCallRequest};
pub use token::Claims;
