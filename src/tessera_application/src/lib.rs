pub mod dto;
pub mod token_issuer;
pub mod use_cases;

pub use token_issuer::issue_access_token;
pub use use_cases::*;
