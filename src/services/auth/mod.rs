pub mod token;

pub use token::{LoginClaims, TokenError, TokenValidator};
