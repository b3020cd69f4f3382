mod core;
mod types;

pub use core::LoginUser;
pub use types::Login;
