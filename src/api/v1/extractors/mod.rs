pub mod login;

pub use login::{Login, LoginUser};
