pub mod auth;
pub mod wishlist;
