pub mod health;
pub mod wishlist;
