pub mod error;
pub mod product_repo;
pub mod wishlist_repo;
