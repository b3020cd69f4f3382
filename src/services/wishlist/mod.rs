pub mod pg;
pub mod service;
pub mod store;
#[cfg(test)]
pub mod testing;

pub use pg::{PgProductLookup, PgWishlistStore};
pub use service::{WishlistError, WishlistService};
pub use store::{ProductLookup, WishlistEntry, WishlistStore};
