//! Collaborator interfaces for wishlist orchestration.
//!
//! The service layer only talks to these two traits; production wires them
//! to Postgres (`pg.rs`), tests substitute in-memory fakes.
use async_trait::async_trait;

use crate::repos::error::RepoError;

/// A (user, product) association as stored by the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishlistEntry {
    pub user_id: i64,
    pub product_id: i64,
}

/// Product existence check, evaluated before every wishlist mutation that
/// references a product.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn exists(&self, product_id: i64) -> Result<bool, RepoError>;
}

/// CRUD primitives over (userId, productId) associations.
///
/// Boolean results signal plain success/failure:
/// - `Ok(true)`  => a row was written/removed
/// - `Ok(false)` => nothing matched (not a fault)
/// - `Err(_)`    => storage failure
///
/// Uniqueness of (userId, productId) is the store's responsibility, as is
/// correctness under concurrent requests touching the same pair.
#[async_trait]
pub trait WishlistStore: Send + Sync {
    // Create-style add: returns the resulting association record.
    async fn create(&self, user_id: i64, product_id: i64) -> Result<WishlistEntry, RepoError>;

    // Boolean-style add.
    async fn add(&self, user_id: i64, product_id: i64) -> Result<bool, RepoError>;

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<WishlistEntry>, RepoError>;

    async fn remove_one(&self, user_id: i64, product_id: i64) -> Result<bool, RepoError>;

    async fn clear_by_user(&self, user_id: i64) -> Result<bool, RepoError>;
}
