//! Postgres-backed collaborators.
//!
//! Thin adapters from the store traits onto the `repos` free functions; no
//! orchestration logic lives here.
use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::error::RepoError;
use crate::repos::{product_repo, wishlist_repo};
use crate::services::wishlist::store::{ProductLookup, WishlistEntry, WishlistStore};

#[derive(Clone)]
pub struct PgProductLookup {
    db: PgPool,
}

impl PgProductLookup {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductLookup for PgProductLookup {
    async fn exists(&self, product_id: i64) -> Result<bool, RepoError> {
        product_repo::exists(&self.db, product_id).await
    }
}

#[derive(Clone)]
pub struct PgWishlistStore {
    db: PgPool,
}

impl PgWishlistStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn to_entry(row: wishlist_repo::WishlistRow) -> WishlistEntry {
    WishlistEntry {
        user_id: row.user_id,
        product_id: row.product_id,
    }
}

#[async_trait]
impl WishlistStore for PgWishlistStore {
    async fn create(&self, user_id: i64, product_id: i64) -> Result<WishlistEntry, RepoError> {
        let row = wishlist_repo::create(&self.db, user_id, product_id).await?;
        Ok(to_entry(row))
    }

    async fn add(&self, user_id: i64, product_id: i64) -> Result<bool, RepoError> {
        wishlist_repo::add(&self.db, user_id, product_id).await
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<WishlistEntry>, RepoError> {
        let rows = wishlist_repo::list_by_user(&self.db, user_id).await?;
        Ok(rows.into_iter().map(to_entry).collect())
    }

    async fn remove_one(&self, user_id: i64, product_id: i64) -> Result<bool, RepoError> {
        wishlist_repo::remove_one(&self.db, user_id, product_id).await
    }

    async fn clear_by_user(&self, user_id: i64) -> Result<bool, RepoError> {
        wishlist_repo::clear_by_user(&self.db, user_id).await
    }
}
