//! In-memory collaborator fakes shared by service- and router-level tests.
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::repos::error::RepoError;
use crate::services::wishlist::store::{ProductLookup, WishlistEntry, WishlistStore};

/// Fixed set of known products.
pub struct FixedProducts(pub Vec<i64>);

#[async_trait]
impl ProductLookup for FixedProducts {
    async fn exists(&self, product_id: i64) -> Result<bool, RepoError> {
        Ok(self.0.contains(&product_id))
    }
}

/// In-memory store; counts mutation calls so tests can assert the
/// product-existence precondition short-circuits before storage.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<(i64, i64)>>,
    mutations: AtomicUsize,
}

impl MemoryStore {
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WishlistStore for MemoryStore {
    async fn create(&self, user_id: i64, product_id: i64) -> Result<WishlistEntry, RepoError> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        if !entries.contains(&(user_id, product_id)) {
            entries.push((user_id, product_id));
        }
        Ok(WishlistEntry {
            user_id,
            product_id,
        })
    }

    async fn add(&self, user_id: i64, product_id: i64) -> Result<bool, RepoError> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        if entries.contains(&(user_id, product_id)) {
            return Ok(false);
        }
        entries.push((user_id, product_id));
        Ok(true)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<WishlistEntry>, RepoError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .filter(|(u, _)| *u == user_id)
            .map(|&(user_id, product_id)| WishlistEntry {
                user_id,
                product_id,
            })
            .collect())
    }

    async fn remove_one(&self, user_id: i64, product_id: i64) -> Result<bool, RepoError> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|&(u, p)| !(u == user_id && p == product_id));
        Ok(entries.len() < before)
    }

    async fn clear_by_user(&self, user_id: i64) -> Result<bool, RepoError> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|&(u, _)| u != user_id);
        Ok(entries.len() < before)
    }
}
