//! Wishlist orchestration.
//!
//! Mutations referencing a product run the product-existence precondition
//! first; when it fails the storage collaborator is never called, so no
//! partial state is created.
use std::sync::Arc;

use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::wishlist::store::{ProductLookup, WishlistStore};

#[derive(Debug, Error)]
pub enum WishlistError {
    #[error("product {product_id} not found")]
    ProductNotFound { product_id: i64 },

    #[error(transparent)]
    Store(#[from] RepoError),
}

#[derive(Clone)]
pub struct WishlistService {
    products: Arc<dyn ProductLookup>,
    store: Arc<dyn WishlistStore>,
}

impl WishlistService {
    pub fn new(products: Arc<dyn ProductLookup>, store: Arc<dyn WishlistStore>) -> Self {
        Self { products, store }
    }

    async fn ensure_product_exists(&self, product_id: i64) -> Result<(), WishlistError> {
        if self.products.exists(product_id).await? {
            Ok(())
        } else {
            Err(WishlistError::ProductNotFound { product_id })
        }
    }

    /// Create-style add: returns the product ids resulting from this add
    /// (a single-element list containing the new product id), so callers
    /// can confirm the resulting state.
    pub async fn create(&self, user_id: i64, product_id: i64) -> Result<Vec<i64>, WishlistError> {
        self.ensure_product_exists(product_id).await?;
        let entry = self.store.create(user_id, product_id).await?;
        Ok(vec![entry.product_id])
    }

    /// Boolean-style add.
    pub async fn add(&self, user_id: i64, product_id: i64) -> Result<bool, WishlistError> {
        self.ensure_product_exists(product_id).await?;
        Ok(self.store.add(user_id, product_id).await?)
    }

    /// Product ids saved by `user_id`; the user id is not part of the
    /// projection.
    pub async fn list(&self, user_id: i64) -> Result<Vec<i64>, WishlistError> {
        let entries = self.store.list_by_user(user_id).await?;
        Ok(entries.into_iter().map(|e| e.product_id).collect())
    }

    /// `Ok(false)` means no such association existed (storage faults are
    /// `Err`, keeping the two outcomes distinguishable).
    pub async fn remove_one(&self, user_id: i64, product_id: i64) -> Result<bool, WishlistError> {
        self.ensure_product_exists(product_id).await?;
        Ok(self.store.remove_one(user_id, product_id).await?)
    }

    pub async fn clear(&self, user_id: i64) -> Result<bool, WishlistError> {
        Ok(self.store.clear_by_user(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::wishlist::testing::{FixedProducts, MemoryStore};

    fn make_service(known_products: Vec<i64>) -> (WishlistService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let service = WishlistService::new(Arc::new(FixedProducts(known_products)), store.clone());
        (service, store)
    }

    #[tokio::test]
    async fn create_returns_resulting_product_ids() {
        let (service, _) = make_service(vec![10]);

        let ids = service.create(1, 10).await.expect("create");
        assert_eq!(ids, vec![10]);
    }

    #[tokio::test]
    async fn create_unknown_product_never_reaches_storage() {
        let (service, store) = make_service(vec![]);

        let err = service.create(5, 999).await.expect_err("unknown product");
        assert!(matches!(
            err,
            WishlistError::ProductNotFound { product_id: 999 }
        ));
        assert_eq!(store.mutation_count(), 0);
        assert!(service.list(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_unknown_product_never_reaches_storage() {
        let (service, store) = make_service(vec![]);

        assert!(service.add(1, 7).await.is_err());
        assert!(service.remove_one(1, 7).await.is_err());
        assert_eq!(store.mutation_count(), 0);
    }

    #[tokio::test]
    async fn list_contains_added_products() {
        let (service, _) = make_service(vec![1, 2]);

        assert!(service.add(9, 1).await.unwrap());
        assert!(service.add(9, 2).await.unwrap());

        let ids = service.list(9).await.unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&1));
        assert!(ids.contains(&2));
    }

    #[tokio::test]
    async fn list_projects_only_the_users_entries() {
        let (service, _) = make_service(vec![1, 2]);

        service.add(9, 1).await.unwrap();
        service.add(8, 2).await.unwrap();

        assert_eq!(service.list(9).await.unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn clear_then_list_is_empty() {
        let (service, _) = make_service(vec![1, 2]);

        service.add(9, 1).await.unwrap();
        service.add(9, 2).await.unwrap();

        assert!(service.clear(9).await.unwrap());
        assert!(service.list(9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_remove_round_trip() {
        let (service, _) = make_service(vec![3]);

        service.add(4, 3).await.unwrap();
        assert!(service.remove_one(4, 3).await.unwrap());
        assert!(!service.list(4).await.unwrap().contains(&3));
    }

    #[tokio::test]
    async fn remove_one_missing_association_is_false_not_fault() {
        let (service, _) = make_service(vec![3]);

        assert!(!service.remove_one(4, 3).await.unwrap());
    }
}
